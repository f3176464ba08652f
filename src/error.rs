use thiserror::Error;

/// Rejected configurations. The engine keeps its previous state when any of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid range: start {start} must be less than end {end}")]
    InvalidRange { start: i64, end: i64 },
    #[error("range [{start}, {end}] is too large (at most {max} numbers)")]
    RangeTooLarge { start: i64, end: i64, max: u64 },
    #[error("at least one prize is required")]
    NoPrizes,
    #[error("prize name must not be empty")]
    EmptyPrizeName,
    #[error("duplicate prize name: {0}")]
    DuplicatePrize(String),
    #[error("prize {0} must have at least one winner")]
    ZeroCount(String),
    #[error(
        "not enough numbers: range [{start}, {end}] has {pool_size} numbers without the digit 4, \
         but the prizes need {required} in total"
    )]
    InsufficientPool {
        start: i64,
        end: i64,
        pool_size: usize,
        required: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("unknown prize: {0}")]
    UnknownPrize(String),
    #[error("every eligible number has already been drawn (prize {prize} still has open slots)")]
    PoolExhausted { prize: String },
}
