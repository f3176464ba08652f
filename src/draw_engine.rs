use std::collections::{BTreeSet, HashMap, HashSet};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::eligible_pool::{MAX_RANGE_SPAN, eligible_numbers, range_span};
use crate::error::{ConfigError, DrawError};
use crate::prize::{Prize, PrizeStatus};

/// Preferred minimum distance between a new winner and every number already drawn.
/// Dropped for a draw when no remaining number can honour it.
pub const MIN_GAP: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    Winner(i64),
    /// The prize already has all its winners; nothing was drawn.
    AlreadyComplete,
}

/// Ticket range and prize list. Only constructed through [`Configuration::new`],
/// so a value of this type always has a valid range and unique prize names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    range_start: i64,
    range_end: i64,
    prizes: Vec<Prize>,
}

impl Configuration {
    pub fn new(range_start: i64, range_end: i64, prizes: Vec<Prize>) -> Result<Self, ConfigError> {
        if range_start >= range_end {
            return Err(ConfigError::InvalidRange { start: range_start, end: range_end });
        }
        if range_span(range_start, range_end) > MAX_RANGE_SPAN {
            return Err(ConfigError::RangeTooLarge {
                start: range_start,
                end: range_end,
                max: MAX_RANGE_SPAN,
            });
        }
        if prizes.is_empty() {
            return Err(ConfigError::NoPrizes);
        }
        let mut seen = HashSet::new();
        for prize in &prizes {
            if !seen.insert(prize.name()) {
                return Err(ConfigError::DuplicatePrize(prize.name().to_string()));
            }
        }
        Ok(Self { range_start, range_end, prizes })
    }

    pub fn range_start(&self) -> i64 {
        self.range_start
    }

    pub fn range_end(&self) -> i64 {
        self.range_end
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn prize(&self, name: &str) -> Option<&Prize> {
        self.prizes.iter().find(|p| p.name() == name)
    }

    pub fn total_winners(&self) -> u64 {
        self.prizes.iter().map(|p| u64::from(p.count())).sum()
    }
}

/// Owns the configuration, the eligible pool derived from it and the draw state.
/// Winners are unique across all prizes until [`DrawEngine::reset`].
pub struct DrawEngine<R = StdRng> {
    config: Option<Configuration>,
    pool: Vec<i64>,
    used_numbers: BTreeSet<i64>,
    drawn_by_prize: HashMap<String, Vec<i64>>,
    rng: R,
}

impl DrawEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for DrawEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DrawEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            config: None,
            pool: Vec::new(),
            used_numbers: BTreeSet::new(),
            drawn_by_prize: HashMap::new(),
            rng,
        }
    }

    /// Replaces the configuration and clears every draw. On error nothing changes.
    pub fn set_configuration(
        &mut self,
        range_start: i64,
        range_end: i64,
        prizes: Vec<Prize>,
    ) -> Result<(), ConfigError> {
        let config = Configuration::new(range_start, range_end, prizes)?;
        let pool = eligible_numbers(range_start, range_end);
        let required = config.total_winners();
        if (pool.len() as u64) < required {
            return Err(ConfigError::InsufficientPool {
                start: range_start,
                end: range_end,
                pool_size: pool.len(),
                required,
            });
        }

        debug!(pool_size = pool.len(), required, "eligible pool built");
        info!(
            range_start,
            range_end,
            prizes = config.prizes().len(),
            "draw configuration applied"
        );
        self.drawn_by_prize = empty_draws(config.prizes());
        self.used_numbers.clear();
        self.pool = pool;
        self.config = Some(config);
        Ok(())
    }

    /// Draws one winner for `prize_name`.
    pub fn draw_once(&mut self, prize_name: &str) -> Result<DrawOutcome, DrawError> {
        let target = self
            .config
            .as_ref()
            .and_then(|c| c.prize(prize_name))
            .map(Prize::count)
            .ok_or_else(|| DrawError::UnknownPrize(prize_name.to_string()))?;

        let drawn = self.drawn_by_prize.get(prize_name).map_or(0, Vec::len);
        if drawn >= target as usize {
            return Ok(DrawOutcome::AlreadyComplete);
        }

        let available: Vec<i64> = self
            .pool
            .iter()
            .copied()
            .filter(|n| !self.used_numbers.contains(n))
            .collect();
        let safe: Vec<i64> = available.iter().copied().filter(|&n| self.keeps_gap(n)).collect();

        let candidates = if safe.is_empty() {
            if !available.is_empty() {
                warn!(
                    prize = prize_name,
                    available = available.len(),
                    "no number keeps the minimum gap, drawing from all remaining numbers"
                );
            }
            &available
        } else {
            &safe
        };

        let Some(&winner) = candidates.choose(&mut self.rng) else {
            return Err(DrawError::PoolExhausted { prize: prize_name.to_string() });
        };

        self.used_numbers.insert(winner);
        self.drawn_by_prize
            .entry(prize_name.to_string())
            .or_default()
            .push(winner);
        info!(prize = prize_name, winner, drawn = drawn + 1, target, "winner drawn");
        Ok(DrawOutcome::Winner(winner))
    }

    /// Forgets every winner. The configuration is kept.
    pub fn reset(&mut self) {
        self.used_numbers.clear();
        self.drawn_by_prize = self
            .config
            .as_ref()
            .map(|c| empty_draws(c.prizes()))
            .unwrap_or_default();
        info!("all draws reset");
    }

    fn keeps_gap(&self, n: i64) -> bool {
        let lo = n.saturating_sub(MIN_GAP - 1);
        let hi = n.saturating_add(MIN_GAP - 1);
        self.used_numbers.range(lo..=hi).next().is_none()
    }
}

impl<R> DrawEngine<R> {
    pub fn configuration(&self) -> Option<&Configuration> {
        self.config.as_ref()
    }

    /// Winners of one prize in draw order.
    pub fn drawn(&self, prize_name: &str) -> Option<&[i64]> {
        self.drawn_by_prize.get(prize_name).map(Vec::as_slice)
    }

    /// Every prize with its winners, in configuration order.
    pub fn results(&self) -> Vec<(&Prize, &[i64])> {
        let Some(config) = &self.config else {
            return Vec::new();
        };
        config
            .prizes()
            .iter()
            .map(|p| (p, self.drawn(p.name()).unwrap_or(&[])))
            .collect()
    }

    pub fn status(&self, prize_name: &str) -> Option<PrizeStatus> {
        let prize = self.config.as_ref()?.prize(prize_name)?;
        let drawn = self.drawn(prize_name).map_or(0, <[i64]>::len);
        Some(PrizeStatus::from_progress(drawn, prize.count()))
    }

    /// Winner slots still open for a prize.
    pub fn remaining(&self, prize_name: &str) -> Option<u32> {
        let prize = self.config.as_ref()?.prize(prize_name)?;
        let drawn = self.drawn(prize_name).map_or(0, <[i64]>::len);
        Some(prize.count().saturating_sub(drawn as u32))
    }

    /// First prize, in configuration order, that still has open slots.
    pub fn next_open_prize(&self) -> Option<&Prize> {
        self.config
            .as_ref()?
            .prizes()
            .iter()
            .find(|p| self.status(p.name()) != Some(PrizeStatus::Complete))
    }

    /// True once every configured prize is complete.
    pub fn is_finished(&self) -> bool {
        self.config.is_some() && self.next_open_prize().is_none()
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Smallest and largest eligible numbers.
    pub fn pool_bounds(&self) -> Option<(i64, i64)> {
        Some((*self.pool.first()?, *self.pool.last()?))
    }

    pub fn used_count(&self) -> usize {
        self.used_numbers.len()
    }
}

fn empty_draws(prizes: &[Prize]) -> HashMap<String, Vec<i64>> {
    prizes.iter().map(|p| (p.name().to_string(), Vec::new())).collect()
}
