use serde::Deserialize;

use crate::error::ConfigError;

/// A named award with a fixed number of winner slots.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawPrize")]
pub struct Prize {
    name: String,
    count: u32,
}

// Shape of a prize as it appears in the config file, before validation.
#[derive(Debug, Deserialize)]
struct RawPrize {
    name: String,
    count: u32,
}

impl TryFrom<RawPrize> for Prize {
    type Error = ConfigError;

    fn try_from(raw: RawPrize) -> Result<Self, Self::Error> {
        Prize::new(raw.name, raw.count)
    }
}

impl Prize {
    /// Surrounding whitespace is trimmed from the name.
    pub fn new(name: impl Into<String>, count: u32) -> Result<Self, ConfigError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ConfigError::EmptyPrizeName);
        }
        if count == 0 {
            return Err(ConfigError::ZeroCount(name));
        }
        Ok(Self { name, count })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrizeStatus {
    NotStarted,
    Drawing,
    Complete,
}

impl PrizeStatus {
    pub fn from_progress(drawn: usize, target: u32) -> Self {
        if drawn == 0 {
            PrizeStatus::NotStarted
        } else if drawn < target as usize {
            PrizeStatus::Drawing
        } else {
            PrizeStatus::Complete
        }
    }
}
