use crate::error::ConfigError;
use crate::policies::ControlMode;
use serde::{Deserialize, Serialize};

pub const MIN_FIXED_DURATION_SECS: u64 = 5;
pub const MAX_FIXED_DURATION_SECS: u64 = 30;
pub const DEFAULT_FIXED_DURATION_SECS: u64 = 15;
pub const DEFAULT_HISTORY_LEN: usize = 300;
/// One day of one-second ticks.
pub const MAX_HISTORY_LEN: usize = 86_400;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub mode: ControlMode,
    pub fixed_duration_secs: u64,
    /// Seed for arrival generation; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub history_len: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            mode: ControlMode::FixedTimer,
            fixed_duration_secs: DEFAULT_FIXED_DURATION_SECS,
            seed: None,
            history_len: DEFAULT_HISTORY_LEN,
        }
    }
}

impl SimConfig {
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_fixed_duration(self.fixed_duration_secs)?;
        if self.history_len == 0 {
            return Err(ConfigError::EmptyHistory);
        }
        if self.history_len > MAX_HISTORY_LEN {
            return Err(ConfigError::HistoryLenOutOfRange {
                value: self.history_len,
                max: MAX_HISTORY_LEN,
            });
        }
        Ok(())
    }
}

pub fn validate_fixed_duration(secs: u64) -> Result<u64, ConfigError> {
    if (MIN_FIXED_DURATION_SECS..=MAX_FIXED_DURATION_SECS).contains(&secs) {
        Ok(secs)
    } else {
        Err(ConfigError::FixedDurationOutOfRange {
            value: secs,
            min: MIN_FIXED_DURATION_SECS,
            max: MAX_FIXED_DURATION_SECS,
        })
    }
}

/// Slider input is clamped rather than rejected.
pub fn clamp_fixed_duration(secs: u64) -> u64 {
    secs.clamp(MIN_FIXED_DURATION_SECS, MAX_FIXED_DURATION_SECS)
}
