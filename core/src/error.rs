use crate::state::LightState;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("fixed green duration {value}s is outside {min}..={max}s")]
    FixedDurationOutOfRange { value: u64, min: u64, max: u64 },
    #[error("history length must be at least 1")]
    EmptyHistory,
    #[error("history length {value} exceeds the maximum of {max}")]
    HistoryLenOutOfRange { value: usize, max: usize },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("lights {0:?} do not form a valid phase")]
    InconsistentLights([LightState; 4]),
}
