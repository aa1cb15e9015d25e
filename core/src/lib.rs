pub mod analytics;
pub mod config;
pub mod engine;
pub mod error;
pub mod policies;
pub mod state;
pub mod traits;

pub use analytics::{Kpis, MetricPoint, MetricsCollector};
pub use config::SimConfig;
pub use engine::{step, Simulation};
pub use error::{ConfigError, StateError};
pub use policies::{create_policy, get_palette_info, ControlMode, PolicyParams};
pub use state::{Approach, Axis, IntersectionState, LightState, Phase, RunStatistics};
pub use traits::{Decision, SignalPolicy};

/// Simulation constants (time in Microseconds)
pub const US_PER_SEC: u64 = 1_000_000;
pub const ARRIVAL_PROBABILITY: f64 = 0.3; // per approach, per tick
pub const DISCHARGE_CAPACITY: u32 = 2; // vehicles per green approach, per tick
pub const SMART_EVALUATION_SECS: u64 = 10;
