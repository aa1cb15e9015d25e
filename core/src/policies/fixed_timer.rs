use crate::policies::PolicyParams;
use crate::state::IntersectionState;
use crate::traits::{Decision, SignalPolicy};

/// Fixed-period oscillator: flips the lights every `duration_secs`
/// regardless of demand.
#[derive(Debug, Clone)]
pub struct FixedTimer {
    pub duration_secs: u64,
}

impl From<&PolicyParams> for FixedTimer {
    fn from(params: &PolicyParams) -> Self {
        Self { duration_secs: params.fixed_duration_secs }
    }
}

impl Default for FixedTimer {
    fn default() -> Self {
        Self::from(&PolicyParams::default())
    }
}

impl SignalPolicy for FixedTimer {
    fn kind(&self) -> &str { "Fixed-Timer" }
    fn palette_color_rgb(&self) -> [u8; 3] { [129, 161, 193] }
    fn palette_description(&self) -> &str { "Alternates green every N seconds" }
    fn threshold_us(&self) -> u64 { self.duration_secs.saturating_mul(crate::US_PER_SEC) }
    fn decide(&self, _state: &IntersectionState) -> Decision { Decision::Switch }
}
