use crate::policies::PolicyParams;
use crate::state::{Axis, IntersectionState, Phase};
use crate::traits::{Decision, SignalPolicy};

/// Demand-based control: every `SMART_EVALUATION_SECS` (and on every tick
/// after a hold) gives green to the axis with the longer queues.
#[derive(Debug, Clone, Default)]
pub struct SmartControl;

// The evaluation interval is not configurable, so no operator setting applies.
impl From<&PolicyParams> for SmartControl {
    fn from(_: &PolicyParams) -> Self {
        Self
    }
}

impl SignalPolicy for SmartControl {
    fn kind(&self) -> &str { "Smart Control" }
    fn palette_color_rgb(&self) -> [u8; 3] { [163, 190, 140] }
    fn palette_description(&self) -> &str { "Gives green to the busier axis" }

    fn threshold_us(&self) -> u64 {
        crate::SMART_EVALUATION_SECS * crate::US_PER_SEC
    }

    fn decide(&self, state: &IntersectionState) -> Decision {
        let vertical = state.load(Axis::Vertical);
        let horizontal = state.load(Axis::Horizontal);
        match state.phase() {
            Phase::NsGreen if vertical < horizontal => Decision::Switch,
            Phase::EwGreen if horizontal < vertical => Decision::Switch,
            _ => Decision::Hold,
        }
    }
}
