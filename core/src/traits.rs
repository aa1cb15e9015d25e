use crate::state::IntersectionState;

/// Outcome of a switching evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Switch,
    Hold,
}

pub trait SignalPolicy {
    fn kind(&self) -> &str;

    // Metadata for the mode picker (No GUI types here!)
    fn palette_color_rgb(&self) -> [u8; 3];
    fn palette_description(&self) -> &str;

    /// Time that must pass since the last light change before `decide` runs.
    fn threshold_us(&self) -> u64;

    /// Called once the threshold has elapsed. A `Hold` leaves the switch
    /// timestamp untouched.
    fn decide(&self, state: &IntersectionState) -> Decision;
}
