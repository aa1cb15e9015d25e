use crate::error::StateError;
use serde::{Deserialize, Serialize};

/// One of the four roads feeding the intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Approach {
    N,
    S,
    E,
    W,
}

impl Approach {
    pub const ALL: [Approach; 4] = [Approach::N, Approach::S, Approach::E, Approach::W];

    pub fn axis(self) -> Axis {
        match self {
            Approach::N | Approach::S => Axis::Vertical,
            Approach::E | Approach::W => Axis::Horizontal,
        }
    }

    pub fn opposite(self) -> Approach {
        match self {
            Approach::N => Approach::S,
            Approach::S => Approach::N,
            Approach::E => Approach::W,
            Approach::W => Approach::E,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Approach::N => "North",
            Approach::S => "South",
            Approach::E => "East",
            Approach::W => "West",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Paired approaches that always share a light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightState {
    Green,
    // Never produced by the controller; kept so the UI palette is complete.
    Yellow,
    Red,
}

/// Which axis currently has right of way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NsGreen,
    EwGreen,
}

impl Phase {
    pub fn flipped(self) -> Phase {
        match self {
            Phase::NsGreen => Phase::EwGreen,
            Phase::EwGreen => Phase::NsGreen,
        }
    }

    pub fn green_axis(self) -> Axis {
        match self {
            Phase::NsGreen => Axis::Vertical,
            Phase::EwGreen => Axis::Horizontal,
        }
    }

    pub fn light_for(self, approach: Approach) -> LightState {
        if approach.axis() == self.green_axis() {
            LightState::Green
        } else {
            LightState::Red
        }
    }
}

/// Lights, queues and the time of the last light change.
///
/// Lights are only ever written through [`IntersectionState::apply_phase`], so
/// paired approaches can never disagree. Deserialized values are checked
/// against the same rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawIntersectionState")]
pub struct IntersectionState {
    lights: [LightState; 4],
    queues: [u32; 4],
    pub last_switch_us: u64,
}

#[derive(Deserialize)]
struct RawIntersectionState {
    lights: [LightState; 4],
    queues: [u32; 4],
    last_switch_us: u64,
}

impl TryFrom<RawIntersectionState> for IntersectionState {
    type Error = StateError;

    fn try_from(raw: RawIntersectionState) -> Result<Self, Self::Error> {
        let phase = if raw.lights[Approach::N.index()] == LightState::Green {
            Phase::NsGreen
        } else {
            Phase::EwGreen
        };
        if Approach::ALL.iter().any(|a| raw.lights[a.index()] != phase.light_for(*a)) {
            return Err(StateError::InconsistentLights(raw.lights));
        }
        Ok(Self {
            lights: raw.lights,
            queues: raw.queues,
            last_switch_us: raw.last_switch_us,
        })
    }
}

impl IntersectionState {
    pub const INITIAL_PHASE: Phase = Phase::EwGreen;

    pub fn new(now_us: u64) -> Self {
        let mut state = Self {
            lights: [LightState::Red; 4],
            queues: [0; 4],
            last_switch_us: now_us,
        };
        state.apply_phase(Self::INITIAL_PHASE, now_us);
        state
    }

    pub fn light(&self, approach: Approach) -> LightState {
        self.lights[approach.index()]
    }

    pub fn queue(&self, approach: Approach) -> u32 {
        self.queues[approach.index()]
    }

    pub fn queue_mut(&mut self, approach: Approach) -> &mut u32 {
        &mut self.queues[approach.index()]
    }

    pub fn set_queue(&mut self, approach: Approach, len: u32) {
        self.queues[approach.index()] = len;
    }

    pub fn is_green(&self, approach: Approach) -> bool {
        self.light(approach) == LightState::Green
    }

    pub fn phase(&self) -> Phase {
        if self.is_green(Approach::N) {
            Phase::NsGreen
        } else {
            Phase::EwGreen
        }
    }

    pub fn apply_phase(&mut self, phase: Phase, now_us: u64) {
        for approach in Approach::ALL {
            self.lights[approach.index()] = phase.light_for(approach);
        }
        self.last_switch_us = now_us;
    }

    pub fn load(&self, axis: Axis) -> u64 {
        Approach::ALL
            .iter()
            .filter(|a| a.axis() == axis)
            .map(|a| u64::from(self.queue(*a)))
            .sum()
    }

    pub fn total_waiting(&self) -> u64 {
        self.queues.iter().map(|&q| u64::from(q)).sum()
    }

    pub fn elapsed_since_switch(&self, now_us: u64) -> u64 {
        now_us.saturating_sub(self.last_switch_us)
    }
}

/// Cumulative counters for one run. Both only ever grow until reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Sum over all ticks of the vehicles standing in queue at that tick.
    pub total_wait_accumulated: u64,
    pub total_vehicles_discharged: u64,
}

impl RunStatistics {
    /// Biased by the `+1`, which keeps the first ticks away from a zero divisor.
    pub fn average_wait(&self) -> f64 {
        self.total_wait_accumulated as f64 / (self.total_vehicles_discharged + 1) as f64
    }
}
