#![allow(dead_code)]

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use signalbox_core::*;

pub const TICK_US: u64 = US_PER_SEC;

/// Random source under which no vehicle ever arrives.
pub fn no_arrivals() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

/// Random source under which every approach gains a vehicle on every tick.
pub fn constant_arrivals() -> StepRng {
    StepRng::new(0, 0)
}

pub struct TestHarness<R: RngCore> {
    pub sim: Simulation<R>,
    pub now_us: u64,
}

impl TestHarness<StepRng> {
    pub fn quiet(mode: ControlMode, fixed_duration_secs: u64) -> Self {
        Self::with_rng(mode, fixed_duration_secs, no_arrivals())
    }

    pub fn flooded(mode: ControlMode, fixed_duration_secs: u64) -> Self {
        Self::with_rng(mode, fixed_duration_secs, constant_arrivals())
    }
}

impl TestHarness<StdRng> {
    pub fn new_with_seed(seed: u64, mode: ControlMode) -> Self {
        Self::with_rng(mode, 15, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> TestHarness<R> {
    pub fn with_rng(mode: ControlMode, fixed_duration_secs: u64, rng: R) -> Self {
        let config = SimConfig {
            mode,
            fixed_duration_secs,
            ..SimConfig::default()
        };
        Self {
            sim: Simulation::with_rng(config, 0, rng).expect("valid test config"),
            now_us: 0,
        }
    }

    pub fn start(&mut self) {
        self.sim.start(self.now_us);
    }

    /// Advances the clock one second per tick, the pace the dashboard keeps.
    pub fn run_ticks(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.now_us += TICK_US;
            self.sim.tick(self.now_us);
        }
    }

    pub fn set_queues(&mut self, queues: [u32; 4]) {
        for (approach, len) in Approach::ALL.into_iter().zip(queues) {
            self.sim.state.set_queue(approach, len);
        }
    }

    pub fn queues(&self) -> [u32; 4] {
        Approach::ALL.map(|a| self.sim.state.queue(a))
    }

    pub fn phase(&self) -> Phase {
        self.sim.state.phase()
    }
}

pub fn state_with(phase: Phase, queues: [u32; 4], last_switch_us: u64) -> IntersectionState {
    let mut state = IntersectionState::new(0);
    state.apply_phase(phase, last_switch_us);
    for (approach, len) in Approach::ALL.into_iter().zip(queues) {
        state.set_queue(approach, len);
    }
    state
}

pub fn assert_paired_lights(state: &IntersectionState) {
    assert_eq!(state.light(Approach::N), state.light(Approach::S), "N/S must share a light");
    assert_eq!(state.light(Approach::E), state.light(Approach::W), "E/W must share a light");
    assert_ne!(
        state.light(Approach::N),
        state.light(Approach::E),
        "NS and EW must show opposite colours"
    );
    for approach in Approach::ALL {
        assert_ne!(state.light(approach), LightState::Yellow);
    }
}
