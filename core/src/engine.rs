use crate::analytics::{Kpis, MetricPoint, MetricsCollector};
use crate::config::{validate_fixed_duration, SimConfig};
use crate::error::ConfigError;
use crate::policies::{create_policy, ControlMode, PolicyParams};
use crate::state::{Approach, Axis, IntersectionState, RunStatistics};
use crate::traits::Decision;
use rand::prelude::*;
use std::collections::VecDeque;

/// Advances the intersection by one tick.
///
/// Arrivals are drawn first, then the standing queue is added to the wait
/// total, then green approaches discharge, and finally the active policy
/// decides whether the lights change. The inputs are left untouched.
pub fn step<R: RngCore>(
    state: &IntersectionState,
    stats: &RunStatistics,
    mode: ControlMode,
    fixed_duration_secs: u64,
    now_us: u64,
    rng: &mut R,
) -> (IntersectionState, RunStatistics) {
    let mut state = state.clone();
    let mut stats = *stats;

    for approach in Approach::ALL {
        if rng.gen_bool(crate::ARRIVAL_PROBABILITY) {
            let queue = state.queue_mut(approach);
            *queue = queue.saturating_add(1);
        }
    }

    stats.total_wait_accumulated = stats
        .total_wait_accumulated
        .saturating_add(state.total_waiting());

    for approach in Approach::ALL {
        if !state.is_green(approach) {
            continue;
        }
        let queue = state.queue_mut(approach);
        let discharged = (*queue).min(crate::DISCHARGE_CAPACITY);
        *queue -= discharged;
        stats.total_vehicles_discharged = stats
            .total_vehicles_discharged
            .saturating_add(u64::from(discharged));
    }

    let policy = create_policy(mode, &PolicyParams { fixed_duration_secs });
    if state.elapsed_since_switch(now_us) >= policy.threshold_us() {
        match policy.decide(&state) {
            Decision::Switch => {
                let next = state.phase().flipped();
                log::debug!(
                    "{}: switching to {:?} (vertical load {}, horizontal load {})",
                    policy.kind(),
                    next,
                    state.load(Axis::Vertical),
                    state.load(Axis::Horizontal),
                );
                state.apply_phase(next, now_us);
            }
            // The timestamp stays stale, so the next tick evaluates again.
            Decision::Hold => {
                log::trace!("{}: holding {:?}", policy.kind(), state.phase());
            }
        }
    }

    (state, stats)
}

/// Owns the intersection between ticks, together with the run flag and the
/// operator's control settings.
pub struct Simulation<R: RngCore = StdRng> {
    pub state: IntersectionState,
    pub stats: RunStatistics,
    pub mode: ControlMode,
    fixed_duration_secs: u64,
    pub running: bool,
    pub ticks: u64,
    pub metrics: MetricsCollector,
    rng: R,
}

impl Simulation<StdRng> {
    pub fn new(config: SimConfig, now_us: u64) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, now_us, rng)
    }
}

impl<R: RngCore> Simulation<R> {
    pub fn with_rng(config: SimConfig, now_us: u64, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: IntersectionState::new(now_us),
            stats: RunStatistics::default(),
            mode: config.mode,
            fixed_duration_secs: config.fixed_duration_secs,
            running: false,
            ticks: 0,
            metrics: MetricsCollector::new(config.history_len),
            rng,
        })
    }

    pub fn fixed_duration_secs(&self) -> u64 {
        self.fixed_duration_secs
    }

    pub fn set_fixed_duration(&mut self, secs: u64) -> Result<(), ConfigError> {
        self.fixed_duration_secs = validate_fixed_duration(secs)?;
        log::info!("Fixed green duration set to {}s", secs);
        Ok(())
    }

    pub fn set_mode(&mut self, mode: ControlMode) {
        if self.mode != mode {
            log::info!("Control mode changed from {} to {}", self.mode, mode);
            self.mode = mode;
        }
    }

    pub fn start(&mut self, now_us: u64) {
        self.running = true;
        self.state.last_switch_us = now_us;
        log::info!("Simulation started in {} mode", self.mode);
    }

    pub fn stop(&mut self) {
        self.running = false;
        log::info!("Simulation stopped after {} ticks", self.ticks);
    }

    /// Stops the run and restores the initial queues, lights and counters.
    pub fn reset(&mut self, now_us: u64) {
        self.running = false;
        self.state = IntersectionState::new(now_us);
        self.stats = RunStatistics::default();
        self.ticks = 0;
        self.metrics.reset();
        log::info!("Simulation reset");
    }

    /// Runs one step if the simulation is running. Returns whether it did.
    pub fn tick(&mut self, now_us: u64) -> bool {
        if !self.running {
            return false;
        }
        let (state, stats) = step(
            &self.state,
            &self.stats,
            self.mode,
            self.fixed_duration_secs,
            now_us,
            &mut self.rng,
        );
        self.state = state;
        self.stats = stats;
        self.ticks += 1;
        self.metrics.update(self.ticks, &self.state, &self.stats);
        log::trace!(
            "tick {}: waiting {}, discharged {}",
            self.ticks,
            self.state.total_waiting(),
            self.stats.total_vehicles_discharged
        );
        true
    }

    pub fn kpis(&self) -> Kpis {
        Kpis::from_state(&self.state, &self.stats)
    }

    pub fn history(&self) -> &VecDeque<MetricPoint> {
        &self.metrics.history
    }
}
