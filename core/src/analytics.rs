use crate::config::DEFAULT_HISTORY_LEN;
use crate::state::{Approach, IntersectionState, LightState, RunStatistics};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Everything the dashboard reads after a tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub queues: [(Approach, u32); 4],
    pub lights: [(Approach, LightState); 4],
    pub total_waiting: u64,
    pub total_discharged: u64,
    pub average_wait: f64,
}

impl Kpis {
    pub fn from_state(state: &IntersectionState, stats: &RunStatistics) -> Self {
        Self {
            queues: Approach::ALL.map(|a| (a, state.queue(a))),
            lights: Approach::ALL.map(|a| (a, state.light(a))),
            total_waiting: state.total_waiting(),
            total_discharged: stats.total_vehicles_discharged,
            average_wait: stats.average_wait(),
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct MetricPoint {
    pub tick: u64,
    pub waiting: f32,
    pub discharged: f32,
    pub average_wait: f32,
}

pub struct MetricsCollector {
    pub history: VecDeque<MetricPoint>,
    pub max_points: usize,
}

impl MetricsCollector {
    pub fn new(max_points: usize) -> Self {
        Self {
            // Grows on demand past the default; `max_points` only bounds trimming.
            history: VecDeque::with_capacity(max_points.min(DEFAULT_HISTORY_LEN)),
            max_points,
        }
    }

    pub fn update(&mut self, tick: u64, state: &IntersectionState, stats: &RunStatistics) {
        self.history.push_back(MetricPoint {
            tick,
            waiting: state.total_waiting() as f32,
            discharged: stats.total_vehicles_discharged as f32,
            average_wait: stats.average_wait() as f32,
        });

        while self.history.len() > self.max_points {
            self.history.pop_front();
        }
    }

    pub fn latest(&self) -> Option<&MetricPoint> {
        self.history.back()
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}
