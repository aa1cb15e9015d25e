use crate::common::{no_arrivals, state_with, TestHarness, TICK_US};
use signalbox_core::*;

const THRESHOLD_US: u64 = SMART_EVALUATION_SECS * TICK_US;

#[test]
fn test_switches_to_the_loaded_axis_at_threshold() {
    let state = state_with(Phase::NsGreen, [0, 0, 10, 10], 0);
    let stats = RunStatistics::default();

    let (next, next_stats) = step(&state, &stats, ControlMode::SmartControl, 15, THRESHOLD_US, &mut no_arrivals());

    assert_eq!(next.phase(), Phase::EwGreen);
    assert_eq!(next.light(Approach::E), LightState::Green);
    assert_eq!(next.light(Approach::W), LightState::Green);
    assert_eq!(next.light(Approach::N), LightState::Red);
    assert_eq!(next.light(Approach::S), LightState::Red);
    assert_eq!(next.last_switch_us, THRESHOLD_US);
    assert_eq!(next_stats.total_wait_accumulated, 20);
    assert_eq!(next_stats.total_vehicles_discharged, 0, "Red approaches never discharge");
}

#[test]
fn test_waits_for_the_evaluation_interval() {
    let state = state_with(Phase::NsGreen, [0, 0, 10, 10], 0);
    let (next, _) = step(
        &state,
        &RunStatistics::default(),
        ControlMode::SmartControl,
        15,
        THRESHOLD_US - TICK_US,
        &mut no_arrivals(),
    );
    assert_eq!(next.phase(), Phase::NsGreen);
    assert_eq!(next.last_switch_us, 0);
}

#[test]
fn test_ignores_fixed_duration() {
    let state = state_with(Phase::NsGreen, [0, 0, 10, 10], 0);
    let (next, _) = step(
        &state,
        &RunStatistics::default(),
        ControlMode::SmartControl,
        5,
        5 * TICK_US,
        &mut no_arrivals(),
    );
    assert_eq!(next.phase(), Phase::NsGreen);
}

#[test]
fn test_tie_holds_and_keeps_stale_timer() {
    // After discharge N/S drop to 2+2, matching E/W at 3+1.
    let state = state_with(Phase::NsGreen, [4, 4, 3, 1], 0);
    let (held, _) = step(
        &state,
        &RunStatistics::default(),
        ControlMode::SmartControl,
        15,
        THRESHOLD_US,
        &mut no_arrivals(),
    );
    assert_eq!(held.phase(), Phase::NsGreen);
    assert_eq!(held.last_switch_us, 0, "A hold must not restart the timer");
    assert_eq!(held.load(Axis::Vertical), held.load(Axis::Horizontal));

    // The next tick re-evaluates immediately rather than waiting another interval.
    let (next, _) = step(
        &held,
        &RunStatistics::default(),
        ControlMode::SmartControl,
        15,
        THRESHOLD_US + TICK_US,
        &mut no_arrivals(),
    );
    assert_eq!(next.phase(), Phase::EwGreen);
    assert_eq!(next.last_switch_us, THRESHOLD_US + TICK_US);
}

#[test]
fn test_holds_while_green_axis_is_busier() {
    let mut h = TestHarness::quiet(ControlMode::SmartControl, 15);
    h.set_queues([0, 0, 40, 40]);
    h.start();

    h.run_ticks(15);
    assert_eq!(h.phase(), Phase::EwGreen);
    assert_eq!(h.sim.state.last_switch_us, 0);
    assert_eq!(h.queues(), [0, 0, 10, 10]);
}

#[test]
fn test_sustained_demand_moves_green_to_the_queue() {
    let mut h = TestHarness::flooded(ControlMode::SmartControl, 15);
    h.start();

    // EW drains its single arrival each tick while NS accumulates.
    h.run_ticks(9);
    assert_eq!(h.phase(), Phase::EwGreen);
    assert_eq!(h.queues(), [9, 9, 0, 0]);

    h.run_ticks(1);
    assert_eq!(h.phase(), Phase::NsGreen);
    assert_eq!(h.sim.state.last_switch_us, THRESHOLD_US);
}
