//! Integration tests for the TriggerService → FSM → servo pipeline.
//!
//! These run on the host (x86_64) and drive the full control cycle with
//! scripted brightness samples, asserting on the servo command history
//! and the emitted event stream.

use super::mock_hw::{LogSink, MockHardware};

use dronedrop::app::events::AppEvent;
use dronedrop::app::service::TriggerService;
use dronedrop::config::TriggerConfig;
use dronedrop::fsm::StateId;

/// Poll cadence used throughout: default config, 10 ms per tick.
const POLL_US: u64 = 10_000;

fn make_service() -> (TriggerService, MockHardware, LogSink) {
    let mut service = TriggerService::new(TriggerConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    service.start(&mut hw, &mut sink);
    (service, hw, sink)
}

/// Advance `n` poll ticks at the 10 ms cadence, continuing from wherever
/// the service's tick counter currently is.
fn run_ticks(service: &mut TriggerService, hw: &mut MockHardware, sink: &mut LogSink, n: u64) {
    for _ in 0..n {
        let tick = service.tick_count() + 1;
        service.tick(tick * POLL_US, hw, sink);
    }
}

// ── Boot behaviour ────────────────────────────────────────────

#[test]
fn boot_latches_servo_to_minimum() {
    let (service, hw, sink) = make_service();

    assert_eq!(service.state(), StateId::Waiting);
    assert_eq!(hw.positions, vec![1_000], "boot must command the latched position");
    assert!(matches!(sink.events.as_slice(), [AppEvent::Started(StateId::Waiting)]));
}

#[test]
fn darkness_keeps_everything_quiet() {
    let (mut service, mut hw, mut sink) = make_service();
    hw.set_brightness(0);

    run_ticks(&mut service, &mut hw, &mut sink, 50);

    assert_eq!(service.state(), StateId::Waiting);
    assert_eq!(hw.positions, vec![1_000]);
    assert_eq!(sink.release_count(), 0);
}

// ── Steady landing light → release after the hold-off ─────────

#[test]
fn steady_light_releases_after_holdoff() {
    let (mut service, mut hw, mut sink) = make_service();
    hw.set_brightness(4_095);

    // Bright from the first poll: armed at t=10 ms, so the 150 ms window
    // runs out at t=160 ms (tick 16).
    run_ticks(&mut service, &mut hw, &mut sink, 15);
    assert_eq!(service.state(), StateId::Armed, "one tick short of the window");
    assert_eq!(hw.positions, vec![1_000], "no servo motion before the window expires");

    run_ticks(&mut service, &mut hw, &mut sink, 1);
    assert_eq!(service.state(), StateId::Released);
    assert_eq!(hw.positions, vec![1_000, 2_000]);
    assert_eq!(sink.release_count(), 1);
    assert!(
        sink.events
            .iter()
            .any(|e| matches!(e, AppEvent::Released { armed_for_ms: 150 })),
        "release event must carry the full hold-off duration"
    );

    // Run out the rest of the 200 ms window: the arm stays open.
    run_ticks(&mut service, &mut hw, &mut sink, 4);
    assert_eq!(service.state(), StateId::Released);
    assert_eq!(hw.positions, vec![1_000, 2_000]);
}

#[test]
fn release_event_follows_state_change() {
    let (mut service, mut hw, mut sink) = make_service();
    hw.set_brightness(4_095);
    run_ticks(&mut service, &mut hw, &mut sink, 16);

    let pos = sink
        .events
        .iter()
        .position(|e| {
            matches!(
                e,
                AppEvent::StateChanged {
                    from: StateId::Armed,
                    to: StateId::Released,
                }
            )
        })
        .expect("state change to Released must be announced");
    assert!(
        matches!(sink.events.get(pos + 1), Some(AppEvent::Released { .. })),
        "Released must directly follow the Armed -> Released announcement"
    );
}

// ── Dip handling: the hold-off restarts from scratch ──────────

#[test]
fn dip_restarts_holdoff_from_scratch() {
    let (mut service, mut hw, mut sink) = make_service();
    // 100 ms bright, 50 ms dark, then bright until release.
    let mut script = vec![4_095u16; 10];
    script.extend([0u16; 5]);
    script.push(4_095);
    hw.push_brightness(&script);

    run_ticks(&mut service, &mut hw, &mut sink, 10);
    assert_eq!(service.state(), StateId::Armed);

    run_ticks(&mut service, &mut hw, &mut sink, 1);
    assert_eq!(service.state(), StateId::Waiting, "a single dark sample disarms");

    run_ticks(&mut service, &mut hw, &mut sink, 4);
    assert_eq!(service.state(), StateId::Waiting);

    // Light returns at t=160 ms; the earlier 100 ms of bright time must
    // not count towards the fresh window.
    run_ticks(&mut service, &mut hw, &mut sink, 1);
    assert_eq!(service.state(), StateId::Armed);

    run_ticks(&mut service, &mut hw, &mut sink, 14);
    assert_eq!(service.state(), StateId::Armed, "t=300 ms: window not yet elapsed");
    assert_eq!(hw.positions, vec![1_000]);

    run_ticks(&mut service, &mut hw, &mut sink, 1);
    assert_eq!(service.state(), StateId::Released, "t=310 ms: fresh window complete");
    assert_eq!(hw.positions, vec![1_000, 2_000]);
    assert_eq!(sink.release_count(), 1);
    assert!(
        sink.events
            .iter()
            .any(|e| matches!(e, AppEvent::Released { armed_for_ms: 150 })),
        "only the final uninterrupted window counts"
    );
}

#[test]
fn flash_shorter_than_holdoff_never_releases() {
    let (mut service, mut hw, mut sink) = make_service();
    // 100 ms flash, darkness afterwards.
    let mut script = vec![4_095u16; 10];
    script.push(0);
    hw.push_brightness(&script);

    run_ticks(&mut service, &mut hw, &mut sink, 50);

    assert_eq!(service.state(), StateId::Waiting);
    assert_eq!(hw.positions, vec![1_000]);
    assert_eq!(sink.release_count(), 0);
}

// ── The release is one-way and commanded exactly once ─────────

#[test]
fn release_is_commanded_exactly_once() {
    let (mut service, mut hw, mut sink) = make_service();
    hw.set_brightness(4_095);
    run_ticks(&mut service, &mut hw, &mut sink, 16);
    assert_eq!(service.state(), StateId::Released);

    // Post-release chatter: wild brightness swings for a full second.
    let chatter: Vec<u16> = (0..100).map(|i| if i % 2 == 0 { 0 } else { 4_095 }).collect();
    hw.push_brightness(&chatter);
    run_ticks(&mut service, &mut hw, &mut sink, 100);

    assert_eq!(service.state(), StateId::Released);
    assert_eq!(
        hw.positions,
        vec![1_000, 2_000],
        "servo history must be exactly [latch, release]"
    );
    assert_eq!(sink.release_count(), 1);
}

#[test]
fn sampling_stops_after_release() {
    let (mut service, mut hw, mut sink) = make_service();
    hw.set_brightness(4_095);
    run_ticks(&mut service, &mut hw, &mut sink, 16);
    assert_eq!(service.state(), StateId::Released);

    let reads_at_release = hw.sensor_reads;
    run_ticks(&mut service, &mut hw, &mut sink, 100);
    assert_eq!(
        hw.sensor_reads, reads_at_release,
        "the sensor burst is skipped once the payload is gone"
    );
}

// ── Threshold edge ────────────────────────────────────────────

#[test]
fn threshold_is_inclusive() {
    let (mut service, mut hw, mut sink) = make_service();
    hw.set_brightness(3_400);
    run_ticks(&mut service, &mut hw, &mut sink, 1);
    assert_eq!(service.state(), StateId::Armed, "threshold itself arms");

    // Held exactly at threshold, the hold-off runs to completion too.
    run_ticks(&mut service, &mut hw, &mut sink, 15);
    assert_eq!(service.state(), StateId::Released);
    assert_eq!(hw.positions, vec![1_000, 2_000]);

    let (mut service, mut hw, mut sink) = make_service();
    hw.set_brightness(3_399);
    run_ticks(&mut service, &mut hw, &mut sink, 1);
    assert_eq!(service.state(), StateId::Waiting, "one count below does not");
}

// ── Telemetry keeps flowing after release ─────────────────────

#[test]
fn telemetry_reports_release_state() {
    let (mut service, mut hw, mut sink) = make_service();
    hw.set_brightness(4_095);
    // Release at tick 16, then run through the tick-100 telemetry slot.
    run_ticks(&mut service, &mut hw, &mut sink, 100);

    let last_telemetry = sink
        .events
        .iter()
        .rev()
        .find_map(|e| match e {
            AppEvent::Telemetry(t) => Some(t),
            _ => None,
        })
        .expect("telemetry must still be emitted after release");

    assert_eq!(last_telemetry.state, StateId::Released);
    assert!(last_telemetry.released);
    assert_eq!(last_telemetry.servo_pulse_us, 2_000);
    assert_eq!(last_telemetry.tick, 100);
}
