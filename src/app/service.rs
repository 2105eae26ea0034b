//! Application service — the hexagonal core.
//!
//! [`TriggerService`] owns the FSM and its shared context.  It exposes a
//! clean, hardware-agnostic API.  All I/O flows through port traits
//! injected at call sites, making the entire service testable with mock
//! adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │     TriggerService      │
//! ActuatorPort ◀──│   FSM · hold-off · latch│
//!                 └────────────────────────┘
//! ```

use log::info;

use crate::config::TriggerConfig;
use crate::fsm::context::TriggerContext;
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};

use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// TriggerService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct TriggerService {
    fsm: Fsm,
    ctx: TriggerContext,
    /// Last pulse width actually written through the actuator port.
    last_applied_us: Option<u16>,
    /// Telemetry cadence in ticks (0 = disabled).
    telemetry_every: u64,
    tick_count: u64,
}

impl TriggerService {
    /// Construct the service from configuration.
    ///
    /// Does **not** start the FSM — call [`Self::start`] next.
    pub fn new(config: TriggerConfig) -> Self {
        let poll_ms = u64::from(config.poll_interval_ms.max(1));
        let telemetry_every = u64::from(config.telemetry_interval_ms) / poll_ms;
        let ctx = TriggerContext::new(config);
        let fsm = Fsm::new(build_state_table(), StateId::Waiting);

        Self {
            fsm,
            ctx,
            last_applied_us: None,
            telemetry_every,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Start the FSM in Waiting and drive the servo to its latched
    /// position.  Call once before the poll loop.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);
        self.apply_commands(hw);
        sink.emit(&AppEvent::Started(self.fsm.current_state()));
        info!("TriggerService started in {:?}", self.fsm.current_state());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle: sample → FSM → actuator → events.
    ///
    /// `now_us` is the monotonic timestamp for this tick; the hold-off is
    /// measured against it, never against tick counts, so jitter in the
    /// poll loop cannot stretch the debounce window.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        now_us: u64,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // After release there is nothing left to decide; skip the sensor
        // burst entirely and keep only telemetry alive.
        if !self.ctx.commands.released {
            let prev_state = self.fsm.current_state();

            self.ctx.brightness = hw.read_brightness();
            self.ctx.now_us = now_us;
            self.fsm.tick(&mut self.ctx);

            self.apply_commands(hw);

            let new_state = self.fsm.current_state();
            if new_state != prev_state {
                sink.emit(&AppEvent::StateChanged {
                    from: prev_state,
                    to: new_state,
                });
                if new_state == StateId::Released {
                    let armed_for_ms = self.ctx.armed_for_us.unwrap_or(0) / 1_000;
                    sink.emit(&AppEvent::Released { armed_for_ms });
                }
            }
        }

        if self.telemetry_every > 0 && self.tick_count % self.telemetry_every == 0 {
            sink.emit(&AppEvent::Telemetry(self.build_telemetry()));
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current context.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            state: self.fsm.current_state(),
            brightness: self.ctx.brightness,
            servo_pulse_us: self.ctx.commands.servo_pulse_us,
            released: self.ctx.commands.released,
            tick: self.tick_count,
        }
    }

    /// Current FSM state.
    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// Whether the payload has been released.
    pub fn released(&self) -> bool {
        self.ctx.commands.released
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // ── Internal ──────────────────────────────────────────────

    /// Write the commanded pulse through the actuator port, but only when
    /// it differs from what the hardware already has.  The release command
    /// therefore reaches the servo exactly once.
    fn apply_commands(&mut self, hw: &mut impl ActuatorPort) {
        let pulse = self.ctx.commands.servo_pulse_us;
        if self.last_applied_us != Some(pulse) {
            hw.set_position_us(pulse);
            self.last_applied_us = Some(pulse);
        }
    }
}
