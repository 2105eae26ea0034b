//! Outbound application events.
//!
//! The [`TriggerService`](super::service::TriggerService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them — log to serial today, feed
//! a downlink tomorrow.

use crate::fsm::StateId;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),

    /// The FSM transitioned between states.
    StateChanged { from: StateId, to: StateId },

    /// The payload was released.  Emitted exactly once per boot.
    Released { armed_for_ms: u64 },

    /// The application service has started (carries initial state).
    Started(StateId),
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone)]
pub struct TelemetryData {
    pub state: StateId,
    /// Latest averaged brightness sample (0–4095).
    pub brightness: u16,
    /// Currently commanded servo pulse width.
    pub servo_pulse_us: u16,
    pub released: bool,
    /// Poll-loop iterations since boot.
    pub tick: u64,
}
