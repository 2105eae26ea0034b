//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ TriggerService (domain)
//! ```
//!
//! Driven adapters (sensor, actuator, event sink) implement these traits.
//! The [`TriggerService`](super::service::TriggerService) consumes them via
//! generics, so the domain core never touches ADC or PWM code directly.

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain the brightness sample.
pub trait SensorPort {
    /// One averaged brightness reading on the 12-bit ADC scale (0–4095).
    fn read_brightness(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the release servo.
pub trait ActuatorPort {
    /// Command the servo pulse width in microseconds.  Implementations
    /// clamp into their mechanical band; the service only calls this when
    /// the commanded position actually changes.
    fn set_position_us(&mut self, pulse_us: u16);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log today;
/// a radio downlink would slot in here without touching the core).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
