//! Shared mutable context threaded through every FSM handler.
//!
//! `TriggerContext` is the single struct that state handlers read from and
//! write to: the latest averaged brightness sample, the monotonic timestamp
//! for the current tick, the hold-off start, actuator command outputs, and
//! configuration.  Think of it as the "blackboard" in a blackboard
//! architecture.

use crate::config::TriggerConfig;

// ---------------------------------------------------------------------------
// Actuator commands (written by state handlers; applied by the service)
// ---------------------------------------------------------------------------

/// Commands that state handlers write to request actuator action.
/// The service applies these to the servo driver only when they change,
/// so the hardware sees each position command exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorCommands {
    /// Desired servo pulse width in microseconds.
    pub servo_pulse_us: u16,
    /// One-way release flag.  Never cleared once set.
    pub released: bool,
}

impl ActuatorCommands {
    /// Safe default: payload latched at the minimum (closed) position.
    pub fn latched(servo_min_us: u16) -> Self {
        Self {
            servo_pulse_us: servo_min_us,
            released: false,
        }
    }
}

// ---------------------------------------------------------------------------
// TriggerContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct TriggerContext {
    // -- Timing --
    /// Monotonic timestamp for the current tick (µs).  Stamped by the
    /// service before the FSM runs; hold-off is measured against this,
    /// not against tick counts.
    pub now_us: u64,
    /// Ticks elapsed since the current state was entered.
    pub ticks_in_state: u64,
    /// Monotonic total tick count.
    pub total_ticks: u64,

    // -- Sensor data --
    /// Latest averaged brightness sample (0–4095).  Updated before each tick.
    pub brightness: u16,

    // -- Hold-off --
    /// When brightness first crossed the threshold (µs).  `None` whenever
    /// the last sample was below threshold; consumed on release.
    pub armed_since_us: Option<u64>,
    /// How long the final hold-off ran before release (µs).  Set once by
    /// the release transition, then never touched again.
    pub armed_for_us: Option<u64>,

    // -- Actuator outputs --
    /// Commands to be applied to the servo after the FSM tick.
    pub commands: ActuatorCommands,

    // -- Configuration --
    /// Build-time tunables.
    pub config: TriggerConfig,
}

impl TriggerContext {
    /// Create a new context with the given configuration.
    pub fn new(config: TriggerConfig) -> Self {
        Self {
            now_us: 0,
            ticks_in_state: 0,
            total_ticks: 0,
            brightness: 0,
            armed_since_us: None,
            armed_for_us: None,
            commands: ActuatorCommands::latched(config.servo_min_us),
            config,
        }
    }

    /// Whether the latest sample is at or above the brightness threshold.
    pub fn is_bright(&self) -> bool {
        self.brightness >= self.config.bright_threshold
    }

    /// Microseconds since the hold-off started, if it is running.
    pub fn armed_elapsed_us(&self) -> Option<u64> {
        self.armed_since_us
            .map(|since| self.now_us.saturating_sub(since))
    }
}
