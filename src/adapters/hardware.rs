//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the LDR sensor and the servo driver, exposing them through
//! [`SensorPort`] and [`ActuatorPort`].  This is the only module in the
//! system that touches actual hardware.  On non-espidf targets, the
//! underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::servo::ServoDriver;
use crate::sensors::light::LdrSensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    ldr: LdrSensor,
    servo: ServoDriver,
}

impl HardwareAdapter {
    pub fn new(ldr: LdrSensor, servo: ServoDriver) -> Self {
        Self { ldr, servo }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_brightness(&mut self) -> u16 {
        self.ldr.read_averaged()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_position_us(&mut self, pulse_us: u16) {
        self.servo.set_position_us(pulse_us);
    }
}
