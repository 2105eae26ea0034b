//! Release servo driver (standard hobby PWM servo).
//!
//! Positions the payload release arm via LEDC PWM (ch0): a 50 Hz frame
//! with a 1000-2000 µs high pulse, 1000 µs = latched, 2000 µs = open.
//!
//! ## Safety contract
//!
//! The drop decision lives in the state machine; this driver is a dumb
//! actuator.  It clamps every request into the configured pulse band so
//! no caller can slam the arm past its mechanical stops.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real PWM via hw_init helpers.
//! On host/test: tracks the commanded pulse in-memory only.

use crate::drivers::hw_init;
use crate::pins;

pub struct ServoDriver {
    min_us: u16,
    max_us: u16,
    pulse_us: u16,
}

impl ServoDriver {
    /// Build a driver with the given pulse band.  No signal is emitted
    /// until the first `set_position_us()` call.
    pub fn new(min_us: u16, max_us: u16) -> Self {
        let (min_us, max_us) = if min_us <= max_us {
            (min_us, max_us)
        } else {
            log::warn!("servo pulse band inverted ({min_us} > {max_us}); swapping");
            (max_us, min_us)
        };
        Self {
            min_us,
            max_us,
            pulse_us: min_us,
        }
    }

    /// Command a pulse width, clamped into the configured band.
    pub fn set_position_us(&mut self, pulse_us: u16) {
        let pulse_us = pulse_us.clamp(self.min_us, self.max_us);
        hw_init::ledc_set(hw_init::LEDC_CH_SERVO, pulse_to_duty(pulse_us));
        self.pulse_us = pulse_us;
    }

    /// The last commanded (post-clamp) pulse width.
    pub fn current_pulse_us(&self) -> u16 {
        self.pulse_us
    }
}

/// Convert a pulse width to an LEDC duty value: fraction of the 20 ms
/// frame spent high, scaled to the 14-bit timer range.
fn pulse_to_duty(pulse_us: u16) -> u32 {
    let duty_steps: u32 = 1 << pins::SERVO_PWM_RESOLUTION_BITS;
    u32::from(pulse_us) * duty_steps / pins::SERVO_PERIOD_US
}
