//! System configuration parameters.
//!
//! All tunable parameters for the DroneDrop trigger.  These are build-time
//! constants — there is no provisioning channel or persistent store; a
//! different airframe or LDR means editing `Default` and reflashing.

use serde::{Deserialize, Serialize};

/// Core trigger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerConfig {
    // --- Brightness detection ---
    /// Averaged ADC value (0–4095) at or above which the landing light is
    /// considered present.  Tune per LDR and divider resistor.
    pub bright_threshold: u16,
    /// Raw conversions averaged per brightness sample (flicker smoothing).
    pub sample_count: u16,
    /// Brightness must hold above threshold this long before release (ms).
    pub holdoff_ms: u32,

    // --- Servo travel ---
    /// Pulse width for the fully-closed (latched) position (µs).
    pub servo_min_us: u16,
    /// Pulse width for the fully-open (release) position (µs).
    pub servo_max_us: u16,

    // --- Timing ---
    /// Decision loop poll interval (milliseconds).
    pub poll_interval_ms: u32,
    /// Telemetry log cadence (milliseconds).
    pub telemetry_interval_ms: u32,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            // Brightness detection — tuned for the DJI landing light at ~1 m
            bright_threshold: 3400,
            sample_count: 16,
            holdoff_ms: 150,

            // MG90S travel
            servo_min_us: 1000,
            servo_max_us: 2000,

            // Timing
            poll_interval_ms: 10,      // 100 Hz
            telemetry_interval_ms: 1000,
        }
    }
}
