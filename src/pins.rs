//! GPIO / peripheral pin assignments for the DroneDrop release board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Release servo (MG90S, standard 50 Hz analog-servo timing)
// ---------------------------------------------------------------------------

/// LEDC PWM output driving the release servo signal line.
pub const SERVO_PWM_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Light sensor — Analog (ADC1)
// ---------------------------------------------------------------------------

/// LDR voltage divider — analog input on ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const LDR_ADC_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC base frequency for the servo signal (analog-servo standard).
pub const SERVO_PWM_FREQ_HZ: u32 = 50;
/// Servo PWM period in microseconds (50 Hz → 20 ms).
pub const SERVO_PERIOD_US: u32 = 20_000;
/// LEDC timer resolution (bits).  14-bit gives ~1.2 µs pulse granularity
/// at 50 Hz, comfortably finer than the servo's mechanical deadband.
pub const SERVO_PWM_RESOLUTION_BITS: u32 = 14;
