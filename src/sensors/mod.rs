//! Sensor subsystem.
//!
//! A single driver lives here: the LDR brightness sensor watching for the
//! drone's landing light.  The hardware adapter wraps it behind
//! [`crate::app::ports::SensorPort`] so the service never touches ADC code.

pub mod light;
