//! Mock hardware adapter for integration tests.
//!
//! Scripts the brightness samples the service will see and records every
//! servo command so tests can assert on the full command history without
//! touching real ADC/PWM registers.

use std::collections::VecDeque;

use dronedrop::app::events::AppEvent;
use dronedrop::app::ports::{ActuatorPort, EventSink, SensorPort};

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Scripted per-tick brightness samples; the last value repeats once
    /// the script runs out.
    script: VecDeque<u16>,
    current_brightness: u16,
    /// Every pulse width the service wrote through the actuator port,
    /// in order.
    pub positions: Vec<u16>,
    /// How many times the service asked for a brightness sample.
    pub sensor_reads: u32,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            current_brightness: 0,
            positions: Vec::new(),
            sensor_reads: 0,
        }
    }

    /// Set a steady brightness level (clears any pending script).
    pub fn set_brightness(&mut self, raw: u16) {
        self.script.clear();
        self.current_brightness = raw;
    }

    /// Queue per-tick samples; after the script drains, the final sample
    /// holds.
    pub fn push_brightness(&mut self, samples: &[u16]) {
        self.script.extend(samples.iter().copied());
    }

    pub fn last_position(&self) -> Option<u16> {
        self.positions.last().copied()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_brightness(&mut self) -> u16 {
        self.sensor_reads += 1;
        if let Some(next) = self.script.pop_front() {
            self.current_brightness = next;
        }
        self.current_brightness
    }
}

impl ActuatorPort for MockHardware {
    fn set_position_us(&mut self, pulse_us: u16) {
        self.positions.push(pulse_us);
    }
}

// ── Recording event sink ─────────────────────────────────────

pub struct LogSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Number of `Released` events observed.
    pub fn release_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::Released { .. }))
            .count()
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
