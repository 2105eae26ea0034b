//! LDR (light-dependent resistor) brightness sensor driver.
//!
//! The LDR sits in a voltage divider feeding an ESP32-S3 ADC channel; more
//! light means a higher 12-bit reading.  Raw samples are noisy, so every
//! poll takes a burst of consecutive readings and reports their truncated
//! integer mean.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1_CH4 via the oneshot API (initialised by hw_init).
//! On host/test: pops scripted samples from a static queue, repeating the
//! last value once the queue runs dry.

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

#[cfg(not(target_os = "espidf"))]
mod sim {
    use core::sync::atomic::{AtomicU16, Ordering};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    static SIM_LDR_ADC: AtomicU16 = AtomicU16::new(0);
    static SIM_LDR_QUEUE: Mutex<VecDeque<u16>> = Mutex::new(VecDeque::new());

    /// Set a steady brightness level; clears any scripted samples.
    pub fn set_level(raw: u16) {
        SIM_LDR_QUEUE.lock().unwrap().clear();
        SIM_LDR_ADC.store(raw, Ordering::Relaxed);
    }

    /// Queue an exact sequence of raw samples to be returned one per read.
    pub fn push_samples(samples: &[u16]) {
        SIM_LDR_QUEUE.lock().unwrap().extend(samples.iter().copied());
    }

    /// Next raw value: scripted sample if one is queued, else the last
    /// value seen (so a finished script holds its final reading).
    pub fn next_raw() -> u16 {
        if let Some(raw) = SIM_LDR_QUEUE.lock().unwrap().pop_front() {
            SIM_LDR_ADC.store(raw, Ordering::Relaxed);
            return raw;
        }
        SIM_LDR_ADC.load(Ordering::Relaxed)
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_ldr_raw(raw: u16) {
    sim::set_level(raw);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_push_ldr_raw(samples: &[u16]) {
    sim::push_samples(samples);
}

/// Averaging LDR driver.  Stateless between polls apart from the pin it
/// documents owning; each `read_averaged()` is a fresh burst.
pub struct LdrSensor {
    sample_count: u16,
    _adc_gpio: i32,
}

impl LdrSensor {
    pub fn new(adc_gpio: i32, sample_count: u16) -> Self {
        Self {
            // A zero-sample burst has no mean; treat it as one sample.
            sample_count: sample_count.max(1),
            _adc_gpio: adc_gpio,
        }
    }

    /// Take `sample_count` consecutive ADC readings and return their
    /// truncated integer mean.
    ///
    /// The accumulator is `u32`: worst case 65_535 samples of 4_095 is
    /// ~2^28, far inside range.
    pub fn read_averaged(&mut self) -> u16 {
        let mut sum: u32 = 0;
        for _ in 0..self.sample_count {
            sum += u32::from(self.read_adc());
        }
        (sum / u32::from(self.sample_count)) as u16
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(hw_init::ADC1_CH_LDR)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        sim::next_raw()
    }
}
