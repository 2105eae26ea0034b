//! DroneDrop Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single-threaded poll loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter       LogEventSink      Esp32Time       │
//! │  (Sensor+Actuator)     (EventSink)       (uptime µs)     │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ─────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │           TriggerService (pure logic)          │      │
//! │  │  Waiting ─▶ Armed ─▶ Released (one-way latch)  │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod pins;

pub mod app;
mod adapters;
mod drivers;
pub mod fsm;
mod sensors;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use adapters::time::Esp32TimeAdapter;
use app::service::TriggerService;
use config::TriggerConfig;
use drivers::servo::ServoDriver;
use sensors::light::LdrSensor;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  DroneDrop v{}                    ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.  The payload
        // stays mechanically latched; the watchdog reset gets another try.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = drivers::watchdog::Watchdog::new();

    // ── 3. Configuration (build-time; no runtime tuning) ──────
    let config = TriggerConfig::default();
    info!("config: {}", serde_json::to_string(&config)?);

    let time_adapter = Esp32TimeAdapter::new();

    // ── 4. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(
        LdrSensor::new(pins::LDR_ADC_GPIO, config.sample_count),
        ServoDriver::new(config.servo_min_us, config.servo_max_us),
    );
    let mut log_sink = LogEventSink::new();

    // ── 5. Construct app service ──────────────────────────────
    let mut service = TriggerService::new(config.clone());
    service.start(&mut hw, &mut log_sink);

    info!("System ready. Entering poll loop.");

    // ── 6. Poll loop ──────────────────────────────────────────
    loop {
        let now_us = time_adapter.uptime_us();
        service.tick(now_us, &mut hw, &mut log_sink);

        // Feed watchdog on every iteration.
        watchdog.feed();

        #[cfg(target_os = "espidf")]
        esp_idf_hal::delay::FreeRtos::delay_ms(config.poll_interval_ms);

        // Simulate the tick cadence via sleep on non-espidf targets.
        #[cfg(not(target_os = "espidf"))]
        std::thread::sleep(std::time::Duration::from_millis(u64::from(
            config.poll_interval_ms,
        )));
    }
}
