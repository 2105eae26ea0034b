//! DroneDrop firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod fsm;

mod pins;

// Re-export the hardware-facing modules so the crate compiles on host;
// the actual peripheral implementations are guarded by cfg attributes
// inside.
pub mod adapters;
pub mod drivers;
pub mod sensors;
