//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to              |
//! |----------------|--------------------|--------------------------|
//! | `hardware`     | SensorPort         | ESP32 ADC (LDR divider)  |
//! |                | ActuatorPort       | ESP32 LEDC PWM (servo)   |
//! | `log_sink`     | EventSink          | Serial log output        |
//! | `time`         | —                  | ESP32 system timer       |

pub mod hardware;
pub mod log_sink;
pub mod time;
