//! Board-agnostic core logic for the brewery RTD controller firmware
//!
//! This crate contains the application logic that does not depend on
//! a specific chip:
//!
//! - Persistent settings layout and typed accessors
//! - Boot-time integrity check with self-healing defaults
//! - Sensor reading records and the calibrated readings report
//!
//! Storage and serial output are reached through the traits in
//! `brewery-hal`.

#![no_std]
#![deny(unsafe_code)]

pub(crate) mod logging;

pub mod eeprom;
pub mod readings;
pub mod report;

pub use eeprom::{BootState, ConfigSnapshot, Displays, Field, Settings, MAGIC_NUMBER};
pub use readings::{ReadingsSource, RtdReadings, RtdResult};
pub use report::{format_report, send_report, Report, ReportError};
