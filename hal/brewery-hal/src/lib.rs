//! Brewery Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits used by the
//! board-agnostic controller logic in `brewery-core`. Chip support is
//! provided by implementing these traits, either directly or through the
//! `embedded-storage` adapter.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  brewery-core (settings, report)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  brewery-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ StorageEeprom │       │  MockEeprom   │
//! │ (embedded-    │       │  (host tests) │
//! │  storage)     │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`eeprom::NvStore`] - Byte-addressable non-volatile storage
//! - [`uart::UartTx`], [`uart::TextSink`] - Outbound serial text

#![no_std]
#![deny(unsafe_code)]

pub mod eeprom;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use eeprom::NvStore;
#[cfg(feature = "embedded-storage")]
pub use eeprom::StorageEeprom;
pub use uart::{TextSink, UartTx};
