//! Persistent settings
//!
//! Typed configuration values stored at fixed offsets in the EEPROM.
//! The layout is shared with devices already in the field.
//!
//! Call [`Settings::open`] once at boot. It validates the signature and
//! restores factory defaults if the store was never initialised.

pub mod guard;
pub mod layout;
pub mod settings;
pub mod types;

pub use guard::BootState;
pub use layout::{Field, Width, LAYOUT_SIZE, MAGIC_NUMBER};
pub use settings::Settings;
pub use types::*;
