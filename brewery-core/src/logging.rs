//! Logging abstraction
//!
//! Forwards to `defmt` when the `defmt` feature is enabled and compiles
//! to nothing otherwise, so host tests need no global logger.

macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($($arg)*);
    }};
}

macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);
    }};
}

macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);
    }};
}

pub(crate) use log_debug;
pub(crate) use log_info;
pub(crate) use log_warn;
