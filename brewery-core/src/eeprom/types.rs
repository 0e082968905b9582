//! Persisted value types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest intensity the LED displays accept
///
/// Not enforced by the settings layer.
pub const MAX_INTENSITY: u8 = 15;

/// Bitmask of active temperature displays
///
/// Unknown bits are preserved so a raw byte always round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Displays(u8);

impl Displays {
    /// No display active
    pub const NONE: Self = Self(0);
    /// Red probe display
    pub const RED: Self = Self(0x1);
    /// Blue probe display
    pub const BLUE: Self = Self(0x2);
    /// Both displays
    pub const ALL: Self = Self(0x3);

    /// Wrap a raw bitmask, keeping every bit
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw bitmask
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if every bit of `other` is set
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set or clear the bits of `other`
    pub fn set(&mut self, other: Self, enabled: bool) {
        if enabled {
            self.0 |= other.0;
        } else {
            self.0 &= !other.0;
        }
    }
}

impl core::ops::BitOr for Displays {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl From<u8> for Displays {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<Displays> for u8 {
    fn from(displays: Displays) -> Self {
        displays.0
    }
}

/// Every persisted setting except the signature
///
/// Materialised on demand; the store is always the source of truth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConfigSnapshot {
    /// Display intensity (0-15 nominal)
    pub intensity: u8,
    /// Active displays
    pub displays: Displays,
    /// Red probe offset in °C, added to raw readings
    pub red_cal: f32,
    /// Red calibration date (opaque timestamp or counter)
    pub red_cal_date: u32,
    /// Blue probe offset in °C, added to raw readings
    pub blue_cal: f32,
    /// Blue calibration date (opaque timestamp or counter)
    pub blue_cal_date: u32,
}

impl ConfigSnapshot {
    /// Factory defaults written when the signature is missing
    pub const FACTORY: Self = Self {
        intensity: 12,
        displays: Displays::ALL,
        red_cal: 0.0,
        red_cal_date: 0,
        blue_cal: 0.0,
        blue_cal_date: 0,
    };
}

impl Default for ConfigSnapshot {
    fn default() -> Self {
        Self::FACTORY
    }
}
