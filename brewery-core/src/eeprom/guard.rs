//! Boot-time integrity check
//!
//! The signature is written strictly after every other default. If power
//! is lost part way through the default writer, the signature stays
//! invalid and the next boot repeats the full default write.

use brewery_hal::NvStore;

use super::layout::MAGIC_NUMBER;
use super::settings::Settings;
use super::types::ConfigSnapshot;
use crate::logging::{log_debug, log_info, log_warn};

/// Outcome of the boot-time integrity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootState {
    /// Signature matched, stored values trusted as-is
    Valid,
    /// Signature missing, factory defaults were written
    Defaulted,
}

impl<S: NvStore> Settings<S> {
    /// Wrap a store and run the integrity check
    ///
    /// This is the boot entry point: call it once before using any
    /// accessor.
    pub fn open(store: S) -> Result<(Self, BootState), S::Error> {
        let mut settings = Self::new(store);
        let state = settings.verify_state()?;
        Ok((settings, state))
    }

    /// Check the signature and restore factory defaults if it is wrong
    ///
    /// Idempotent. A mismatch is repaired silently; only storage faults
    /// are returned as errors.
    pub fn verify_state(&mut self) -> Result<BootState, S::Error> {
        let magic = self.magic()?;
        if magic == MAGIC_NUMBER {
            log_info!("EEPROM signature valid");
            return Ok(BootState::Valid);
        }

        log_warn!("EEPROM signature {=u16:#x} invalid, writing defaults", magic);
        self.write_defaults()?;
        Ok(BootState::Defaulted)
    }

    /// Write the factory defaults, signature last
    pub fn write_defaults(&mut self) -> Result<(), S::Error> {
        self.write_defaults_with(&ConfigSnapshot::FACTORY)
    }

    /// Write `defaults` to every field, then the signature
    pub fn write_defaults_with(&mut self, defaults: &ConfigSnapshot) -> Result<(), S::Error> {
        self.set_intensity(defaults.intensity)?;
        self.set_displays(defaults.displays)?;
        self.set_blue_cal(defaults.blue_cal)?;
        self.set_red_cal(defaults.red_cal)?;
        self.set_blue_cal_date(defaults.blue_cal_date)?;
        self.set_red_cal_date(defaults.red_cal_date)?;
        log_debug!("Defaults written: {}", defaults);

        // must stay the final write
        self.write_magic()
    }
}
