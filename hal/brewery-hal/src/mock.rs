//! Mock EEPROM implementation for testing
//!
//! Provides an in-memory store for host tests and simulation. Supports:
//! - Erased-state initialisation (all bytes `0xFF`)
//! - Loading arbitrary images
//! - Write counting
//! - Power-loss simulation between two write cycles

use crate::eeprom::NvStore;

/// ATmega328p EEPROM size
pub const ATMEGA328P_EEPROM_SIZE: usize = 1024;

/// Errors reported by [`MockEeprom`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MockError {
    /// Access extends past the end of the store
    OutOfRange,
    /// Power was cut before this write cycle started
    PowerLoss,
}

/// In-memory EEPROM of `N` bytes
///
/// Each successful `write` call counts as one write cycle. A cycle either
/// completes fully or, under simulated power loss, never starts.
#[derive(Debug, Clone)]
pub struct MockEeprom<const N: usize = ATMEGA328P_EEPROM_SIZE> {
    data: [u8; N],
    writes: usize,
    /// Remaining write cycles before power is lost
    write_budget: Option<usize>,
}

impl<const N: usize> MockEeprom<N> {
    /// Create a store in the erased state
    pub const fn new() -> Self {
        Self::with_contents([0xFF; N])
    }

    /// Create a store holding `data`
    pub const fn with_contents(data: [u8; N]) -> Self {
        Self {
            data,
            writes: 0,
            write_budget: None,
        }
    }

    /// Current store contents (for test verification)
    pub fn contents(&self) -> &[u8; N] {
        &self.data
    }

    /// Overwrite bytes directly, bypassing write accounting
    ///
    /// Panics if the range extends past the end of the store.
    pub fn inject(&mut self, offset: usize, bytes: &[u8]) {
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    /// Number of completed write cycles
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Allow `n` more write cycles, then fail every write with
    /// [`MockError::PowerLoss`] without modifying the store
    pub fn fail_after_writes(&mut self, n: usize) {
        self.write_budget = Some(n);
    }

    /// Remove any pending power-loss simulation
    pub fn restore_power(&mut self) {
        self.write_budget = None;
    }

    fn range(&self, offset: u32, len: usize) -> Result<core::ops::Range<usize>, MockError> {
        let start = offset as usize;
        let end = start.checked_add(len).ok_or(MockError::OutOfRange)?;
        if end > N {
            return Err(MockError::OutOfRange);
        }
        Ok(start..end)
    }
}

impl<const N: usize> Default for MockEeprom<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> NvStore for MockEeprom<N> {
    type Error = MockError;

    fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<(), Self::Error> {
        let range = self.range(offset, buf.len())?;
        buf.copy_from_slice(&self.data[range]);
        Ok(())
    }

    fn write(&mut self, offset: u32, data: &[u8]) -> Result<(), Self::Error> {
        let range = self.range(offset, data.len())?;

        if let Some(remaining) = self.write_budget.as_mut() {
            if *remaining == 0 {
                return Err(MockError::PowerLoss);
            }
            *remaining -= 1;
        }

        self.data[range].copy_from_slice(data);
        self.writes += 1;
        Ok(())
    }

    fn capacity(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_erased() {
        let store = MockEeprom::<16>::new();
        assert!(store.contents().iter().all(|&b| b == 0xFF));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_default_size_matches_atmega328p() {
        let store: MockEeprom = MockEeprom::default();
        assert_eq!(store.capacity(), ATMEGA328P_EEPROM_SIZE);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut store = MockEeprom::<4>::new();

        assert_eq!(store.write_word32(1, 0), Err(MockError::OutOfRange));
        assert_eq!(store.read_word16(3), Err(MockError::OutOfRange));
        assert_eq!(store.read_byte(u32::MAX), Err(MockError::OutOfRange));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_power_loss_blocks_writes() {
        let mut store = MockEeprom::<4>::new();
        store.fail_after_writes(1);

        assert!(store.write_byte(0, 1).is_ok());
        assert_eq!(store.write_byte(1, 2), Err(MockError::PowerLoss));
        assert_eq!(store.contents(), &[1, 0xFF, 0xFF, 0xFF]);

        store.restore_power();
        assert!(store.write_byte(1, 2).is_ok());
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_inject_bypasses_accounting() {
        let mut store = MockEeprom::<4>::new();
        store.inject(2, &[0xAB, 0xCD]);

        assert_eq!(store.read_word16(2).unwrap(), 0xCDAB);
        assert_eq!(store.write_count(), 0);
    }
}
