//! Non-volatile storage abstractions
//!
//! Provides a byte-addressable persistent store with fixed-width
//! primitives on top of it. Offsets are absolute within the store and
//! multi-byte values are stored little-endian, matching the AVR
//! `eeprom_*_word`/`eeprom_*_dword` layout of deployed devices.
//!
//! A write does not return until the bytes are committed. Implementations
//! must only touch the addressed bytes.

/// Byte-addressable non-volatile store
///
/// Implementors provide raw `read`/`write`; the typed primitives are
/// derived from them and should not normally be overridden.
pub trait NvStore {
    /// Error type for storage operations
    type Error;

    /// Read `buf.len()` bytes starting at `offset`
    fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write `data` starting at `offset`
    ///
    /// Blocks until the write cycle has completed.
    fn write(&mut self, offset: u32, data: &[u8]) -> Result<(), Self::Error>;

    /// Total store size in bytes
    fn capacity(&self) -> usize;

    /// Read a single byte
    fn read_byte(&mut self, offset: u32) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.read(offset, &mut buf)?;
        Ok(buf[0])
    }

    /// Write a single byte
    fn write_byte(&mut self, offset: u32, value: u8) -> Result<(), Self::Error> {
        self.write(offset, &[value])
    }

    /// Read a 16-bit word
    fn read_word16(&mut self, offset: u32) -> Result<u16, Self::Error> {
        let mut buf = [0u8; 2];
        self.read(offset, &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    /// Write a 16-bit word
    fn write_word16(&mut self, offset: u32, value: u16) -> Result<(), Self::Error> {
        self.write(offset, &value.to_le_bytes())
    }

    /// Read a 32-bit word
    fn read_word32(&mut self, offset: u32) -> Result<u32, Self::Error> {
        let mut buf = [0u8; 4];
        self.read(offset, &mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Write a 32-bit word
    fn write_word32(&mut self, offset: u32, value: u32) -> Result<(), Self::Error> {
        self.write(offset, &value.to_le_bytes())
    }

    /// Read an IEEE-754 single precision float
    ///
    /// The stored bit pattern is returned unchanged, NaN payloads included.
    fn read_float32(&mut self, offset: u32) -> Result<f32, Self::Error> {
        self.read_word32(offset).map(f32::from_bits)
    }

    /// Write an IEEE-754 single precision float
    fn write_float32(&mut self, offset: u32, value: f32) -> Result<(), Self::Error> {
        self.write_word32(offset, value.to_bits())
    }
}

impl<T: NvStore + ?Sized> NvStore for &mut T {
    type Error = T::Error;

    fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::read(self, offset, buf)
    }

    fn write(&mut self, offset: u32, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, offset, data)
    }

    fn capacity(&self) -> usize {
        T::capacity(self)
    }
}

/// Adapter exposing a blocking `embedded-storage` device as an [`NvStore`]
///
/// `base` is the absolute device address that maps to store offset 0, so
/// the settings block can live inside a larger EEPROM chip.
#[cfg(feature = "embedded-storage")]
pub struct StorageEeprom<S> {
    storage: S,
    base: u32,
}

#[cfg(feature = "embedded-storage")]
impl<S: embedded_storage::Storage> StorageEeprom<S> {
    /// Wrap a storage device, mapping offset 0 to device address 0
    pub fn new(storage: S) -> Self {
        Self { storage, base: 0 }
    }

    /// Wrap a storage device, mapping offset 0 to device address `base`
    pub fn with_base(storage: S, base: u32) -> Self {
        Self { storage, base }
    }

    /// Release the underlying device
    pub fn into_inner(self) -> S {
        self.storage
    }
}

#[cfg(feature = "embedded-storage")]
impl<S: embedded_storage::Storage> NvStore for StorageEeprom<S> {
    type Error = S::Error;

    fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<(), Self::Error> {
        embedded_storage::ReadStorage::read(&mut self.storage, self.base + offset, buf)
    }

    fn write(&mut self, offset: u32, data: &[u8]) -> Result<(), Self::Error> {
        embedded_storage::Storage::write(&mut self.storage, self.base + offset, data)
    }

    fn capacity(&self) -> usize {
        embedded_storage::ReadStorage::capacity(&self.storage)
            .saturating_sub(self.base as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockEeprom;
    use proptest::prelude::*;

    #[test]
    fn test_word16_is_little_endian() {
        let mut store = MockEeprom::<8>::new();
        store.write_word16(0, 0x55AA).unwrap();

        assert_eq!(&store.contents()[..2], &[0xAA, 0x55]);
        assert_eq!(store.read_word16(0).unwrap(), 0x55AA);
    }

    #[test]
    fn test_word32_is_little_endian() {
        let mut store = MockEeprom::<8>::new();
        store.write_word32(4, 0x1234_5678).unwrap();

        assert_eq!(&store.contents()[4..], &[0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn test_write_touches_only_addressed_bytes() {
        let mut store = MockEeprom::<8>::new();
        store.write_word16(3, 0).unwrap();

        assert_eq!(
            store.contents(),
            &[0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_float32_preserves_nan_payload() {
        let mut store = MockEeprom::<4>::new();
        let nan = f32::from_bits(0x7FC0_1234);
        store.write_float32(0, nan).unwrap();

        assert_eq!(store.read_float32(0).unwrap().to_bits(), 0x7FC0_1234);
    }

    #[test]
    fn test_erased_float_reads_as_nan() {
        let mut store = MockEeprom::<4>::new();
        assert!(store.read_float32(0).unwrap().is_nan());
    }

    fn poke<S: NvStore>(mut store: S) -> usize
    where
        S::Error: core::fmt::Debug,
    {
        store.write_byte(1, 7).unwrap();
        store.capacity()
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut store = MockEeprom::<4>::new();

        assert_eq!(poke(&mut store), 4);
        assert_eq!(store.read_byte(1).unwrap(), 7);
    }

    proptest! {
        #[test]
        fn prop_float32_round_trips_bit_exact(
            bits in any::<u32>().prop_filter("finite", |b| f32::from_bits(*b).is_finite())
        ) {
            let mut store = MockEeprom::<4>::new();
            store.write_float32(0, f32::from_bits(bits)).unwrap();
            prop_assert_eq!(store.read_float32(0).unwrap().to_bits(), bits);
        }
    }
}
