//! Typed settings accessors
//!
//! Each accessor round-trips to the store; nothing is cached. Values are
//! neither validated nor clamped in either direction, so an out-of-range
//! intensity written by a caller reads back unchanged.

use brewery_hal::NvStore;

use super::layout::{Field, Width, MAGIC_NUMBER};
use super::types::{ConfigSnapshot, Displays};

/// Typed view over the settings block of a non-volatile store
///
/// Owns the store handle for the lifetime of the firmware. Pass `&mut S`
/// instead to keep ownership elsewhere.
pub struct Settings<S> {
    store: S,
}

impl<S: NvStore> Settings<S> {
    /// Wrap a store without checking its signature
    ///
    /// Prefer [`Settings::open`], which runs the integrity check first.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Release the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Direct access to the underlying store
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    // ---- width primitives by field ----

    /// Read a 1 byte field
    pub fn read_byte(&mut self, field: Field) -> Result<u8, S::Error> {
        debug_assert_eq!(field.width(), Width::Byte);
        self.store.read_byte(field.offset())
    }

    /// Write a 1 byte field
    pub fn write_byte(&mut self, field: Field, value: u8) -> Result<(), S::Error> {
        debug_assert_eq!(field.width(), Width::Byte);
        self.store.write_byte(field.offset(), value)
    }

    /// Read a 2 byte field
    pub fn read_constant(&mut self, field: Field) -> Result<u16, S::Error> {
        debug_assert_eq!(field.width(), Width::Word16);
        self.store.read_word16(field.offset())
    }

    /// Write a 2 byte field
    pub fn write_constant(&mut self, field: Field, value: u16) -> Result<(), S::Error> {
        debug_assert_eq!(field.width(), Width::Word16);
        self.store.write_word16(field.offset(), value)
    }

    /// Read a 4 byte field as an unsigned integer
    pub fn read_u32(&mut self, field: Field) -> Result<u32, S::Error> {
        debug_assert_eq!(field.width(), Width::Word32);
        self.store.read_word32(field.offset())
    }

    /// Write a 4 byte field as an unsigned integer
    pub fn write_u32(&mut self, field: Field, value: u32) -> Result<(), S::Error> {
        debug_assert_eq!(field.width(), Width::Word32);
        self.store.write_word32(field.offset(), value)
    }

    /// Read a 4 byte field as a float
    pub fn read_f32(&mut self, field: Field) -> Result<f32, S::Error> {
        debug_assert_eq!(field.width(), Width::Word32);
        self.store.read_float32(field.offset())
    }

    /// Write a 4 byte field as a float
    pub fn write_f32(&mut self, field: Field, value: f32) -> Result<(), S::Error> {
        debug_assert_eq!(field.width(), Width::Word32);
        self.store.write_float32(field.offset(), value)
    }

    // ---- signature ----

    /// Raw signature word
    pub fn magic(&mut self) -> Result<u16, S::Error> {
        self.read_constant(Field::Signature)
    }

    /// Write the firmware's signature
    ///
    /// Only [`MAGIC_NUMBER`] can be written.
    pub fn write_magic(&mut self) -> Result<(), S::Error> {
        self.write_constant(Field::Signature, MAGIC_NUMBER)
    }

    /// True if the signature marks the store as initialised
    pub fn is_valid(&mut self) -> Result<bool, S::Error> {
        Ok(self.magic()? == MAGIC_NUMBER)
    }

    // ---- typed fields ----

    /// LED intensity (0..15 nominal, returned raw)
    pub fn intensity(&mut self) -> Result<u8, S::Error> {
        self.read_byte(Field::Intensity)
    }

    /// Set the LED intensity
    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), S::Error> {
        self.write_byte(Field::Intensity, intensity)
    }

    /// Active displays
    pub fn displays(&mut self) -> Result<Displays, S::Error> {
        self.read_byte(Field::Displays).map(Displays::from_bits)
    }

    /// Set the active displays
    pub fn set_displays(&mut self, displays: Displays) -> Result<(), S::Error> {
        self.write_byte(Field::Displays, displays.bits())
    }

    /// Red probe calibration offset
    pub fn red_cal(&mut self) -> Result<f32, S::Error> {
        self.read_f32(Field::RedCal)
    }

    /// Set the red probe calibration offset
    pub fn set_red_cal(&mut self, offset: f32) -> Result<(), S::Error> {
        self.write_f32(Field::RedCal, offset)
    }

    /// Red probe calibration date
    ///
    /// Controllers set up by the AVR firmware may hold the f32 bit pattern
    /// of the date here rather than the integer, since that firmware wrote
    /// this one slot with its float primitive.
    pub fn red_cal_date(&mut self) -> Result<u32, S::Error> {
        self.read_u32(Field::RedCalDate)
    }

    /// Set the red probe calibration date
    pub fn set_red_cal_date(&mut self, date: u32) -> Result<(), S::Error> {
        self.write_u32(Field::RedCalDate, date)
    }

    /// Blue probe calibration offset
    pub fn blue_cal(&mut self) -> Result<f32, S::Error> {
        self.read_f32(Field::BlueCal)
    }

    /// Set the blue probe calibration offset
    pub fn set_blue_cal(&mut self, offset: f32) -> Result<(), S::Error> {
        self.write_f32(Field::BlueCal, offset)
    }

    /// Blue probe calibration date
    pub fn blue_cal_date(&mut self) -> Result<u32, S::Error> {
        self.read_u32(Field::BlueCalDate)
    }

    /// Set the blue probe calibration date
    pub fn set_blue_cal_date(&mut self, date: u32) -> Result<(), S::Error> {
        self.write_u32(Field::BlueCalDate, date)
    }

    /// Read every setting
    pub fn snapshot(&mut self) -> Result<ConfigSnapshot, S::Error> {
        Ok(ConfigSnapshot {
            intensity: self.intensity()?,
            displays: self.displays()?,
            red_cal: self.red_cal()?,
            red_cal_date: self.red_cal_date()?,
            blue_cal: self.blue_cal()?,
            blue_cal_date: self.blue_cal_date()?,
        })
    }
}
