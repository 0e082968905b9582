//! EEPROM layout map
//!
//! Fixed byte offsets of every persisted field. This is a wire contract
//! with deployed controllers: offsets and widths must never change
//! without a migration.
//!
//! ```text
//! Offset  Width  Field
//!   0       2    signature (0x55AA)
//!   2       1    intensity
//!   3       1    displays bitmask
//!   4       4    red calibration (f32)
//!   8       4    red calibration date (u32)
//!  12       4    blue calibration (f32)
//!  16       4    blue calibration date (u32)
//! ```

/// Signature marking a store initialised by this firmware's default writer
///
/// A sentinel, not a checksum.
pub const MAGIC_NUMBER: u16 = 0x55AA;

/// Total bytes occupied by the settings block
pub const LAYOUT_SIZE: usize = 20;

/// Storage width of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Width {
    /// 1 byte
    Byte = 1,
    /// 2 bytes, little-endian
    Word16 = 2,
    /// 4 bytes, little-endian (u32 or f32 bits)
    Word32 = 4,
}

impl Width {
    /// Width in bytes
    pub const fn bytes(self) -> usize {
        self as usize
    }
}

/// A named field in the settings block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// 2 byte signature
    Signature,
    /// Display intensity, nominally 0..=15
    Intensity,
    /// Active displays bitmask
    Displays,
    /// Red probe calibration offset
    RedCal,
    /// Red probe calibration date
    RedCalDate,
    /// Blue probe calibration offset
    BlueCal,
    /// Blue probe calibration date
    BlueCalDate,
}

impl Field {
    /// Every field, in offset order
    pub const ALL: [Field; 7] = [
        Field::Signature,
        Field::Intensity,
        Field::Displays,
        Field::RedCal,
        Field::RedCalDate,
        Field::BlueCal,
        Field::BlueCalDate,
    ];

    /// Byte offset of the field within the store
    pub const fn offset(self) -> u32 {
        match self {
            Field::Signature => 0,
            Field::Intensity => 2,
            Field::Displays => 3,
            Field::RedCal => 4,
            Field::RedCalDate => 8,
            Field::BlueCal => 12,
            Field::BlueCalDate => 16,
        }
    }

    /// Storage width of the field
    pub const fn width(self) -> Width {
        match self {
            Field::Signature => Width::Word16,
            Field::Intensity | Field::Displays => Width::Byte,
            Field::RedCal | Field::RedCalDate | Field::BlueCal | Field::BlueCalDate => {
                Width::Word32
            }
        }
    }

    /// One past the last byte of the field
    pub const fn end(self) -> u32 {
        self.offset() + self.width().bytes() as u32
    }

    /// Symbolic name, for logs
    pub const fn name(self) -> &'static str {
        match self {
            Field::Signature => "signature",
            Field::Intensity => "intensity",
            Field::Displays => "displays",
            Field::RedCal => "red-calibration",
            Field::RedCalDate => "red-calibration-date",
            Field::BlueCal => "blue-calibration",
            Field::BlueCalDate => "blue-calibration-date",
        }
    }
}

/// Fields are contiguous, in offset order, and end at `LAYOUT_SIZE`
const fn layout_is_packed() -> bool {
    let mut expected = 0;
    let mut i = 0;
    while i < Field::ALL.len() {
        if Field::ALL[i].offset() != expected {
            return false;
        }
        expected = Field::ALL[i].end();
        i += 1;
    }
    expected as usize == LAYOUT_SIZE
}

const _: () = assert!(layout_is_packed(), "settings layout has gaps or overlaps");
