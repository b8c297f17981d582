//! Fixed-point conversion pipeline from raw axis registers to acceleration.
//!
//! At ±200 g with 13-bit resolution the datasheet scale factor is 50 mg/LSB,
//! i.e. 0.0500000 * 9.80665 = 0.4903325 m/s². Values are kept as an integer
//! part plus a base-10^7 fractional remainder so the conversion stays exact.

use crate::registers::BYTES_PER_ENTRY;

/// Scale factor numerator (raw LSB to m/s², scaled by 10^7).
pub const ACC_SCALE_FACTOR_MUL: i64 = 4_903_325;
/// Scale factor denominator.
pub const ACC_SCALE_FACTOR_DIV: i64 = 10_000_000;

/// Acceleration of one axis as an integer part and a base-10^7 remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelValue {
    /// Integer part in m/s².
    pub integer: i64,
    /// Fractional remainder, seven decimal digits, sign follows `integer`'s
    /// dividend (truncating division).
    pub fractional: i32,
}

/// One raw (x, y, z) sample as read from the data registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// X-axis reading as two's complement.
    pub x: i16,
    /// Y-axis reading as two's complement.
    pub y: i16,
    /// Z-axis reading as two's complement.
    pub z: i16,
}

/// One converted (x, y, z) sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    /// X-axis acceleration.
    pub x: AccelValue,
    /// Y-axis acceleration.
    pub y: AccelValue,
    /// Z-axis acceleration.
    pub z: AccelValue,
}

/// Converts a raw axis reading into a fixed-point physical value.
///
/// The remainder of the truncating division keeps the dividend's sign, so a
/// small negative reading yields a zero integer part with a negative
/// fractional part rather than rounding down.
pub fn raw_to_physical(raw: i16) -> AccelValue {
    let scaled = raw as i64 * ACC_SCALE_FACTOR_MUL;
    AccelValue {
        integer: scaled / ACC_SCALE_FACTOR_DIV,
        fractional: (scaled % ACC_SCALE_FACTOR_DIV) as i32,
    }
}

impl RawSample {
    /// Decodes one entry from six consecutive data register bytes.
    ///
    /// Each axis is stored low byte first; the 13-bit result arrives already
    /// sign-extended into the upper bits.
    pub fn from_bytes(bytes: &[u8; BYTES_PER_ENTRY]) -> Self {
        Self {
            x: i16::from_le_bytes([bytes[0], bytes[1]]),
            y: i16::from_le_bytes([bytes[2], bytes[3]]),
            z: i16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }

    /// Converts all three axes through the fixed-point pipeline.
    pub fn to_physical(self) -> Acceleration {
        Acceleration {
            x: raw_to_physical(self.x),
            y: raw_to_physical(self.y),
            z: raw_to_physical(self.z),
        }
    }
}
