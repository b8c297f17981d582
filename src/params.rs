//! Strongly typed parameter enumerations for the ADXL314 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! the cached [`DeviceState`](crate::state::DeviceState) and the high-level
//! driver APIs. Prefer these types over raw integers to keep configuration
//! values valid and explicit.

use modular_bitfield::prelude::Specifier;

use crate::registers::{REG_DATA_AXIS, REG_OFS_AXIS};

/// Operating modes encoded by the `POWER_CTL.MEASURE` bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Standby mode; measurements are halted and power draw is minimal.
    Standby,
    /// Full measurement mode.
    Measure,
}

/// Available output data rate (ODR) selections.
///
/// The `BW_RATE` register stores the selection with a fixed offset of 6 in
/// its 4-bit rate field, so `Od6_25Hz` is written as `0b0110`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OutputDataRate {
    /// 6.25 Hz output data rate.
    Od6_25Hz = 0,
    /// 12.5 Hz output data rate.
    Od12_5Hz = 1,
    /// 25 Hz output data rate.
    Od25Hz = 2,
    /// 50 Hz output data rate.
    Od50Hz = 3,
    /// 100 Hz output data rate.
    Od100Hz = 4,
    /// 200 Hz output data rate.
    Od200Hz = 5,
    /// 400 Hz output data rate.
    Od400Hz = 6,
    /// 800 Hz output data rate.
    Od800Hz = 7,
    /// 1600 Hz output data rate.
    Od1600Hz = 8,
    /// 3200 Hz output data rate.
    Od3200Hz = 9,
}

/// Offset between the ODR selection code and the `BW_RATE` rate field value.
pub const ODR_FIELD_OFFSET: u8 = 6;

impl OutputDataRate {
    /// Returns the bare selection code (0..=9).
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the value written into the `BW_RATE` rate field.
    pub const fn field_value(self) -> u8 {
        self.code() + ODR_FIELD_OFFSET
    }

    /// Decodes a `BW_RATE` rate field value back into a selection.
    pub const fn from_field_value(value: u8) -> Option<Self> {
        match value {
            6 => Some(Self::Od6_25Hz),
            7 => Some(Self::Od12_5Hz),
            8 => Some(Self::Od25Hz),
            9 => Some(Self::Od50Hz),
            10 => Some(Self::Od100Hz),
            11 => Some(Self::Od200Hz),
            12 => Some(Self::Od400Hz),
            13 => Some(Self::Od800Hz),
            14 => Some(Self::Od1600Hz),
            15 => Some(Self::Od3200Hz),
            _ => None,
        }
    }

    /// Returns the ODR in millihertz as an integer value.
    pub const fn millihertz(self) -> u32 {
        match self {
            Self::Od6_25Hz => 6_250,
            Self::Od12_5Hz => 12_500,
            Self::Od25Hz => 25_000,
            Self::Od50Hz => 50_000,
            Self::Od100Hz => 100_000,
            Self::Od200Hz => 200_000,
            Self::Od400Hz => 400_000,
            Self::Od800Hz => 800_000,
            Self::Od1600Hz => 1_600_000,
            Self::Od3200Hz => 3_200_000,
        }
    }
}

/// Measurement axis selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Axis {
    /// X axis.
    X = 0,
    /// Y axis.
    Y = 1,
    /// Z axis.
    Z = 2,
}

impl Axis {
    /// Builds an axis from its numeric index; indices above 2 are rejected.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::X),
            1 => Some(Self::Y),
            2 => Some(Self::Z),
            _ => None,
        }
    }

    /// Returns the numeric index of the axis.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the address of the per-axis offset register.
    pub const fn offset_register(self) -> u8 {
        REG_OFS_AXIS + self as u8
    }

    /// Returns the address of the first (low) data register of the axis.
    pub const fn data_register(self) -> u8 {
        REG_DATA_AXIS + (self as u8) * 2
    }
}

/// FIFO operating modes encoded in `FIFO_CTL[7:6]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum FifoMode {
    /// FIFO disabled; bypassed.
    Bypass = 0b00,
    /// FIFO collects until full, then stops.
    Fifo = 0b01,
    /// Streaming mode (circular buffer).
    Stream = 0b10,
    /// Trigger mode.
    Triggered = 0b11,
}

/// Sleep-mode reading frequencies encoded in `POWER_CTL[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum WakeupRate {
    /// 8 readings per second.
    Hz8 = 0b00,
    /// 4 readings per second.
    Hz4 = 0b01,
    /// 2 readings per second.
    Hz2 = 0b10,
    /// 1 reading per second.
    Hz1 = 0b11,
}
