//! Register map definitions for the ADXL314 accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{FifoMode, WakeupRate};

/// Register address of `DEVID`.
pub const REG_DEVID: u8 = 0x00;
/// Register address of the X-axis offset register; Y and Z follow consecutively.
pub const REG_OFS_AXIS: u8 = 0x1E;
/// Register address of `THRESH_ACT`.
pub const REG_THRESH_ACT: u8 = 0x24;
/// Register address of `THRESH_INACT`.
pub const REG_THRESH_INACT: u8 = 0x25;
/// Register address of `TIME_INACT`.
pub const REG_TIME_INACT: u8 = 0x26;
/// Register address of `ACT_INACT_CTL`.
pub const REG_ACT_INACT_CTL: u8 = 0x27;
/// Register address of `BW_RATE`.
pub const REG_BW_RATE: u8 = 0x2C;
/// Register address of `POWER_CTL`.
pub const REG_POWER_CTL: u8 = 0x2D;
/// Register address of `INT_ENABLE`.
pub const REG_INT_ENABLE: u8 = 0x2E;
/// Register address of `INT_MAP`.
pub const REG_INT_MAP: u8 = 0x2F;
/// Register address of `INT_SOURCE`.
pub const REG_INT_SOURCE: u8 = 0x30;
/// Register address of `DATA_FORMAT`.
pub const REG_DATA_FORMAT: u8 = 0x31;
/// Register address of `DATAX0`; the remaining five data registers follow.
pub const REG_DATA_AXIS: u8 = 0x32;
/// Register address of `FIFO_CTL`.
pub const REG_FIFO_CTL: u8 = 0x38;
/// Register address of `FIFO_STATUS`.
pub const REG_FIFO_STATUS: u8 = 0x39;

/// Fixed identity byte returned by `DEVID`.
pub const DEVICE_ID: u8 = 0xE5;

/// Rate field mask inside `BW_RATE`.
pub const RATE_MASK: u8 = 0x0F;

/// `POWER_CTL` link bit.
pub const POWER_CTL_LINK: u8 = 1 << 5;
/// `POWER_CTL` autosleep bit.
pub const POWER_CTL_AUTO_SLEEP: u8 = 1 << 4;
/// `POWER_CTL` measure bit; set for measurement mode, clear for standby.
pub const POWER_CTL_MEASURE: u8 = 1 << 3;
/// `POWER_CTL` sleep bit.
pub const POWER_CTL_SLEEP: u8 = 1 << 2;

/// FIFO mode mask inside `FIFO_CTL`.
pub const FIFO_CTL_MODE_MASK: u8 = 0xC0;
/// FIFO samples threshold mask inside `FIFO_CTL`.
pub const FIFO_CTL_SAMPLES_MASK: u8 = 0x1F;
/// Entry count mask inside `FIFO_STATUS`.
pub const FIFO_STATUS_ENTRIES_MASK: u8 = 0x3F;

/// Largest accepted FIFO samples threshold value.
pub const MAX_FIFO_SAMPLES: u8 = 0x60;
/// Maximum number of buffered FIFO entries.
pub const MAX_FIFO_ENTRIES: usize = 32;
/// Number of consecutive data registers spanning one (x, y, z) entry.
pub const BYTES_PER_ENTRY: usize = 6;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

/// Bitfield representation of the `BW_RATE` register (address `0x2C`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BwRate {
    // Output data rate field (bits 3:0); holds the ODR code plus its offset.
    pub rate: B4,
    // Low-power operation flag (bit 4).
    pub low_power: bool,
    #[skip]
    __: B3,
}

impl From<u8> for BwRate {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<BwRate> for u8 {
    fn from(value: BwRate) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `POWER_CTL` register (address `0x2D`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerControl {
    // Sleep-mode reading frequency (bits 1:0).
    pub wakeup: WakeupRate,
    // Sleep flag (bit 2).
    pub sleep: bool,
    // Measurement enable flag (bit 3).
    pub measure: bool,
    // Autosleep enable flag (bit 4).
    pub auto_sleep: bool,
    // Activity/inactivity link flag (bit 5).
    pub link: bool,
    #[skip]
    __: B2,
}

impl From<u8> for PowerControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PowerControl> for u8 {
    fn from(value: PowerControl) -> Self {
        value.into_bytes()[0]
    }
}

/// Shared bitfield layout of `INT_ENABLE`, `INT_MAP`, and `INT_SOURCE`.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptFlags {
    // FIFO overrun flag (bit 0).
    pub overrun: bool,
    // FIFO watermark flag (bit 1).
    pub watermark: bool,
    #[skip]
    __: B1,
    // Inactivity event flag (bit 3).
    pub inactivity: bool,
    // Activity event flag (bit 4).
    pub activity: bool,
    #[skip]
    __: B2,
    // Data ready flag (bit 7).
    pub data_ready: bool,
}

impl From<u8> for InterruptFlags {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<InterruptFlags> for u8 {
    fn from(value: InterruptFlags) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `DATA_FORMAT` register (address `0x31`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataFormat {
    #[skip]
    __: B2,
    // Left-justify flag (bit 2).
    pub justify: bool,
    #[skip]
    __: B2,
    // Interrupt polarity inversion flag (bit 5).
    pub int_invert: bool,
    // 3-wire SPI selection flag (bit 6).
    pub spi_3wire: bool,
    // Self-test force flag (bit 7).
    pub self_test: bool,
}

impl From<u8> for DataFormat {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<DataFormat> for u8 {
    fn from(value: DataFormat) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `FIFO_CTL` register (address `0x38`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoControl {
    // FIFO samples threshold (bits 4:0).
    pub samples: B5,
    // Trigger event routing flag (bit 5).
    pub trigger: bool,
    // FIFO operating mode selection (bits 7:6).
    pub mode: FifoMode,
}

impl From<u8> for FifoControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<FifoControl> for u8 {
    fn from(value: FifoControl) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `FIFO_STATUS` register (address `0x39`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoStatus {
    // Buffered entry count (bits 5:0).
    pub entries: B6,
    #[skip]
    __: B1,
    // Trigger event occurred flag (bit 7).
    pub fifo_trigger: bool,
}

impl From<u8> for FifoStatus {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<FifoStatus> for u8 {
    fn from(value: FifoStatus) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for BwRate {
    type Raw = u8;
    const ADDRESS: u8 = REG_BW_RATE;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x0A);
}

impl Register for PowerControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_POWER_CTL;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for DataFormat {
    type Raw = u8;
    const ADDRESS: u8 = REG_DATA_FORMAT;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for FifoControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_FIFO_CTL;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for FifoStatus {
    type Raw = u8;
    const ADDRESS: u8 = REG_FIFO_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}
