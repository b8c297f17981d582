//! Bus interface abstraction for the ADXL314 driver.

pub mod i2c;
pub mod spi;

/// Capacity of the per-handle transaction scratch buffer.
///
/// One header byte plus the largest supported payload. The driver reads FIFO
/// entries one at a time (6 bytes each) instead of one multi-entry burst so
/// every transaction fits this bound.
pub const SCRATCH_CAPACITY: usize = 24;

/// Abstraction over the low-level bus access required by the driver.
///
/// Implementations frame the transaction for their transport: the SPI path
/// prefixes a read/write command byte, the two-wire path addresses the
/// register separately. Transport failures surface unchanged; no retries
/// happen at this layer.
pub trait Adxl314Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;

    /// Reads multiple consecutive registers into the provided buffer.
    ///
    /// `buf` must not exceed [`SCRATCH_CAPACITY`]` - 1` bytes.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;

    /// Writes multiple consecutive registers from the provided buffer.
    ///
    /// `data` must not exceed [`SCRATCH_CAPACITY`]` - 1` bytes.
    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error>;
}
