//! Two-wire interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::{Adxl314Interface, SCRATCH_CAPACITY};

/// Default 7-bit device address (ALT pin tied high).
pub const PRIMARY_ADDRESS: u8 = 0x1D;
/// Alternate 7-bit device address (ALT pin tied low).
pub const ALTERNATE_ADDRESS: u8 = 0x53;

/// Two-wire interface implementation for the ADXL314 driver.
///
/// Reads address the register with a repeated-start write followed by a
/// burst read; writes go out as one combined address-plus-payload transfer
/// framed through the handle's scratch buffer.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
    buf: [u8; SCRATCH_CAPACITY],
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface using the primary device address.
    pub const fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, PRIMARY_ADDRESS)
    }

    /// Creates a new interface with an explicit 7-bit device address.
    pub const fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buf: [0; SCRATCH_CAPACITY],
        }
    }

    /// Returns the configured 7-bit device address.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Provides mutable access to the wrapped bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Adxl314Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.write_many(register, core::slice::from_ref(&value))
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        self.i2c.write_read(self.address, &[register], buf)
    }

    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }

        let frame = &mut self.buf[..1 + data.len()];
        frame[0] = register;
        frame[1..].copy_from_slice(data);
        self.i2c.write(self.address, frame)
    }
}
