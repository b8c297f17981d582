//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.

use embedded_hal::spi::SpiDevice;

use super::{Adxl314Interface, SCRATCH_CAPACITY};

/// Read flag carried in bit 7 of the command byte.
const SPI_READ: u8 = 0x80;
/// Write command; the flag bit stays clear.
const SPI_WRITE: u8 = 0x00;
/// Multiple-byte flag carried in bit 6 of the command byte.
const SPI_MULTIBYTE: u8 = 0x40;
/// Register addresses occupy the low six bits.
const ADDRESS_MASK: u8 = 0x3F;

/// SPI-based interface implementation for the ADXL314 driver.
///
/// Owns the handle's transaction scratch buffer; every transfer is framed
/// in place and issued as a single bus transaction.
pub struct SpiInterface<SPI> {
    spi: SPI,
    buf: [u8; SCRATCH_CAPACITY],
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self {
            spi,
            buf: [0; SCRATCH_CAPACITY],
        }
    }

    /// Builds the command byte used to address registers over SPI.
    fn command_byte(register: u8, is_read: bool, multibyte: bool) -> u8 {
        let mut command = register & ADDRESS_MASK;
        command |= if is_read { SPI_READ } else { SPI_WRITE };
        if multibyte {
            command |= SPI_MULTIBYTE;
        }
        command
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Adxl314Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

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

        let frame = &mut self.buf[..1 + buf.len()];
        frame[0] = Self::command_byte(register, true, buf.len() > 1);
        frame[1..].fill(0);
        self.spi.transfer_in_place(frame)?;
        buf.copy_from_slice(&frame[1..]);
        Ok(())
    }

    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }

        let frame = &mut self.buf[..1 + data.len()];
        frame[0] = Self::command_byte(register, false, data.len() > 1);
        frame[1..].copy_from_slice(data);
        self.spi.write(frame)
    }
}
