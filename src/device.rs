//! High-level ADXL314 device driver implementation.

use crate::error::{Error, Result};
use crate::fifo;
use crate::interface::i2c::I2cInterface;
use crate::interface::spi::SpiInterface;
use crate::interface::Adxl314Interface;
use crate::params::{Axis, FifoMode, OperatingMode, OutputDataRate};
use crate::registers::{
    BwRate, FifoControl, InterruptFlags, PowerControl, BYTES_PER_ENTRY, DEVICE_ID, FIFO_CTL_MODE_MASK,
    FIFO_CTL_SAMPLES_MASK, MAX_FIFO_SAMPLES, POWER_CTL_AUTO_SLEEP, POWER_CTL_MEASURE, RATE_MASK,
    REG_BW_RATE, REG_DATA_AXIS, REG_DEVID, REG_FIFO_CTL, REG_INT_ENABLE, REG_INT_MAP,
    REG_INT_SOURCE, REG_POWER_CTL, REG_THRESH_ACT, REG_THRESH_INACT, REG_TIME_INACT,
};
use crate::sample::{Acceleration, RawSample};
use crate::state::DeviceState;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

/// High-level synchronous driver for the ADXL314 accelerometer.
///
/// The transport kind (SPI or two-wire) is fixed for the handle's lifetime
/// by the interface type parameter. Every operation blocks for the duration
/// of its bus transactions; a handle carries no internal synchronization,
/// so concurrent use from two contexts must be serialized externally.
pub struct Adxl314<IFACE> {
    interface: IFACE,
    state: DeviceState,
}

impl<IFACE> Adxl314<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE) -> Self {
        Self {
            interface,
            state: DeviceState::default(),
        }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns the cached device state.
    pub fn state(&self) -> &DeviceState {
        &self.state
    }
}

impl<SPI> Adxl314<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    // ==================================================================
    // == Transport Convenience Constructors ============================
    // ==================================================================
    /// Convenience constructor for SPI transports.
    pub fn new_spi(spi: SPI) -> Self {
        Self::new(SpiInterface::new(spi))
    }

    /// Releases the driver, returning the SPI device.
    pub fn release_spi(self) -> SPI {
        self.release().release()
    }
}

impl<I2C> Adxl314<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Convenience constructor for two-wire transports at the primary address.
    pub fn new_i2c(i2c: I2C) -> Self {
        Self::new(I2cInterface::new(i2c))
    }

    /// Convenience constructor with an explicit 7-bit device address.
    pub fn new_i2c_with_address(i2c: I2C, address: u8) -> Self {
        Self::new(I2cInterface::with_address(i2c, address))
    }

    /// Releases the driver, returning the bus.
    pub fn release_i2c(self) -> I2C {
        self.release().release()
    }
}

impl<IFACE, CommE> Adxl314<IFACE>
where
    IFACE: Adxl314Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Identification ===============================
    // ==================================================================
    /// Verifies the device identity and hydrates the state cache.
    ///
    /// The identity check is the only fatal step: a mismatching `DEVID` byte
    /// fails with [`Error::IdentityMismatch`]. Hydration reads are
    /// best-effort; a failed read leaves that cache field at its zero
    /// default.
    pub fn init(&mut self) -> Result<(), CommE> {
        let id = self
            .interface
            .read_register(REG_DEVID)
            .map_err(Error::from)?;
        if id != DEVICE_ID {
            return Err(Error::IdentityMismatch);
        }

        self.hydrate_state();
        debug!("ADXL314 successfully initialized");

        Ok(())
    }

    /// Reads the identity register.
    pub fn device_id(&mut self) -> Result<u8, CommE> {
        self.interface.read_register(REG_DEVID).map_err(Error::from)
    }

    /// Populates the cache from live registers, tolerating read failures.
    fn hydrate_state(&mut self) {
        if let Ok(value) = self.interface.read_register(REG_POWER_CTL) {
            self.state.op_mode = if PowerControl::from(value).measure() {
                OperatingMode::Measure
            } else {
                OperatingMode::Standby
            };
        }

        if let Ok(value) = self.interface.read_register(REG_BW_RATE) {
            if let Some(odr) = OutputDataRate::from_field_value(BwRate::from(value).rate()) {
                self.state.odr = odr;
            }
        }

        for axis in [Axis::X, Axis::Y, Axis::Z] {
            if let Ok(value) = self.interface.read_register(axis.offset_register()) {
                self.state.offsets[axis.index()] = value;
            }
        }

        if let Ok(value) = self.interface.read_register(REG_FIFO_CTL) {
            let ctl = FifoControl::from(value);
            self.state.fifo_mode = ctl.mode();
            self.state.fifo_samples = ctl.samples();
        }

        if let Ok(value) = self.interface.read_register(REG_THRESH_ACT) {
            self.state.activity_threshold = value;
        }
    }

    // ==================================================================
    // == Operating Mode & Lifecycle ====================================
    // ==================================================================
    /// Places the device into the given operating mode.
    pub fn set_op_mode(&mut self, mode: OperatingMode) -> Result<(), CommE> {
        self.control_bit(
            REG_POWER_CTL,
            POWER_CTL_MEASURE,
            matches!(mode, OperatingMode::Measure),
        )?;
        self.state.op_mode = mode;
        Ok(())
    }

    /// Returns the current operating mode.
    ///
    /// This is a live register read rather than a cache lookup, since an
    /// external reset can drop the device back to standby behind the
    /// driver's back.
    pub fn op_mode(&mut self) -> Result<OperatingMode, CommE> {
        let value = self
            .interface
            .read_register(REG_POWER_CTL)
            .map_err(Error::from)?;

        Ok(if PowerControl::from(value).measure() {
            OperatingMode::Measure
        } else {
            OperatingMode::Standby
        })
    }

    /// Enables or disables autosleep.
    ///
    /// The device only reliably accepts the autosleep bit while not
    /// measuring, so this forces standby, flips the bit, and restores
    /// measurement mode. The first failing step's error is surfaced without
    /// rollback: the device may be left in standby, and callers should query
    /// [`op_mode`](Self::op_mode) after a failure.
    pub fn set_autosleep(&mut self, enable: bool) -> Result<(), CommE> {
        self.set_op_mode(OperatingMode::Standby)?;
        self.control_bit(REG_POWER_CTL, POWER_CTL_AUTO_SLEEP, enable)?;
        self.set_op_mode(OperatingMode::Measure)
    }

    /// Runs the device self-test.
    ///
    /// Not implemented; always fails with [`Error::NotImplemented`].
    pub fn self_test(&mut self) -> Result<(), CommE> {
        Err(Error::NotImplemented)
    }

    // ==================================================================
    // == Configuration =================================================
    // ==================================================================
    /// Sets the output data rate.
    pub fn set_odr(&mut self, odr: OutputDataRate) -> Result<(), CommE> {
        self.masked_write(REG_BW_RATE, odr.field_value(), RATE_MASK)?;
        self.state.odr = odr;
        Ok(())
    }

    /// Returns the cached output data rate.
    pub fn odr(&self) -> OutputDataRate {
        self.state.odr
    }

    /// Enables or disables low-power operation.
    pub fn set_low_power(&mut self, enable: bool) -> Result<(), CommE> {
        let low_power = u8::from(BwRate::new().with_low_power(true));
        self.control_bit(REG_BW_RATE, low_power, enable)
    }

    /// Sets the offset byte of one axis.
    pub fn set_offset(&mut self, axis: Axis, offset: u8) -> Result<(), CommE> {
        self.interface
            .write_register(axis.offset_register(), offset)
            .map_err(Error::from)?;
        self.state.offsets[axis.index()] = offset;
        Ok(())
    }

    /// Returns the cached offset byte of one axis.
    pub fn offset(&self, axis: Axis) -> u8 {
        self.state.offsets[axis.index()]
    }

    /// Sets the activity threshold (780 mg/LSB).
    pub fn set_activity_threshold(&mut self, threshold: u8) -> Result<(), CommE> {
        self.interface
            .write_register(REG_THRESH_ACT, threshold)
            .map_err(Error::from)?;
        self.state.activity_threshold = threshold;
        Ok(())
    }

    /// Returns the cached activity threshold.
    pub fn activity_threshold(&self) -> u8 {
        self.state.activity_threshold
    }

    /// Sets the inactivity threshold (780 mg/LSB).
    pub fn set_inactivity_threshold(&mut self, threshold: u8) -> Result<(), CommE> {
        self.interface
            .write_register(REG_THRESH_INACT, threshold)
            .map_err(Error::from)
    }

    /// Sets the inactivity qualification time in seconds.
    pub fn set_inactivity_time(&mut self, seconds: u8) -> Result<(), CommE> {
        self.interface
            .write_register(REG_TIME_INACT, seconds)
            .map_err(Error::from)
    }

    // ==================================================================
    // == Interrupt Plumbing ============================================
    // ==================================================================
    /// Selects which events assert an interrupt pin.
    pub fn set_interrupt_enable(&mut self, flags: InterruptFlags) -> Result<(), CommE> {
        self.interface
            .write_register(REG_INT_ENABLE, flags.into())
            .map_err(Error::from)
    }

    /// Routes each interrupt event to INT1 (clear) or INT2 (set).
    pub fn set_interrupt_map(&mut self, flags: InterruptFlags) -> Result<(), CommE> {
        self.interface
            .write_register(REG_INT_MAP, flags.into())
            .map_err(Error::from)
    }

    /// Reads the pending interrupt source flags.
    pub fn interrupt_source(&mut self) -> Result<InterruptFlags, CommE> {
        let value = self
            .interface
            .read_register(REG_INT_SOURCE)
            .map_err(Error::from)?;
        Ok(InterruptFlags::from(value))
    }

    /// Returns whether the FIFO watermark event is pending.
    pub fn watermark_reached(&mut self) -> Result<bool, CommE> {
        Ok(self.interrupt_source()?.watermark())
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads one raw acceleration triplet from the data registers.
    pub fn read_raw_xyz(&mut self) -> Result<RawSample, CommE> {
        let mut bytes = [0u8; BYTES_PER_ENTRY];
        self.interface
            .read_many(REG_DATA_AXIS, &mut bytes)
            .map_err(Error::from)?;
        Ok(RawSample::from_bytes(&bytes))
    }

    /// Reads one acceleration triplet converted to fixed-point m/s².
    pub fn read_xyz(&mut self) -> Result<Acceleration, CommE> {
        Ok(self.read_raw_xyz()?.to_physical())
    }

    // ==================================================================
    // == FIFO ==========================================================
    // ==================================================================
    /// Sets the FIFO operating mode.
    pub fn set_fifo_mode(&mut self, mode: FifoMode) -> Result<(), CommE> {
        let data = u8::from(FifoControl::new().with_mode(mode));
        self.masked_write(REG_FIFO_CTL, data, FIFO_CTL_MODE_MASK)?;
        self.state.fifo_mode = mode;
        Ok(())
    }

    /// Returns the cached FIFO operating mode.
    pub fn fifo_mode(&self) -> FifoMode {
        self.state.fifo_mode
    }

    /// Sets the FIFO samples threshold.
    ///
    /// Values above [`MAX_FIFO_SAMPLES`] are rejected with
    /// [`Error::InvalidArgument`] before any bus traffic.
    pub fn set_fifo_samples(&mut self, samples: u8) -> Result<(), CommE> {
        if samples > MAX_FIFO_SAMPLES {
            return Err(Error::InvalidArgument);
        }

        self.masked_write(
            REG_FIFO_CTL,
            samples & FIFO_CTL_SAMPLES_MASK,
            FIFO_CTL_SAMPLES_MASK,
        )?;
        self.state.fifo_samples = samples;
        Ok(())
    }

    /// Returns the cached FIFO samples threshold.
    pub fn fifo_samples(&self) -> u8 {
        self.state.fifo_samples
    }

    /// Returns the number of FIFO entries currently buffered.
    pub fn fifo_entry_count(&mut self) -> Result<u8, CommE> {
        fifo::entry_count(&mut self.interface)
    }

    /// Drains buffered FIFO entries into `out` as raw triples.
    ///
    /// See [`fifo::drain_raw`] for the batch semantics; on error the caller
    /// must discard `out`.
    pub fn read_fifo_raw<D>(&mut self, delay: &mut D, out: &mut [RawSample]) -> Result<usize, CommE>
    where
        D: DelayNs,
    {
        fifo::drain_raw(&mut self.interface, delay, out)
    }

    /// Drains buffered FIFO entries into `out` as converted values.
    pub fn read_fifo<D>(&mut self, delay: &mut D, out: &mut [Acceleration]) -> Result<usize, CommE>
    where
        D: DelayNs,
    {
        fifo::drain_converted(&mut self.interface, delay, out)
    }

    // ==================================================================
    // == Internal Register Helpers =====================================
    // ==================================================================
    /// Read-modify-write preserving bits outside `mask`.
    ///
    /// `data` must already be shifted into field position. Not atomic with
    /// respect to other users of the register.
    fn masked_write(&mut self, register: u8, data: u8, mask: u8) -> Result<(), CommE> {
        let mut value = self
            .interface
            .read_register(register)
            .map_err(Error::from)?;

        value &= !mask;
        value |= data;

        self.interface
            .write_register(register, value)
            .map_err(Error::from)
    }

    /// Sets or clears the bits selected by `mask`.
    fn control_bit(&mut self, register: u8, mask: u8, enable: bool) -> Result<(), CommE> {
        let data = if enable { mask } else { 0x00 };
        self.masked_write(register, data, mask)
    }
}
