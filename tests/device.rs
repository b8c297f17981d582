//! End-to-end driver flows against `embedded-hal-mock` transports.

use adxl314::interface::i2c::PRIMARY_ADDRESS;
use adxl314::params::{Axis, FifoMode, OperatingMode, OutputDataRate};
use adxl314::sample::{Acceleration, RawSample};
use adxl314::{Adxl314, Error};
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

const ADDR: u8 = PRIMARY_ADDRESS;

fn read1(register: u8, value: u8) -> I2cTransaction {
    I2cTransaction::write_read(ADDR, vec![register], vec![value])
}

#[test]
fn init_verifies_identity_and_hydrates_cache() {
    let expectations = [
        read1(0x00, 0xE5),
        // POWER_CTL with the measure bit set.
        read1(0x2D, 0x08),
        // BW_RATE rate field 13 -> 800 Hz.
        read1(0x2C, 0x0D),
        read1(0x1E, 0x01),
        read1(0x1F, 0x02),
        read1(0x20, 0x03),
        // FIFO_CTL: stream mode, threshold 5.
        read1(0x38, 0b1000_0101),
        read1(0x24, 0x10),
    ];
    let mut device = Adxl314::new_i2c(I2cMock::new(&expectations));

    device.init().unwrap();

    assert_eq!(device.state().op_mode, OperatingMode::Measure);
    assert_eq!(device.odr(), OutputDataRate::Od800Hz);
    assert_eq!(device.offset(Axis::X), 0x01);
    assert_eq!(device.offset(Axis::Y), 0x02);
    assert_eq!(device.offset(Axis::Z), 0x03);
    assert_eq!(device.fifo_mode(), FifoMode::Stream);
    assert_eq!(device.fifo_samples(), 5);
    assert_eq!(device.activity_threshold(), 0x10);

    device.release_i2c().done();
}

#[test]
fn init_identity_mismatch_is_fatal() {
    let expectations = [read1(0x00, 0x00)];
    let mut device = Adxl314::new_i2c(I2cMock::new(&expectations));

    assert_eq!(device.init(), Err(Error::IdentityMismatch));

    device.release_i2c().done();
}

#[test]
fn init_tolerates_failed_hydration_reads() {
    let expectations = [
        read1(0x00, 0xE5),
        read1(0x2D, 0x00).with_error(ErrorKind::Other),
        read1(0x2C, 0x00).with_error(ErrorKind::Other),
        read1(0x1E, 0x00).with_error(ErrorKind::Other),
        read1(0x1F, 0x00).with_error(ErrorKind::Other),
        read1(0x20, 0x00).with_error(ErrorKind::Other),
        read1(0x38, 0x00).with_error(ErrorKind::Other),
        read1(0x24, 0x00).with_error(ErrorKind::Other),
    ];
    let mut device = Adxl314::new_i2c(I2cMock::new(&expectations));

    device.init().unwrap();

    // Every field stays at its zero default.
    assert_eq!(device.state().op_mode, OperatingMode::Standby);
    assert_eq!(device.odr(), OutputDataRate::Od6_25Hz);
    assert_eq!(device.fifo_mode(), FifoMode::Bypass);
    assert_eq!(device.fifo_samples(), 0);

    device.release_i2c().done();
}

#[test]
fn set_odr_masks_rate_field_and_updates_cache() {
    let expectations = [
        SpiTransaction::transaction_start(),
        // Read BW_RATE: low-power bit set, old rate 0x0A.
        SpiTransaction::transfer_in_place(vec![0x80 | 0x2C, 0x00], vec![0x00, 0x1A]),
        SpiTransaction::transaction_end(),
        SpiTransaction::transaction_start(),
        // Rate field becomes code 9 + offset 6 = 0x0F; bit 4 is preserved.
        SpiTransaction::write_vec(vec![0x2C, 0x1F]),
        SpiTransaction::transaction_end(),
    ];
    let mut device = Adxl314::new_spi(SpiMock::new(&expectations));

    device.set_odr(OutputDataRate::Od3200Hz).unwrap();
    assert_eq!(device.odr(), OutputDataRate::Od3200Hz);

    device.release_spi().done();
}

#[test]
fn failed_odr_write_leaves_cache_untouched() {
    let expectations = [
        read1(0x2C, 0x0A),
        I2cTransaction::write(ADDR, vec![0x2C, 0x0F]).with_error(ErrorKind::Other),
    ];
    let mut device = Adxl314::new_i2c(I2cMock::new(&expectations));

    assert_eq!(
        device.set_odr(OutputDataRate::Od3200Hz),
        Err(Error::Comm(ErrorKind::Other))
    );
    assert_eq!(device.odr(), OutputDataRate::Od6_25Hz);

    device.release_i2c().done();
}

#[test]
fn set_offset_writes_axis_register() {
    let expectations = [I2cTransaction::write(ADDR, vec![0x20, 0x42])];
    let mut device = Adxl314::new_i2c(I2cMock::new(&expectations));

    device.set_offset(Axis::Z, 0x42).unwrap();
    assert_eq!(device.offset(Axis::Z), 0x42);

    device.release_i2c().done();
}

#[test]
fn axis_index_out_of_range_never_reaches_the_bus() {
    // Index 3 is unrepresentable; no device handle is even needed.
    assert_eq!(Axis::from_index(3), None);

    let mut device = Adxl314::new_i2c(I2cMock::new(&[]));
    if let Some(axis) = Axis::from_index(3) {
        device.set_offset(axis, 0x42).unwrap();
    }
    device.release_i2c().done();
}

#[test]
fn fifo_samples_above_max_is_rejected_without_bus_traffic() {
    let mut device = Adxl314::new_i2c(I2cMock::new(&[]));

    assert_eq!(device.set_fifo_samples(0x61), Err(Error::InvalidArgument));
    assert_eq!(device.fifo_samples(), 0);

    device.release_i2c().done();
}

#[test]
fn fifo_samples_masked_into_control_register() {
    let expectations = [
        read1(0x38, 0xC3),
        // Threshold bits replaced, mode bits preserved.
        I2cTransaction::write(ADDR, vec![0x38, 0xD0]),
    ];
    let mut device = Adxl314::new_i2c(I2cMock::new(&expectations));

    device.set_fifo_samples(0x10).unwrap();
    assert_eq!(device.fifo_samples(), 0x10);

    device.release_i2c().done();
}

#[test]
fn set_fifo_mode_touches_only_mode_bits() {
    let expectations = [read1(0x38, 0x1F), I2cTransaction::write(ADDR, vec![0x38, 0x9F])];
    let mut device = Adxl314::new_i2c(I2cMock::new(&expectations));

    device.set_fifo_mode(FifoMode::Stream).unwrap();
    assert_eq!(device.fifo_mode(), FifoMode::Stream);

    device.release_i2c().done();
}

#[test]
fn single_sample_read_converts_to_fixed_point() {
    let expectations = [I2cTransaction::write_read(
        ADDR,
        vec![0x32],
        vec![0xCC, 0x00, 0xFF, 0xFF, 0x00, 0x00],
    )];
    let mut device = Adxl314::new_i2c(I2cMock::new(&expectations));

    let accel = device.read_xyz().unwrap();
    assert_eq!(accel.x.integer, 100);
    assert_eq!(accel.x.fractional, 278_300);
    assert_eq!(accel.y.integer, 0);
    assert_eq!(accel.y.fractional, -4_903_325);
    assert_eq!(accel.z.integer, 0);
    assert_eq!(accel.z.fractional, 0);

    device.release_i2c().done();
}

#[test]
fn fifo_drain_with_zero_entries_reads_only_status() {
    let expectations = [read1(0x39, 0x00)];
    let mut device = Adxl314::new_i2c(I2cMock::new(&expectations));
    let mut delay = NoopDelay::new();

    let mut out = [RawSample::default(); 32];
    let count = device.read_fifo_raw(&mut delay, &mut out).unwrap();
    assert_eq!(count, 0);

    device.release_i2c().done();
}

#[test]
fn fifo_drain_pops_one_entry_per_read() {
    let expectations = [
        read1(0x39, 0x02),
        I2cTransaction::write_read(
            ADDR,
            vec![0x32],
            vec![0x01, 0x00, 0x02, 0x00, 0x03, 0x00],
        ),
        I2cTransaction::write_read(
            ADDR,
            vec![0x32],
            vec![0xFF, 0xFF, 0xFE, 0xFF, 0xFD, 0xFF],
        ),
    ];
    let mut device = Adxl314::new_i2c(I2cMock::new(&expectations));
    let mut delay = NoopDelay::new();

    let mut out = [RawSample::default(); 32];
    let count = device.read_fifo_raw(&mut delay, &mut out).unwrap();

    assert_eq!(count, 2);
    assert_eq!(out[0], RawSample { x: 1, y: 2, z: 3 });
    assert_eq!(out[1], RawSample { x: -1, y: -2, z: -3 });

    device.release_i2c().done();
}

#[test]
fn fifo_drain_aborts_whole_batch_on_mid_read_failure() {
    let expectations = [
        read1(0x39, 0x03),
        I2cTransaction::write_read(
            ADDR,
            vec![0x32],
            vec![0x01, 0x00, 0x02, 0x00, 0x03, 0x00],
        ),
        I2cTransaction::write_read(ADDR, vec![0x32], vec![0x00; 6]).with_error(ErrorKind::Other),
    ];
    let mut device = Adxl314::new_i2c(I2cMock::new(&expectations));
    let mut delay = NoopDelay::new();

    let mut out = [RawSample::default(); 32];
    let result = device.read_fifo_raw(&mut delay, &mut out);
    assert_eq!(result, Err(Error::Comm(ErrorKind::Other)));

    device.release_i2c().done();
}

#[test]
fn fifo_converted_drain_maps_through_the_pipeline() {
    let expectations = [
        read1(0x39, 0x01),
        I2cTransaction::write_read(
            ADDR,
            vec![0x32],
            vec![0xCC, 0x00, 0x00, 0x00, 0x34, 0xFF],
        ),
    ];
    let mut device = Adxl314::new_i2c(I2cMock::new(&expectations));
    let mut delay = NoopDelay::new();

    let mut out = [Acceleration::default(); 32];
    let count = device.read_fifo(&mut delay, &mut out).unwrap();

    assert_eq!(count, 1);
    assert_eq!(out[0].x.integer, 100);
    assert_eq!(out[0].x.fractional, 278_300);
    // 0xFF34 = -204.
    assert_eq!(out[0].z.integer, -100);
    assert_eq!(out[0].z.fractional, -278_300);

    device.release_i2c().done();
}

#[test]
fn autosleep_sequences_standby_flag_measure() {
    let expectations = [
        // Force standby: clear the measure bit.
        read1(0x2D, 0x08),
        I2cTransaction::write(ADDR, vec![0x2D, 0x00]),
        // Flip the autosleep bit while not measuring.
        read1(0x2D, 0x00),
        I2cTransaction::write(ADDR, vec![0x2D, 0x10]),
        // Restore measurement mode.
        read1(0x2D, 0x10),
        I2cTransaction::write(ADDR, vec![0x2D, 0x18]),
    ];
    let mut device = Adxl314::new_i2c(I2cMock::new(&expectations));

    device.set_autosleep(true).unwrap();
    assert_eq!(device.state().op_mode, OperatingMode::Measure);

    device.release_i2c().done();
}

#[test]
fn autosleep_failure_may_leave_the_device_in_standby() {
    let expectations = [
        read1(0x2D, 0x08),
        I2cTransaction::write(ADDR, vec![0x2D, 0x00]),
        read1(0x2D, 0x00).with_error(ErrorKind::Other),
        // Callers are expected to query the mode after a failure.
        read1(0x2D, 0x00),
    ];
    let mut device = Adxl314::new_i2c(I2cMock::new(&expectations));

    assert_eq!(
        device.set_autosleep(true),
        Err(Error::Comm(ErrorKind::Other))
    );
    assert_eq!(device.op_mode().unwrap(), OperatingMode::Standby);

    device.release_i2c().done();
}

#[test]
fn op_mode_is_read_live() {
    let expectations = [read1(0x2D, 0x08), read1(0x2D, 0x00)];
    let mut device = Adxl314::new_i2c(I2cMock::new(&expectations));

    assert_eq!(device.op_mode().unwrap(), OperatingMode::Measure);
    // An external reset cleared the measure bit; the live read sees it.
    assert_eq!(device.op_mode().unwrap(), OperatingMode::Standby);

    device.release_i2c().done();
}

#[test]
fn self_test_is_an_explicit_unimplemented_capability() {
    let mut device = Adxl314::new_i2c(I2cMock::new(&[]));

    assert_eq!(device.self_test(), Err(Error::NotImplemented));

    device.release_i2c().done();
}

#[test]
fn watermark_flag_comes_from_interrupt_source() {
    let expectations = [read1(0x30, 0x02), read1(0x30, 0x00)];
    let mut device = Adxl314::new_i2c(I2cMock::new(&expectations));

    assert!(device.watermark_reached().unwrap());
    assert!(!device.watermark_reached().unwrap());

    device.release_i2c().done();
}
