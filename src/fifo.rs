//! FIFO batch drain algorithm.
//!
//! The device buffers up to 32 synchronized (x, y, z) entries. Draining pops
//! one entry per 6-byte read of the data registers; the FIFO needs 5 µs of
//! settle time between successive pops, so a fixed delay follows every read.
//! Entries are never coalesced into one multi-entry transfer, which also
//! keeps each transaction inside the handle's scratch buffer.

use embedded_hal::delay::DelayNs;

use crate::error::Result;
use crate::interface::Adxl314Interface;
use crate::registers::{
    FifoStatus, BYTES_PER_ENTRY, MAX_FIFO_ENTRIES, REG_DATA_AXIS, REG_FIFO_STATUS,
};
use crate::sample::{Acceleration, RawSample};

/// Settle time between successive FIFO pops (device timing requirement).
const FIFO_POP_SETTLE_US: u32 = 5;

/// Reads the number of FIFO entries currently buffered.
///
/// The raw status field is six bits wide; the drain functions clamp it to
/// the 32 usable entries.
pub fn entry_count<IFACE>(interface: &mut IFACE) -> Result<u8, IFACE::Error>
where
    IFACE: Adxl314Interface,
{
    let status = FifoStatus::from(interface.read_register(REG_FIFO_STATUS)?);
    Ok(status.entries())
}

/// Drains buffered entries into `out` and returns how many were read.
///
/// Reads `min(buffered, out.len(), 32)` entries, waiting the settle delay
/// after each pop. All-or-nothing: any failed read aborts the whole batch
/// and `out` must be discarded by the caller.
pub fn drain_raw<IFACE, D>(
    interface: &mut IFACE,
    delay: &mut D,
    out: &mut [RawSample],
) -> Result<usize, IFACE::Error>
where
    IFACE: Adxl314Interface,
    D: DelayNs,
{
    let buffered = entry_count(interface)? as usize;
    let count = buffered.min(MAX_FIFO_ENTRIES).min(out.len());

    for slot in out[..count].iter_mut() {
        *slot = pop_entry(interface, delay)?;
    }

    Ok(count)
}

/// Drains buffered entries, mapping each through the conversion pipeline.
///
/// Bus behavior and error propagation are identical to [`drain_raw`].
pub fn drain_converted<IFACE, D>(
    interface: &mut IFACE,
    delay: &mut D,
    out: &mut [Acceleration],
) -> Result<usize, IFACE::Error>
where
    IFACE: Adxl314Interface,
    D: DelayNs,
{
    let buffered = entry_count(interface)? as usize;
    let count = buffered.min(MAX_FIFO_ENTRIES).min(out.len());

    for slot in out[..count].iter_mut() {
        *slot = pop_entry(interface, delay)?.to_physical();
    }

    Ok(count)
}

/// Pops one entry off the FIFO and waits out the settle time.
fn pop_entry<IFACE, D>(interface: &mut IFACE, delay: &mut D) -> Result<RawSample, IFACE::Error>
where
    IFACE: Adxl314Interface,
    D: DelayNs,
{
    let mut bytes = [0u8; BYTES_PER_ENTRY];
    interface.read_many(REG_DATA_AXIS, &mut bytes)?;
    delay.delay_us(FIFO_POP_SETTLE_US);
    Ok(RawSample::from_bytes(&bytes))
}
