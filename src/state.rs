//! Cached mirror of the device configuration owned by each handle.

use crate::params::{FifoMode, OperatingMode, OutputDataRate};

/// Last device-accurate values of the writable configuration fields.
///
/// Hydrated best-effort at init by direct register reads; a failed hydration
/// read leaves the field at its zero default. Afterwards every field is
/// updated strictly after its corresponding register write succeeds, so a
/// failed write leaves the cache at the previous device-accurate value.
///
/// There is no process-wide shadow state; the cache lives inside the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceState {
    /// Operating mode as last set through this driver. The authoritative
    /// value is the live register; see [`Adxl314::op_mode`](crate::Adxl314::op_mode).
    pub op_mode: OperatingMode,
    /// Output data rate selection.
    pub odr: OutputDataRate,
    /// Per-axis offset bytes, indexed by [`Axis`](crate::params::Axis).
    pub offsets: [u8; 3],
    /// FIFO operating mode.
    pub fifo_mode: FifoMode,
    /// FIFO samples threshold (0..=0x60).
    pub fifo_samples: u8,
    /// Activity threshold byte (780 mg/LSB).
    pub activity_threshold: u8,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            op_mode: OperatingMode::Standby,
            odr: OutputDataRate::Od6_25Hz,
            offsets: [0; 3],
            fifo_mode: FifoMode::Bypass,
            fifo_samples: 0,
            activity_threshold: 0,
        }
    }
}
