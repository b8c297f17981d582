//! Error handling primitives for the ADXL314 driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface. Never retried here.
    Comm(E),
    /// The identity register did not return the expected device ID byte.
    IdentityMismatch,
    /// A parameter fell outside its enumerated valid range.
    InvalidArgument,
    /// The requested capability is not implemented by this driver.
    NotImplemented,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Comm(err)
    }
}
