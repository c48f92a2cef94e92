//! Error definitions for MAX30205 driver.

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub enum Error<I2cError> {
    /// Underlying I2C transaction failed or was not acknowledged.
    I2c(I2cError),
    /// Value is not representable in the target register encoding.
    OutOfRange,
    /// Address strapping or transfer layout the device cannot accept.
    InvalidConfig,
    /// Operation requires `init` first (or the handle was deinitialized).
    NotInitialized,
}

impl<I2cError: core::fmt::Debug> core::fmt::Display for Error<I2cError> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::OutOfRange => write!(f, "value out of register range"),
            Error::InvalidConfig => write!(f, "invalid address or transfer configuration"),
            Error::NotInitialized => write!(f, "device not initialized"),
        }
    }
}

impl<I2cError: core::fmt::Debug> core::error::Error for Error<I2cError> {}
