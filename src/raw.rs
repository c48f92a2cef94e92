//! Raw register escape hatch for diagnostics.

use crate::driver::Max30205;
use crate::error::Error;

/// Unchecked register access. Values are written as given; a CONFIG write also refreshes the
/// driver's shadow so later conversions use the new data format.
pub trait RegisterAccess {
    type Error;

    /// Write `data` starting at `reg` (at most 7 bytes).
    fn set_reg(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error>;
    /// Fill `buf` starting at `reg`.
    fn get_reg(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

impl<I2C, D> RegisterAccess for Max30205<I2C, D>
where
    I2C: embedded_hal::i2c::I2c,
    D: embedded_hal::delay::DelayNs,
{
    type Error = Error<I2C::Error>;

    fn set_reg(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.set_reg_inner(reg, data)
    }

    fn get_reg(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.get_reg_inner(reg, buf)
    }
}
