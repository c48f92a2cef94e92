//! OS (over-temperature) output configuration.
//!
//! Thresholds share the TEMP encoding, so the °C accessors follow the data format that is
//! active when they are called. Switching format after writing a threshold changes the
//! temperature the stored code represents.

use crate::data_types::{FaultQueue, InterruptMode, PinPolarity};
use crate::driver::Max30205;
use crate::error::Error;
use crate::registers::addr;

/// Alarm configuration capability: fault queue, OS mode and polarity, TOS/THYST thresholds.
pub trait InterruptControl {
    type Error;

    fn set_fault_queue(&mut self, queue: FaultQueue) -> Result<(), Self::Error>;
    fn get_fault_queue(&mut self) -> Result<FaultQueue, Self::Error>;

    fn set_interrupt_mode(&mut self, mode: InterruptMode) -> Result<(), Self::Error>;
    fn get_interrupt_mode(&mut self) -> Result<InterruptMode, Self::Error>;

    fn set_pin_polarity(&mut self, polarity: PinPolarity) -> Result<(), Self::Error>;
    fn get_pin_polarity(&mut self) -> Result<PinPolarity, Self::Error>;

    /// Write TOS in °C. Fails with `OutOfRange` if the value has no register code.
    fn set_interrupt_high_threshold(&mut self, celsius: f32) -> Result<(), Self::Error>;
    fn get_interrupt_high_threshold(&mut self) -> Result<f32, Self::Error>;
    /// Write THYST in °C. Fails with `OutOfRange` if the value has no register code.
    fn set_interrupt_low_threshold(&mut self, celsius: f32) -> Result<(), Self::Error>;
    fn get_interrupt_low_threshold(&mut self) -> Result<f32, Self::Error>;

    fn set_interrupt_high_threshold_raw(&mut self, raw: i16) -> Result<(), Self::Error>;
    fn get_interrupt_high_threshold_raw(&mut self) -> Result<i16, Self::Error>;
    fn set_interrupt_low_threshold_raw(&mut self, raw: i16) -> Result<(), Self::Error>;
    fn get_interrupt_low_threshold_raw(&mut self) -> Result<i16, Self::Error>;
}

impl<I2C, D> InterruptControl for Max30205<I2C, D>
where
    I2C: embedded_hal::i2c::I2c,
    D: embedded_hal::delay::DelayNs,
{
    type Error = Error<I2C::Error>;

    fn set_fault_queue(&mut self, queue: FaultQueue) -> Result<(), Self::Error> {
        self.set_fault_queue_inner(queue)
    }

    fn get_fault_queue(&mut self) -> Result<FaultQueue, Self::Error> {
        Ok(self.get_config_inner()?.fault_queue)
    }

    fn set_interrupt_mode(&mut self, mode: InterruptMode) -> Result<(), Self::Error> {
        self.set_interrupt_mode_inner(mode)
    }

    fn get_interrupt_mode(&mut self) -> Result<InterruptMode, Self::Error> {
        Ok(self.get_config_inner()?.interrupt_mode)
    }

    fn set_pin_polarity(&mut self, polarity: PinPolarity) -> Result<(), Self::Error> {
        self.set_pin_polarity_inner(polarity)
    }

    fn get_pin_polarity(&mut self) -> Result<PinPolarity, Self::Error> {
        Ok(self.get_config_inner()?.pin_polarity)
    }

    fn set_interrupt_high_threshold(&mut self, celsius: f32) -> Result<(), Self::Error> {
        self.write_threshold_celsius(addr::TOS, celsius)
    }

    fn get_interrupt_high_threshold(&mut self) -> Result<f32, Self::Error> {
        self.read_threshold_celsius(addr::TOS)
    }

    fn set_interrupt_low_threshold(&mut self, celsius: f32) -> Result<(), Self::Error> {
        self.write_threshold_celsius(addr::THYST, celsius)
    }

    fn get_interrupt_low_threshold(&mut self) -> Result<f32, Self::Error> {
        self.read_threshold_celsius(addr::THYST)
    }

    fn set_interrupt_high_threshold_raw(&mut self, raw: i16) -> Result<(), Self::Error> {
        self.write_threshold(addr::TOS, raw)
    }

    fn get_interrupt_high_threshold_raw(&mut self) -> Result<i16, Self::Error> {
        self.read_threshold(addr::TOS)
    }

    fn set_interrupt_low_threshold_raw(&mut self, raw: i16) -> Result<(), Self::Error> {
        self.write_threshold(addr::THYST, raw)
    }

    fn get_interrupt_low_threshold_raw(&mut self) -> Result<i16, Self::Error> {
        self.read_threshold(addr::THYST)
    }
}
