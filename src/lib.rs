//! MAX30205 Rust Driver
//!
//! `no_std` driver for the Maxim MAX30205 human body temperature sensor over I2C,
//! built on `embedded-hal` 1.0 with an optional async mirror and `defmt` support.
//!
//! The core [`Max30205`] handle covers lifecycle, one-shot and continuous reads and the
//! data-format/bus-timeout settings. Alarm configuration lives in the
//! [`InterruptControl`] trait and raw register access in [`RegisterAccess`].

#![no_std]

#[macro_use]
mod fmt;

pub mod data_types;
pub mod driver;
pub mod error;
pub mod interrupt;
pub mod raw;
pub mod registers;

pub use data_types::{
    AddressPins, BusTimeout, Config, DataFormat, DeviceState, FaultQueue, InterruptMode, PinConnection,
    PinPolarity, Reading,
};
pub use driver::Max30205;
pub use error::Error;
pub use interrupt::InterruptControl;
pub use raw::RegisterAccess;
pub use registers::DEFAULT_I2C_ADDRESS;
