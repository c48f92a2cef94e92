//! Data types for the MAX30205 driver, mapped from the datasheet bitfields.

use crate::registers::{pins_to_address, address_to_pins, ConfigBits, FAULT_QUEUE_SHIFT};

/// Connection of an address-select pin.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PinConnection {
    Gnd,
    Vdd,
    Scl,
    Sda,
}

/// Strapping of the A2/A1/A0 pins. A2 only supports GND or VDD.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AddressPins {
    pub a2: PinConnection,
    pub a1: PinConnection,
    pub a0: PinConnection,
}

impl AddressPins {
    pub const fn new(a2: PinConnection, a1: PinConnection, a0: PinConnection) -> Self {
        Self { a2, a1, a0 }
    }

    /// 7-bit bus address selected by this strapping, `None` if the device cannot decode it.
    pub fn address(&self) -> Option<u8> {
        pins_to_address(self.a2, self.a1, self.a0)
    }

    /// Strapping that produces the given 7-bit address.
    pub fn from_address(address: u8) -> Option<Self> {
        address_to_pins(address).map(|(a2, a1, a0)| Self { a2, a1, a0 })
    }
}

impl Default for AddressPins {
    fn default() -> Self {
        Self::new(PinConnection::Gnd, PinConnection::Gnd, PinConnection::Gnd)
    }
}

/// Temperature register encoding.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DataFormat {
    /// Two's complement, 0 °C at code 0.
    #[default]
    Normal,
    /// Two's complement with +64 °C offset, extends the upper range to ~191 °C.
    Extended,
}

/// SMBus timeout (resets the interface if SDA is held low > 50 ms).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BusTimeout {
    #[default]
    Enabled,
    Disabled,
}

/// OS output behavior.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum InterruptMode {
    /// OS follows the threshold comparison with hysteresis.
    #[default]
    Comparator,
    /// OS latches until any register is read.
    Interrupt,
}

/// Consecutive faults required before OS asserts.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FaultQueue {
    #[default]
    One,
    Two,
    Four,
    Six,
}

impl FaultQueue {
    /// Number of consecutive faults this setting represents.
    pub fn count(self) -> u8 {
        match self {
            FaultQueue::One => 1,
            FaultQueue::Two => 2,
            FaultQueue::Four => 4,
            FaultQueue::Six => 6,
        }
    }

    pub(crate) fn from_field(field: u8) -> Self {
        match field & 0b11 {
            0b00 => FaultQueue::One,
            0b01 => FaultQueue::Two,
            0b10 => FaultQueue::Four,
            _ => FaultQueue::Six,
        }
    }

    pub(crate) fn field(self) -> u8 {
        match self {
            FaultQueue::One => 0b00,
            FaultQueue::Two => 0b01,
            FaultQueue::Four => 0b10,
            FaultQueue::Six => 0b11,
        }
    }
}

/// OS output pin polarity.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PinPolarity {
    #[default]
    ActiveLow,
    ActiveHigh,
}

/// Driver lifecycle state.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DeviceState {
    #[default]
    Uninitialized,
    Idle,
    ContinuousReading,
}

/// Typed view of the CONFIG register settings. Default matches the power-on value (0x00).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Config {
    pub data_format: DataFormat,
    pub bus_timeout: BusTimeout,
    pub interrupt_mode: InterruptMode,
    pub fault_queue: FaultQueue,
    pub pin_polarity: PinPolarity,
}

impl Config {
    /// Decode settings from a CONFIG register value; SHUTDOWN and ONE_SHOT are ignored.
    pub fn from_bits(bits: ConfigBits) -> Self {
        Self {
            data_format: if bits.contains(ConfigBits::DATA_FORMAT) {
                DataFormat::Extended
            } else {
                DataFormat::Normal
            },
            bus_timeout: if bits.contains(ConfigBits::TIMEOUT) {
                BusTimeout::Disabled
            } else {
                BusTimeout::Enabled
            },
            interrupt_mode: if bits.contains(ConfigBits::COMP_INT) {
                InterruptMode::Interrupt
            } else {
                InterruptMode::Comparator
            },
            fault_queue: FaultQueue::from_field(crate::registers::decode_fault_queue(bits)),
            pin_polarity: if bits.contains(ConfigBits::OS_POLARITY) {
                PinPolarity::ActiveHigh
            } else {
                PinPolarity::ActiveLow
            },
        }
    }

    /// Encode settings into CONFIG bits (only [`ConfigBits::SETTINGS`] are touched).
    pub fn to_bits(&self) -> ConfigBits {
        let mut bits = ConfigBits::from_bits_retain(self.fault_queue.field() << FAULT_QUEUE_SHIFT);
        if matches!(self.data_format, DataFormat::Extended) {
            bits |= ConfigBits::DATA_FORMAT;
        }
        if matches!(self.bus_timeout, BusTimeout::Disabled) {
            bits |= ConfigBits::TIMEOUT;
        }
        if matches!(self.interrupt_mode, InterruptMode::Interrupt) {
            bits |= ConfigBits::COMP_INT;
        }
        if matches!(self.pin_polarity, PinPolarity::ActiveHigh) {
            bits |= ConfigBits::OS_POLARITY;
        }
        bits
    }
}

/// One temperature sample.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Register code as read from TEMP.
    pub raw: i16,
    /// Decoded value using the data format active at read time.
    pub celsius: f32,
}

/// Static chip description.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChipInfo {
    pub chip_name: &'static str,
    pub manufacturer_name: &'static str,
    pub interface: &'static str,
    pub supply_voltage_min_v: f32,
    pub supply_voltage_max_v: f32,
    pub max_current_ma: f32,
    pub temperature_min: f32,
    pub temperature_max: f32,
    pub driver_version: u32,
}

pub const CHIP_INFO: ChipInfo = ChipInfo {
    chip_name: "Maxim Integrated MAX30205",
    manufacturer_name: "Maxim Integrated",
    interface: "I2C",
    supply_voltage_min_v: 2.7,
    supply_voltage_max_v: 3.3,
    max_current_ma: 20.0,
    temperature_min: 0.0,
    temperature_max: 50.0,
    driver_version: 2000,
};
