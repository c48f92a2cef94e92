//! Register map and constants for MAX30205.
//! Values come from the datasheet; conversion helpers are pure and usable without a bus.

use crate::data_types::{DataFormat, PinConnection};

/// 7-bit address with A2, A1 and A0 all tied to GND.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x48;

/// Register addresses (pointer byte).
pub mod addr {
    /// Temperature result, 16-bit two's complement, read-only.
    pub const TEMP: u8 = 0x00;
    /// Configuration (shutdown, OS mode/polarity, fault queue, format, timeout, one-shot).
    pub const CONFIG: u8 = 0x01;
    /// Hysteresis threshold (low alarm threshold).
    pub const THYST: u8 = 0x02;
    /// Overtemperature shutdown threshold (high alarm threshold).
    pub const TOS: u8 = 0x03;
}

/// Temperature LSB in °C, identical for normal and extended formats.
pub const TEMP_LSB_C: f32 = 0.003_906_25;
/// Offset added to every reading when the extended data format is active.
pub const EXTENDED_OFFSET_C: f32 = 64.0;
/// Worst-case conversion time for a one-shot measurement.
pub const CONVERSION_TIME_MS: u32 = 50;

/// FAULT_QUEUE field position inside CONFIG.
pub const FAULT_QUEUE_SHIFT: u8 = 3;
pub const FAULT_QUEUE_MASK: u8 = 0b11 << FAULT_QUEUE_SHIFT;

bitflags::bitflags! {
    /// CONFIG register bits (0x01).
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct ConfigBits: u8 {
        /// Bit 7: Start a single conversion while in shutdown (self-clearing).
        const ONE_SHOT    = 1 << 7;
        /// Bit 6: SMBus timeout disable (1 = timeout disabled).
        const TIMEOUT     = 1 << 6;
        /// Bit 5: Extended data format (+64 °C offset).
        const DATA_FORMAT = 1 << 5;
        /// Bits 4-3: Fault queue depth.
        const FAULT_QUEUE0 = 1 << 3;
        const FAULT_QUEUE1 = 1 << 4;
        /// Bit 2: OS output polarity (1 = active high).
        const OS_POLARITY = 1 << 2;
        /// Bit 1: OS mode (0 = comparator, 1 = interrupt).
        const COMP_INT    = 1 << 1;
        /// Bit 0: Shutdown.
        const SHUTDOWN    = 1 << 0;
    }
}

impl ConfigBits {
    /// Bits owned by [`crate::data_types::Config`]; SHUTDOWN and ONE_SHOT are run-state bits.
    pub const SETTINGS: ConfigBits = ConfigBits::TIMEOUT
        .union(ConfigBits::DATA_FORMAT)
        .union(ConfigBits::FAULT_QUEUE0)
        .union(ConfigBits::FAULT_QUEUE1)
        .union(ConfigBits::OS_POLARITY)
        .union(ConfigBits::COMP_INT);
}

/// Datasheet address table, indexed `[A2][A1][A0]` with pin order GND, VDD, SCL, SDA.
/// A2 only supports GND and VDD.
const ADDRESS_TABLE: [[[u8; 4]; 4]; 2] = [
    [
        [0x48, 0x49, 0x41, 0x40],
        [0x4A, 0x4B, 0x43, 0x42],
        [0x5A, 0x5B, 0x53, 0x52],
        [0x58, 0x59, 0x51, 0x50],
    ],
    [
        [0x4C, 0x4D, 0x45, 0x44],
        [0x4E, 0x4F, 0x47, 0x46],
        [0x5E, 0x5F, 0x57, 0x56],
        [0x5C, 0x5D, 0x55, 0x54],
    ],
];

const PIN_ORDER: [PinConnection; 4] = [
    PinConnection::Gnd,
    PinConnection::Vdd,
    PinConnection::Scl,
    PinConnection::Sda,
];

fn pin_index(pin: PinConnection) -> usize {
    match pin {
        PinConnection::Gnd => 0,
        PinConnection::Vdd => 1,
        PinConnection::Scl => 2,
        PinConnection::Sda => 3,
    }
}

/// Resolve address-pin strapping to a 7-bit address. `None` if A2 is tied to SCL or SDA.
pub fn pins_to_address(a2: PinConnection, a1: PinConnection, a0: PinConnection) -> Option<u8> {
    let a2 = match a2 {
        PinConnection::Gnd => 0,
        PinConnection::Vdd => 1,
        PinConnection::Scl | PinConnection::Sda => return None,
    };
    Some(ADDRESS_TABLE[a2][pin_index(a1)][pin_index(a0)])
}

/// Reverse lookup of [`pins_to_address`]. Returns `(a2, a1, a0)`.
pub fn address_to_pins(address: u8) -> Option<(PinConnection, PinConnection, PinConnection)> {
    for (i2, plane) in ADDRESS_TABLE.iter().enumerate() {
        for (i1, row) in plane.iter().enumerate() {
            for (i0, &candidate) in row.iter().enumerate() {
                if candidate == address {
                    return Some((PIN_ORDER[i2], PIN_ORDER[i1], PIN_ORDER[i0]));
                }
            }
        }
    }
    None
}

/// Convert a temperature register code to °C.
pub fn raw_to_celsius(raw: i16, format: DataFormat) -> f32 {
    let c = raw as f32 * TEMP_LSB_C;
    match format {
        DataFormat::Normal => c,
        DataFormat::Extended => c + EXTENDED_OFFSET_C,
    }
}

/// Convert °C to a temperature register code, rounding to the nearest LSB.
/// Returns `None` for NaN or values outside the 16-bit register range.
pub fn celsius_to_raw(celsius: f32, format: DataFormat) -> Option<i16> {
    let c = match format {
        DataFormat::Normal => celsius,
        DataFormat::Extended => celsius - EXTENDED_OFFSET_C,
    };
    let scaled = c / TEMP_LSB_C;
    // NaN fails both comparisons. -32768.5 would round away from zero past i16::MIN.
    if !(scaled > i16::MIN as f32 - 0.5 && scaled < i16::MAX as f32 + 0.5) {
        return None;
    }
    // Round half away from zero on the exact fraction.
    let whole = scaled as i32;
    let frac = scaled - whole as f32;
    let rounded = if frac >= 0.5 {
        whole + 1
    } else if frac <= -0.5 {
        whole - 1
    } else {
        whole
    };
    i16::try_from(rounded).ok()
}

/// Decode the two FAULT_QUEUE bits (0..=3).
pub fn decode_fault_queue(bits: ConfigBits) -> u8 {
    (bits.bits() & FAULT_QUEUE_MASK) >> FAULT_QUEUE_SHIFT
}
