use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::Mock as I2cMock;
use max30205_rs::registers::{decode_fault_queue, ConfigBits};
use max30205_rs::{BusTimeout, Config, DataFormat, FaultQueue, InterruptMode, Max30205, PinPolarity};

#[test]
fn default_config_matches_power_on_value() {
    assert_eq!(Config::default().to_bits(), ConfigBits::empty());
    assert_eq!(Config::from_bits(ConfigBits::empty()), Config::default());
}

#[test]
fn settings_mask_excludes_run_state_bits() {
    assert_eq!(ConfigBits::SETTINGS.bits(), 0x7E);
    assert!(!ConfigBits::SETTINGS.contains(ConfigBits::SHUTDOWN));
    assert!(!ConfigBits::SETTINGS.contains(ConfigBits::ONE_SHOT));
}

#[test]
fn fault_queue_field_mapping() {
    let cases = [
        (FaultQueue::One, 0b0000_0000, 1),
        (FaultQueue::Two, 0b0000_1000, 2),
        (FaultQueue::Four, 0b0001_0000, 4),
        (FaultQueue::Six, 0b0001_1000, 6),
    ];
    for (queue, bits, count) in cases {
        let config = Config { fault_queue: queue, ..Config::default() };
        assert_eq!(config.to_bits().bits(), bits);
        assert_eq!(decode_fault_queue(ConfigBits::from_bits_retain(bits)), bits >> 3);
        assert_eq!(queue.count(), count);
    }
}

#[test]
fn every_config_survives_bits() {
    for data_format in [DataFormat::Normal, DataFormat::Extended] {
        for bus_timeout in [BusTimeout::Enabled, BusTimeout::Disabled] {
            for interrupt_mode in [InterruptMode::Comparator, InterruptMode::Interrupt] {
                for fault_queue in [FaultQueue::One, FaultQueue::Two, FaultQueue::Four, FaultQueue::Six] {
                    for pin_polarity in [PinPolarity::ActiveLow, PinPolarity::ActiveHigh] {
                        let config = Config { data_format, bus_timeout, interrupt_mode, fault_queue, pin_polarity };
                        let bits = config.to_bits();
                        assert!(ConfigBits::SETTINGS.contains(bits));
                        assert_eq!(Config::from_bits(bits | ConfigBits::SHUTDOWN | ConfigBits::ONE_SHOT), config);
                    }
                }
            }
        }
    }
}

#[test]
fn chip_info() {
    let info = Max30205::<I2cMock, NoopDelay>::info();
    assert_eq!(info.chip_name, "Maxim Integrated MAX30205");
    assert_eq!(info.interface, "I2C");
    assert_eq!(info.driver_version, 2000);
    assert!(info.temperature_min < info.temperature_max);
}
