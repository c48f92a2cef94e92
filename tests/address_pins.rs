use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::Mock as I2cMock;
use max30205_rs::{AddressPins, Error, Max30205, PinConnection, DEFAULT_I2C_ADDRESS};

const ALL: [PinConnection; 4] = [
    PinConnection::Gnd,
    PinConnection::Vdd,
    PinConnection::Scl,
    PinConnection::Sda,
];

fn all_valid_pins() -> impl Iterator<Item = AddressPins> {
    [PinConnection::Gnd, PinConnection::Vdd].into_iter().flat_map(|a2| {
        ALL.into_iter()
            .flat_map(move |a1| ALL.into_iter().map(move |a0| AddressPins::new(a2, a1, a0)))
    })
}

#[test]
fn set_then_get_addr_pin_roundtrips_all_32() {
    let mut driver = Max30205::new(I2cMock::new(&[]), NoopDelay::new());
    let mut seen = Vec::new();
    for pins in all_valid_pins() {
        driver.set_addr_pin(pins).unwrap();
        assert_eq!(driver.get_addr_pin(), pins);
        assert_eq!(AddressPins::from_address(driver.address()), Some(pins));
        assert!((0x40..=0x5F).contains(&driver.address()));
        seen.push(driver.address());
    }
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 32);
    let (mut i2c, _) = driver.free();
    i2c.done();
}

#[test]
fn datasheet_addresses() {
    let gnd = PinConnection::Gnd;
    let vdd = PinConnection::Vdd;
    assert_eq!(AddressPins::default().address(), Some(DEFAULT_I2C_ADDRESS));
    assert_eq!(AddressPins::new(gnd, gnd, vdd).address(), Some(0x49));
    assert_eq!(AddressPins::new(gnd, gnd, PinConnection::Sda).address(), Some(0x40));
    assert_eq!(AddressPins::new(vdd, vdd, vdd).address(), Some(0x4F));
    assert_eq!(AddressPins::new(vdd, PinConnection::Sda, PinConnection::Sda).address(), Some(0x54));
}

#[test]
fn a2_cannot_be_tied_to_bus_lines() {
    let mut driver = Max30205::new(I2cMock::new(&[]), NoopDelay::new());
    for a2 in [PinConnection::Scl, PinConnection::Sda] {
        let pins = AddressPins::new(a2, PinConnection::Gnd, PinConnection::Gnd);
        assert_eq!(pins.address(), None);
        assert!(matches!(driver.set_addr_pin(pins), Err(Error::InvalidConfig)));
    }
    assert_eq!(driver.address(), DEFAULT_I2C_ADDRESS);
    assert_eq!(driver.get_addr_pin(), AddressPins::default());
    assert_eq!(AddressPins::from_address(0x60), None);
    let (mut i2c, _) = driver.free();
    i2c.done();
}
