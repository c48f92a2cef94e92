#![cfg(not(feature = "async"))]

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use max30205_rs::{DataFormat, Error, Max30205, RegisterAccess};

const ADDR: u8 = 0x48;

fn finish(driver: Max30205<I2cMock, NoopDelay>) {
    let (mut i2c, _) = driver.free();
    i2c.done();
}

#[test]
fn get_reg_reads_burst() {
    let expectations = [
        I2cTrans::write_read(ADDR, vec![0x01], vec![0x00]),
        I2cTrans::write_read(ADDR, vec![0x00], vec![0x12, 0x34]),
    ];
    let mut driver = Max30205::new(I2cMock::new(&expectations), NoopDelay::new());
    driver.init().unwrap();
    let mut buf = [0u8; 2];
    driver.get_reg(0x00, &mut buf).unwrap();
    assert_eq!(buf, [0x12, 0x34]);
    finish(driver);
}

#[test]
fn config_write_refreshes_data_format() {
    let expectations = [
        I2cTrans::write_read(ADDR, vec![0x01], vec![0x00]),
        I2cTrans::write(ADDR, vec![0x01, 0x20]),
        I2cTrans::write_read(ADDR, vec![0x01], vec![0x00]),
    ];
    let mut driver = Max30205::new(I2cMock::new(&expectations), NoopDelay::new());
    driver.init().unwrap();
    driver.set_reg(0x01, &[0x20]).unwrap();
    assert_eq!(driver.data_format(), DataFormat::Extended);
    let mut conf = [0u8; 1];
    driver.get_reg(0x01, &mut conf).unwrap();
    assert_eq!(driver.data_format(), DataFormat::Normal);
    finish(driver);
}

#[test]
fn oversized_write_is_rejected() {
    let expectations = [I2cTrans::write_read(ADDR, vec![0x01], vec![0x00])];
    let mut driver = Max30205::new(I2cMock::new(&expectations), NoopDelay::new());
    driver.init().unwrap();
    assert!(matches!(driver.set_reg(0x02, &[0u8; 8]), Err(Error::OutOfRange)));
    finish(driver);
}

#[test]
fn raw_access_requires_init() {
    let mut driver = Max30205::new(I2cMock::new(&[]), NoopDelay::new());
    let mut buf = [0u8; 2];
    assert!(matches!(driver.get_reg(0x00, &mut buf), Err(Error::NotInitialized)));
    assert!(matches!(driver.set_reg(0x03, &[0x50, 0x00]), Err(Error::NotInitialized)));
    finish(driver);
}
