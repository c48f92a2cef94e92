use max30205_rs::data_types::DataFormat;
use max30205_rs::registers::{celsius_to_raw, raw_to_celsius, EXTENDED_OFFSET_C, TEMP_LSB_C};

#[test]
fn every_code_survives_decode_then_encode() {
    for format in [DataFormat::Normal, DataFormat::Extended] {
        for raw in i16::MIN..=i16::MAX {
            let c = raw_to_celsius(raw, format);
            assert_eq!(celsius_to_raw(c, format), Some(raw), "raw {raw} in {format:?}");
        }
    }
}

#[test]
fn normal_format_known_points() {
    assert_eq!(raw_to_celsius(0x2580, DataFormat::Normal), 37.5);
    assert_eq!(raw_to_celsius(0, DataFormat::Normal), 0.0);
    assert_eq!(raw_to_celsius(-1, DataFormat::Normal), -TEMP_LSB_C);
    assert_eq!(raw_to_celsius(i16::MAX, DataFormat::Normal), 127.996_093_75);
}

#[test]
fn extended_format_adds_offset() {
    assert_eq!(raw_to_celsius(0, DataFormat::Extended), EXTENDED_OFFSET_C);
    // 37.5 °C in extended format: (37.5 - 64) * 256 = -6784 = 0xE580
    assert_eq!(celsius_to_raw(37.5, DataFormat::Extended), Some(0xE580u16 as i16));
    assert_eq!(raw_to_celsius(0xE580u16 as i16, DataFormat::Extended), 37.5);
    assert_eq!(celsius_to_raw(150.0, DataFormat::Extended), Some(22_016));
}

#[test]
fn encode_rounds_to_nearest_lsb() {
    assert_eq!(celsius_to_raw(37.501, DataFormat::Normal), Some(9_600));
    assert_eq!(celsius_to_raw(37.503, DataFormat::Normal), Some(9_601));
    assert_eq!(celsius_to_raw(-0.003, DataFormat::Normal), Some(-1));
}

#[test]
fn encode_just_below_half_lsb_rounds_down() {
    let below_half = 0.499_999_97 * TEMP_LSB_C;
    assert_eq!(celsius_to_raw(below_half, DataFormat::Normal), Some(0));
    assert_eq!(celsius_to_raw(-below_half, DataFormat::Normal), Some(0));
    assert_eq!(celsius_to_raw(0.5 * TEMP_LSB_C, DataFormat::Normal), Some(1));
    assert_eq!(celsius_to_raw(-0.5 * TEMP_LSB_C, DataFormat::Normal), Some(-1));
}

#[test]
fn encode_rejects_unrepresentable_values() {
    assert_eq!(celsius_to_raw(128.0, DataFormat::Normal), None);
    assert_eq!(celsius_to_raw(-129.0, DataFormat::Normal), None);
    assert_eq!(celsius_to_raw(192.0, DataFormat::Extended), None);
    assert_eq!(celsius_to_raw(-65.0, DataFormat::Extended), None);
    assert_eq!(celsius_to_raw(f32::NAN, DataFormat::Normal), None);
    assert_eq!(celsius_to_raw(f32::INFINITY, DataFormat::Extended), None);
    assert_eq!(celsius_to_raw(-128.0, DataFormat::Normal), Some(i16::MIN));
    assert_eq!(celsius_to_raw(-128.0 - 0.5 * TEMP_LSB_C, DataFormat::Normal), None);
}
