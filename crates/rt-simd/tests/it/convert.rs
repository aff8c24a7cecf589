use crate::assert_error;
use simdjs_rt_simd::{ErrorKind, SimdType, SimdValue};

const NAN_TO_INTEGER: &str = "NaN cannot be converted to an integer lane";
const OUT_OF_RANGE: &str = "value is out of range for the lane type";
const INVALID_SOURCE: &str = "invalid source type for lane conversion";

#[test]
fn float_to_integer_truncates() {
    let v = SimdValue::float32x4([1.9, -1.9, -0.0, 2147483520.0]);
    let converted = SimdType::Int32x4
        .convert_from(SimdType::Float32x4, &v)
        .unwrap();
    assert_eq!(converted.to_int32x4(), Some([1, -1, 0, 2147483520]));

    let v = SimdValue::float32x4([0.5, 4294967040.0, 1.0, 2.0]);
    let converted = SimdType::Uint32x4
        .convert_from(SimdType::Float32x4, &v)
        .unwrap();
    assert_eq!(converted.to_uint32x4(), Some([0, 4294967040, 1, 2]));
}

#[test]
fn float_to_integer_range_errors() {
    let ty = SimdType::Int32x4;
    let nan = SimdValue::float32x4([1.0, f32::NAN, 1.0, 1.0]);
    assert_error(
        ty.convert_from(SimdType::Float32x4, &nan),
        ErrorKind::Range,
        NAN_TO_INTEGER,
    );

    let big = SimdValue::float32x4([3e9, 0.0, 0.0, 0.0]);
    assert_error(
        ty.convert_from(SimdType::Float32x4, &big),
        ErrorKind::Range,
        OUT_OF_RANGE,
    );

    let negative = SimdValue::float32x4([-1.0, 0.0, 0.0, 0.0]);
    assert_error(
        SimdType::Uint32x4.convert_from(SimdType::Float32x4, &negative),
        ErrorKind::Range,
        OUT_OF_RANGE,
    );

    let infinite = SimdValue::float32x4([f32::INFINITY, 0.0, 0.0, 0.0]);
    assert_error(
        ty.convert_from(SimdType::Float32x4, &infinite),
        ErrorKind::Range,
        OUT_OF_RANGE,
    );
}

#[test]
fn integer_to_integer() {
    let v = SimdValue::uint32x4([5, 0, 7, 2147483647]);
    let converted = SimdType::Int32x4
        .convert_from(SimdType::Uint32x4, &v)
        .unwrap();
    assert_eq!(converted.to_int32x4(), Some([5, 0, 7, 2147483647]));

    let v = SimdValue::uint32x4([u32::MAX, 0, 0, 0]);
    assert_error(
        SimdType::Int32x4.convert_from(SimdType::Uint32x4, &v),
        ErrorKind::Range,
        OUT_OF_RANGE,
    );

    let v = SimdValue::int16x8([-1, 0, 0, 0, 0, 0, 0, 0]);
    assert_error(
        SimdType::Uint16x8.convert_from(SimdType::Int16x8, &v),
        ErrorKind::Range,
        OUT_OF_RANGE,
    );

    let v = SimdValue::uint8x16([200; 16]);
    assert_error(
        SimdType::Int8x16.convert_from(SimdType::Uint8x16, &v),
        ErrorKind::Range,
        OUT_OF_RANGE,
    );
}

#[test]
fn integer_to_float() {
    let v = SimdValue::uint32x4([u32::MAX, 1, 0, 16777217]);
    let converted = SimdType::Float32x4
        .convert_from(SimdType::Uint32x4, &v)
        .unwrap();
    assert_eq!(
        converted.to_float32x4(),
        Some([4294967296.0, 1.0, 0.0, 16777216.0])
    );
}

#[test]
fn conversion_guard() {
    let v = SimdValue::int16x8([0; 8]);
    assert_error(
        SimdType::Int32x4.convert_from(SimdType::Int16x8, &v),
        ErrorKind::Type,
        INVALID_SOURCE,
    );

    let v = SimdValue::int32x4([0; 4]);
    assert_error(
        SimdType::Int32x4.convert_from(SimdType::Int32x4, &v),
        ErrorKind::Type,
        INVALID_SOURCE,
    );
    assert_error(
        SimdType::Bool32x4.convert_from(SimdType::Int32x4, &v),
        ErrorKind::Type,
        INVALID_SOURCE,
    );

    assert!(SimdType::Float32x4.can_convert_from(SimdType::Uint32x4));
    assert!(!SimdType::Float32x4.can_convert_from(SimdType::Bool32x4));
    assert!(!SimdType::Uint8x16.can_convert_from(SimdType::Int16x8));

    assert_error(
        SimdType::Float32x4.convert_from(SimdType::Uint32x4, &v),
        ErrorKind::Type,
        "SIMD type expected",
    );
}

#[test]
fn bits_round_trip() {
    let nan = f32::from_bits(0x7FC0_1234);
    let v = SimdValue::float32x4([1.0, -0.0, nan, f32::NEG_INFINITY]);
    let bits = SimdType::Int32x4
        .convert_bits_from(SimdType::Float32x4, &v)
        .unwrap();
    assert_eq!(
        bits.to_int32x4(),
        Some([
            0x3F80_0000,
            i32::MIN,
            0x7FC0_1234,
            0xFF80_0000u32 as i32
        ])
    );

    let back = SimdType::Float32x4
        .convert_bits_from(SimdType::Int32x4, &bits)
        .unwrap();
    let lanes = back.to_float32x4().unwrap().map(f32::to_bits);
    assert_eq!(lanes, v.to_float32x4().unwrap().map(f32::to_bits));
}

#[test]
fn bits_use_little_endian_lane_order() {
    let v = SimdValue::int32x4([0x0403_0201, 0x0807_0605, 0, -1]);
    let bytes = SimdType::Int8x16
        .convert_bits_from(SimdType::Int32x4, &v)
        .unwrap();
    assert_eq!(
        bytes.to_int8x16(),
        Some([1, 2, 3, 4, 5, 6, 7, 8, 0, 0, 0, 0, -1, -1, -1, -1])
    );

    let halves = SimdType::Uint16x8
        .convert_bits_from(SimdType::Int8x16, &bytes)
        .unwrap();
    assert_eq!(
        halves.to_uint16x8(),
        Some([0x0201, 0x0403, 0x0605, 0x0807, 0, 0, 0xFFFF, 0xFFFF])
    );
}

#[test]
fn bits_reject_bool_vectors() {
    let v = SimdValue::bool32x4([true; 4]);
    assert_error(
        SimdType::Int32x4.convert_bits_from(SimdType::Bool32x4, &v),
        ErrorKind::Type,
        "operation is not supported by this SIMD type",
    );
}

#[test]
fn bits_reject_same_type() {
    let v = SimdValue::float32x4([1.0; 4]);
    assert_error(
        SimdType::Float32x4.convert_bits_from(SimdType::Float32x4, &v),
        ErrorKind::Type,
        "invalid source type for lane conversion",
    );
}
