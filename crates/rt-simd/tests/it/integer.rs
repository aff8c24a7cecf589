use crate::assert_error;
use simdjs_rt_simd::{ErrorKind, SimdType, SimdValue, Value};

#[test]
fn saturating_boundaries() {
    let ty = SimdType::Int8x16;
    let max = SimdValue::int8x16([127; 16]);
    let min = SimdValue::int8x16([-128; 16]);
    let one = SimdValue::int8x16([1; 16]);
    let minus_one = SimdValue::int8x16([-1; 16]);
    assert_eq!(ty.add_saturate(&max, &one).unwrap().to_int8x16(), Some([127; 16]));
    assert_eq!(ty.add_saturate(&min, &minus_one).unwrap().to_int8x16(), Some([-128; 16]));
    assert_eq!(ty.sub_saturate(&min, &one).unwrap().to_int8x16(), Some([-128; 16]));
}

#[test]
fn unsigned_saturation() {
    let ty = SimdType::Uint32x4;
    let a = SimdValue::uint32x4([u32::MAX, 10, 0, 5]);
    let b = SimdValue::uint32x4([1, 20, 1, 5]);
    assert_eq!(
        ty.add_saturate(&a, &b).unwrap().to_uint32x4(),
        Some([u32::MAX, 30, 1, 10])
    );
    assert_eq!(
        ty.sub_saturate(&a, &b).unwrap().to_uint32x4(),
        Some([u32::MAX - 1, 0, 0, 0])
    );

    let ty = SimdType::Uint8x16;
    let a = SimdValue::uint8x16([250; 16]);
    let b = SimdValue::uint8x16([10; 16]);
    assert_eq!(ty.add_saturate(&a, &b).unwrap().to_uint8x16(), Some([255; 16]));
}

#[test]
fn saturation_requires_integers() {
    let f = SimdValue::float32x4([1.0; 4]);
    assert_error(
        SimdType::Float32x4.add_saturate(&f, &f),
        ErrorKind::Type,
        "operation is not supported by this SIMD type",
    );
}

#[test]
fn shift_amounts_are_masked() {
    let ty = SimdType::Int32x4;
    let a = SimdValue::int32x4([1, -1, 3, i32::MIN]);
    let by_35 = ty.shift_left_by_scalar(&a, &Value::Number(35.0)).unwrap();
    let by_3 = ty.shift_left_by_scalar(&a, &Value::Number(3.0)).unwrap();
    assert_eq!(by_35.to_int32x4(), by_3.to_int32x4());
    assert_eq!(by_3.to_int32x4(), Some([8, -8, 24, 0]));

    let by_negative = ty.shift_left_by_scalar(&a, &Value::Number(-1.0)).unwrap();
    assert_eq!(by_negative.to_int32x4(), Some([i32::MIN, i32::MIN, i32::MIN, 0]));
}

#[test]
fn right_shifts() {
    let signed = SimdValue::int8x16([-128; 16]);
    let shifted = SimdType::Int8x16
        .shift_right_by_scalar(&signed, &Value::Number(2.0))
        .unwrap();
    assert_eq!(shifted.to_int8x16(), Some([-32; 16]));

    let unsigned = SimdValue::uint8x16([128; 16]);
    let shifted = SimdType::Uint8x16
        .shift_right_by_scalar(&unsigned, &Value::Number(2.0))
        .unwrap();
    assert_eq!(shifted.to_uint8x16(), Some([32; 16]));

    let unsigned = SimdValue::uint16x8([0xFFFF; 8]);
    let shifted = SimdType::Uint16x8
        .shift_right_by_scalar(&unsigned, &Value::string("17"))
        .unwrap();
    assert_eq!(shifted.to_uint16x8(), Some([0x7FFF; 8]));
}

#[test]
fn left_shifts_truncate_to_lane_width() {
    let a = SimdValue::int16x8([0x4001; 8]);
    let shifted = SimdType::Int16x8
        .shift_left_by_scalar(&a, &Value::Number(1.0))
        .unwrap();
    assert_eq!(shifted.to_int16x8(), Some([-0x7FFE; 8]));
}

#[test]
fn bitwise() {
    let ty = SimdType::Uint8x16;
    let a = SimdValue::uint8x16([0b1100; 16]);
    let b = SimdValue::uint8x16([0b1010; 16]);
    assert_eq!(ty.and(&a, &b).unwrap().to_uint8x16(), Some([0b1000; 16]));
    assert_eq!(ty.or(&a, &b).unwrap().to_uint8x16(), Some([0b1110; 16]));
    assert_eq!(ty.xor(&a, &b).unwrap().to_uint8x16(), Some([0b0110; 16]));
    assert_eq!(ty.not(&a).unwrap().to_uint8x16(), Some([0b1111_0011; 16]));

    let ty = SimdType::Bool32x4;
    let a = SimdValue::bool32x4([true, true, false, false]);
    let b = SimdValue::bool32x4([true, false, true, false]);
    assert_eq!(ty.and(&a, &b).unwrap().to_bool32x4(), Some([true, false, false, false]));
    assert_eq!(ty.or(&a, &b).unwrap().to_bool32x4(), Some([true, true, true, false]));
    assert_eq!(ty.xor(&a, &b).unwrap().to_bool32x4(), Some([false, true, true, false]));
    assert_eq!(ty.not(&a).unwrap().to_bool32x4(), Some([false, false, true, true]));

    let f = SimdValue::float32x4([1.0; 4]);
    assert!(SimdType::Float32x4.and(&f, &f).is_err());
}
