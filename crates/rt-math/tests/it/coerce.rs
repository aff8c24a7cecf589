use simdjs_rt_math::*;

#[test]
fn int32_wraps_around() {
    assert_eq!(to_int32(2147483648.0), i32::MIN);
    assert_eq!(to_int32(4294967295.0), -1);
    assert_eq!(to_int32(-2147483649.0), i32::MAX);
    assert_eq!(to_int32(1e300), 0);
}

#[test]
fn non_finite_becomes_zero() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(to_int32(value), 0);
        assert_eq!(to_uint32(value), 0);
        assert_eq!(to_int16(value), 0);
        assert_eq!(to_uint8(value), 0);
    }
}

#[test]
fn truncates_toward_zero() {
    assert_eq!(to_int32(-1.9), -1);
    assert_eq!(to_int32(1.9), 1);
    assert_eq!(to_uint32(-1.5), u32::MAX);
    assert_eq!(to_int8(-0.5), 0);
}

#[test]
fn narrow_widths() {
    assert_eq!(to_int16(32768.0), i16::MIN);
    assert_eq!(to_uint16(-1.0), u16::MAX);
    assert_eq!(to_uint16(65536.0), 0);
    assert_eq!(to_int8(128.0), -128);
    assert_eq!(to_int8(255.0), -1);
    assert_eq!(to_uint8(256.0 + 7.0), 7);
    assert_eq!(to_uint8(-129.0), 127);
}

#[test]
fn length_clamps() {
    assert_eq!(to_length(-5.0), 0.0);
    assert_eq!(to_length(f64::NAN), 0.0);
    assert_eq!(to_length(3.7), 3.0);
    assert_eq!(to_length(f64::INFINITY), MAX_SAFE_INTEGER);
    assert!(to_length(-0.0).is_sign_positive());
}

#[test]
fn integer_or_infinity() {
    assert_eq!(to_integer_or_infinity(f64::NAN), 0.0);
    assert_eq!(to_integer_or_infinity(-2.5), -2.0);
    assert_eq!(to_integer_or_infinity(f64::NEG_INFINITY), f64::NEG_INFINITY);
    assert!(to_integer_or_infinity(-0.25).is_sign_positive());
}

#[test]
fn checked_lane_narrowing() {
    assert_eq!(i8_trunc_f32(127.9), Ok(127));
    assert_eq!(i8_trunc_f32(128.0), Err(LaneConversionError::OutOfRange));
    assert_eq!(u8_trunc_f32(-0.5), Ok(0));
    assert_eq!(u16_trunc_f32(-1.0), Err(LaneConversionError::OutOfRange));
    assert_eq!(i32_trunc_f32(f32::NAN), Err(LaneConversionError::NotANumber));
    assert_eq!(u32_trunc_f32(f32::INFINITY), Err(LaneConversionError::OutOfRange));
    assert_eq!(i16_narrow(-32768), Ok(i16::MIN));
    assert_eq!(i16_narrow(32768), Err(LaneConversionError::OutOfRange));
    assert_eq!(u32_narrow(4294967295), Ok(u32::MAX));
    assert_eq!(u32_narrow(-1), Err(LaneConversionError::OutOfRange));
}

#[test]
fn saturation() {
    assert_eq!(saturate(128, -128, 127), 127);
    assert_eq!(saturate(-129, -128, 127), -128);
    assert_eq!(saturate(5, 0, 255), 5);
}
