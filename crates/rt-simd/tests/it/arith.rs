use crate::assert_error;
use simdjs_rt_simd::{ErrorKind, SimdType, SimdValue};

const UNSUPPORTED: &str = "operation is not supported by this SIMD type";

#[test]
fn integer_arithmetic_wraps() {
    let a = SimdValue::int8x16([127; 16]);
    let b = SimdValue::int8x16([1; 16]);
    let sum = SimdType::Int8x16.add(&a, &b).unwrap();
    assert_eq!(sum.to_int8x16(), Some([-128; 16]));

    let zero = SimdValue::uint16x8([0; 8]);
    let one = SimdValue::uint16x8([1; 8]);
    let difference = SimdType::Uint16x8.sub(&zero, &one).unwrap();
    assert_eq!(difference.to_uint16x8(), Some([65535; 8]));

    let a = SimdValue::int32x4([i32::MAX, 3, -4, 0]);
    let b = SimdValue::int32x4([2, 3, 5, 9]);
    let product = SimdType::Int32x4.mul(&a, &b).unwrap();
    assert_eq!(product.to_int32x4(), Some([-2, 9, -20, 0]));
}

#[test]
fn float_arithmetic() {
    let a = SimdValue::float32x4([1.5, -2.0, 1.0, 0.0]);
    let b = SimdValue::float32x4([0.5, 4.0, 0.0, 0.0]);
    let ty = SimdType::Float32x4;
    assert_eq!(ty.add(&a, &b).unwrap().to_float32x4(), Some([2.0, 2.0, 1.0, 0.0]));
    assert_eq!(ty.mul(&a, &b).unwrap().to_float32x4(), Some([0.75, -8.0, 0.0, 0.0]));

    let [q0, q1, q2, q3] = ty.div(&a, &b).unwrap().to_float32x4().unwrap();
    assert_eq!([q0, q1, q2], [3.0, -0.5, f32::INFINITY]);
    assert!(q3.is_nan());
}

#[test]
fn negation() {
    let a = SimdValue::int32x4([i32::MIN, -1, 0, 7]);
    let negated = SimdType::Int32x4.neg(&a).unwrap();
    assert_eq!(negated.to_int32x4(), Some([i32::MIN, 1, 0, -7]));

    let f = SimdValue::float32x4([0.0, -1.5, f32::INFINITY, 2.0]);
    let [z, ..] = SimdType::Float32x4.neg(&f).unwrap().to_float32x4().unwrap();
    assert!(z.is_sign_negative());
}

#[test]
fn float_functions() {
    let ty = SimdType::Float32x4;
    let a = SimdValue::float32x4([-4.0, 9.0, -0.0, 2.25]);
    assert_eq!(ty.abs(&a).unwrap().to_float32x4(), Some([4.0, 9.0, 0.0, 2.25]));

    let [s0, s1, s2, s3] = ty.sqrt(&a).unwrap().to_float32x4().unwrap();
    assert!(s0.is_nan());
    assert_eq!([s1, s2, s3], [3.0, 0.0, 1.5]);
}

#[test]
fn min_max_nan_handling() {
    let ty = SimdType::Float32x4;
    let a = SimdValue::float32x4([f32::NAN, f32::NAN, -0.0, 1.0]);
    let b = SimdValue::float32x4([5.0, f32::NAN, 0.0, 2.0]);

    let [m0, m1, m2, m3] = ty.min_num(&a, &b).unwrap().to_float32x4().unwrap();
    assert_eq!(m0, 5.0);
    assert!(m1.is_nan());
    assert!(m2 == 0.0 && m2.is_sign_negative());
    assert_eq!(m3, 1.0);

    let [x0, x1, x2, x3] = ty.max_num(&a, &b).unwrap().to_float32x4().unwrap();
    assert_eq!(x0, 5.0);
    assert!(x1.is_nan());
    assert!(x2 == 0.0 && x2.is_sign_positive());
    assert_eq!(x3, 2.0);

    let [n0, _, _, n3] = ty.min(&a, &b).unwrap().to_float32x4().unwrap();
    assert!(n0.is_nan());
    assert_eq!(n3, 1.0);

    let [n0, _, _, n3] = ty.max(&a, &b).unwrap().to_float32x4().unwrap();
    assert!(n0.is_nan());
    assert_eq!(n3, 2.0);
}

#[test]
fn reciprocal_approximations() {
    let ty = SimdType::Float32x4;
    let a = SimdValue::float32x4([0.0, -0.0, f32::NAN, 4.0]);
    let [r0, r1, r2, r3] = ty.reciprocal_approximation(&a).unwrap().to_float32x4().unwrap();
    assert_eq!(r0, f32::INFINITY);
    assert_eq!(r1, f32::NEG_INFINITY);
    assert!(r2.is_nan());
    assert_eq!(r3, 0.25);

    let a = SimdValue::float32x4([f32::INFINITY, f32::NEG_INFINITY, 2.0, -2.0]);
    let [r0, r1, r2, r3] = ty.reciprocal_approximation(&a).unwrap().to_float32x4().unwrap();
    assert_eq!([r0, r1, r2, r3], [0.0, 0.0, 0.5, -0.5]);

    let a = SimdValue::float32x4([4.0, -1.0, 0.0, f32::INFINITY]);
    let [s0, s1, s2, s3] = ty.reciprocal_sqrt_approximation(&a).unwrap().to_float32x4().unwrap();
    assert_eq!(s0, 0.5);
    assert!(s1.is_nan());
    assert_eq!(s2, f32::INFINITY);
    assert_eq!(s3, 0.0);
}

#[test]
fn float_only_operations() {
    let a = SimdValue::int32x4([1, 2, 3, 4]);
    assert_error(SimdType::Int32x4.div(&a, &a), ErrorKind::Type, UNSUPPORTED);
    assert_error(SimdType::Int32x4.sqrt(&a), ErrorKind::Type, UNSUPPORTED);

    let b = SimdValue::bool32x4([true; 4]);
    assert_error(SimdType::Bool32x4.add(&b, &b), ErrorKind::Type, UNSUPPORTED);
}

#[test]
fn operands_must_match_type() {
    let a = SimdValue::int32x4([1, 2, 3, 4]);
    let b = SimdValue::uint32x4([1, 2, 3, 4]);
    assert_error(
        SimdType::Int32x4.add(&a, &b),
        ErrorKind::Type,
        "SIMD type expected",
    );
    assert_error(
        SimdType::Uint32x4.neg(&a),
        ErrorKind::Type,
        "SIMD type expected",
    );
}

#[test]
fn operands_are_not_modified() {
    let a = SimdValue::int16x8([1, 2, 3, 4, 5, 6, 7, 8]);
    let before = a;
    let _ = SimdType::Int16x8.add(&a, &a).unwrap();
    let _ = SimdType::Int16x8.neg(&a).unwrap();
    assert_eq!(a.to_int16x8(), before.to_int16x8());
}
