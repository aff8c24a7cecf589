use crate::assert_error;
use simdjs_rt_memory::{ArrayBuffer, BoundsCheckError, ElementKind, TypedArray};
use simdjs_rt_simd::{load_from_buffer, store_to_buffer, ErrorKind, SimdType, SimdValue, Value};
use std::rc::Rc;

fn int32_array(elements: &[f64]) -> TypedArray {
    TypedArray::from_elements(ElementKind::Int32, elements)
}

#[test]
fn load_lanes() {
    let array = Value::TypedArray(int32_array(&[1.0, 2.0, 3.0, 4.0, 5.0]));
    let ty = SimdType::Int32x4;

    let v = ty.load(&array, &Value::Number(1.0), 4).unwrap();
    assert_eq!(v.to_int32x4(), Some([2, 3, 4, 5]));

    let v = ty.load(&array, &Value::Number(0.0), 1).unwrap();
    assert_eq!(v.to_int32x4(), Some([1, 0, 0, 0]));

    let v = ty.load(&array, &Value::string("2"), 3).unwrap();
    assert_eq!(v.to_int32x4(), Some([3, 4, 5, 0]));

    let v = ty.load(&array, &Value::Null, 2).unwrap();
    assert_eq!(v.to_int32x4(), Some([1, 2, 0, 0]));
}

#[test]
fn load_reinterprets_elements() {
    let bytes = TypedArray::from_elements(
        ElementKind::Uint8,
        &[0.0, 0.0, 128.0, 63.0, 0.0, 0.0, 0.0, 64.0],
    );
    let v = SimdType::Float32x4
        .load(&Value::TypedArray(bytes), &Value::Number(0.0), 2)
        .unwrap();
    assert_eq!(v.to_float32x4(), Some([1.0, 2.0, 0.0, 0.0]));

    let halves = TypedArray::from_elements(ElementKind::Int16, &[-1.0, 1.0]);
    let v = SimdType::Uint8x16
        .load(&Value::TypedArray(halves), &Value::Number(0.0), 4)
        .unwrap();
    let mut expected = [0; 16];
    expected[..4].copy_from_slice(&[255, 255, 1, 0]);
    assert_eq!(v.to_uint8x16(), Some(expected));
}

#[test]
fn load_index_validation() {
    let array = Value::TypedArray(int32_array(&[1.0, 2.0, 3.0, 4.0, 5.0]));
    let ty = SimdType::Int32x4;

    for index in [1.5, -1.0, f64::NAN, f64::INFINITY] {
        assert_error(
            ty.load(&array, &Value::Number(index), 4),
            ErrorKind::Range,
            "invalid index",
        );
    }

    assert_error(
        ty.load(&array, &Value::Number(2.0), 4),
        ErrorKind::Range,
        "index out of bounds",
    );
    assert_error(
        ty.load(&array, &Value::Number(5.0), 1),
        ErrorKind::Range,
        "index out of bounds",
    );
    assert!(ty.load(&array, &Value::Number(4.0), 1).is_ok());
}

#[test]
fn load_requires_typed_array() {
    let ty = SimdType::Float32x4;
    assert_error(
        ty.load(&Value::Number(0.0), &Value::Number(0.0), 4),
        ErrorKind::Type,
        "TypedArray expected",
    );

    let array = TypedArray::new(ElementKind::Float32, 4);
    array.buffer().detach();
    assert_error(
        ty.load(&Value::TypedArray(array), &Value::Number(0.0), 4),
        ErrorKind::Type,
        "detached buffer",
    );
}

#[test]
fn store_lanes() {
    let array = TypedArray::new(ElementKind::Int32, 6);
    let target = Value::TypedArray(array.clone());
    let v = SimdValue::int32x4([10, 20, 30, 40]);

    let stored = SimdType::Int32x4
        .store(&target, &Value::Number(1.0), &Value::Simd(v), 3)
        .unwrap();
    assert_eq!(stored, v);

    let elements: Vec<f64> = (0..6).map(|i| array.get(i).unwrap()).collect();
    assert_eq!(elements, [0.0, 10.0, 20.0, 30.0, 0.0, 0.0]);
}

#[test]
fn store_bytes_of_narrow_lanes() {
    let array = TypedArray::new(ElementKind::Uint8, 16);
    let v = SimdValue::uint16x8([0xBEEF, 0x0102, 0, 0, 0, 0, 0, 0xFFFF]);
    let target = Value::TypedArray(array.clone());
    SimdType::Uint16x8
        .store(&target, &Value::Number(0.0), &Value::Simd(v), 8)
        .unwrap();

    assert_eq!(array.get(0), Ok(239.0));
    assert_eq!(array.get(1), Ok(190.0));
    assert_eq!(array.get(2), Ok(2.0));
    assert_eq!(array.get(3), Ok(1.0));
    assert_eq!(array.get(14), Ok(255.0));
    assert_eq!(array.get(15), Ok(255.0));
}

#[test]
fn store_validation() {
    let array = Value::TypedArray(TypedArray::new(ElementKind::Float32, 4));
    let ty = SimdType::Float32x4;
    let v = Value::Simd(SimdValue::float32x4([1.0; 4]));

    assert_error(
        ty.store(&array, &Value::Number(0.0), &Value::Number(1.0), 4),
        ErrorKind::Type,
        "SIMD type expected",
    );
    let other = Value::Simd(SimdValue::int32x4([1; 4]));
    assert_error(
        ty.store(&array, &Value::Number(0.0), &other, 4),
        ErrorKind::Type,
        "SIMD type expected",
    );
    assert_error(
        ty.store(&Value::Undefined, &Value::Number(0.0), &v, 4),
        ErrorKind::Type,
        "TypedArray expected",
    );
    assert_error(
        ty.store(&array, &Value::Number(1.0), &v, 4),
        ErrorKind::Range,
        "index out of bounds",
    );
    assert!(ty.store(&array, &Value::Number(1.0), &v, 3).is_ok());
}

#[test]
fn views_use_their_byte_offset() {
    let buffer = Rc::new(ArrayBuffer::new(24));
    let view = TypedArray::with_buffer(buffer.clone(), ElementKind::Int32, 8, 4).unwrap();
    let whole = TypedArray::with_buffer(buffer, ElementKind::Int32, 0, 6).unwrap();
    whole.set(2, 7.0).unwrap();
    whole.set(5, 9.0).unwrap();

    let v = SimdType::Int32x4
        .load(&Value::TypedArray(view.clone()), &Value::Number(0.0), 4)
        .unwrap();
    assert_eq!(v.to_int32x4(), Some([7, 0, 0, 9]));

    assert_error(
        SimdType::Int32x4.load(&Value::TypedArray(view), &Value::Number(1.0), 4),
        ErrorKind::Range,
        "index out of bounds",
    );
}

#[test]
fn raw_buffer_bounds() {
    let array = int32_array(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(
        load_from_buffer(&array, 4, SimdType::Int32x4, 4).unwrap_err(),
        BoundsCheckError
    );

    let v = SimdValue::int8x16([1; 16]);
    assert_eq!(store_to_buffer(&array, 1, &v, 16), Err(BoundsCheckError));
    assert_eq!(array.get(0), Ok(1.0));

    assert_eq!(store_to_buffer(&array, 0, &v, 16), Ok(()));
    assert_eq!(array.get(3), Ok(16843009.0));
}

#[test]
fn bool_lanes_are_masks() {
    let array = TypedArray::new(ElementKind::Int16, 8);
    let v = SimdValue::bool16x8([true, false, true, false, false, false, false, true]);
    store_to_buffer(&array, 0, &v, 8).unwrap();
    assert_eq!(array.get(0), Ok(-1.0));
    assert_eq!(array.get(1), Ok(0.0));

    let loaded = load_from_buffer(&array, 0, SimdType::Bool16x8, 8).unwrap();
    assert_eq!(loaded, v);
}
