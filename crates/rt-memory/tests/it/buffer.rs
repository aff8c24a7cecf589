use simdjs_rt_memory::{ArrayBuffer, BoundsCheckError, Buffer, HexDump};

#[test]
fn little_endian_accesses() {
    let buffer = ArrayBuffer::new(8);
    assert_eq!(buffer.i32_store(0, 0x0403_0201), Ok(()));
    assert_eq!(buffer.to_vec(), [1, 2, 3, 4, 0, 0, 0, 0]);
    assert_eq!(buffer.i16_load(1), Ok(0x0302));
    assert_eq!(buffer.i8_load(3), Ok(4));
    assert_eq!(buffer.f32_store(4, -0.0), Ok(()));
    assert_eq!(buffer.i32_load(4), Ok(i32::MIN));
}

#[test]
fn out_of_bounds() {
    let buffer = ArrayBuffer::new(4);
    assert_eq!(buffer.i32_load(1), Err(BoundsCheckError));
    assert_eq!(buffer.i8_store(4, 1), Err(BoundsCheckError));
    assert_eq!(buffer.i16_load(usize::MAX), Err(BoundsCheckError));
    assert_eq!(buffer.i32_load(0), Ok(0));
}

#[test]
fn detached_buffer_is_empty() {
    let buffer = ArrayBuffer::from_bytes(&[1, 2, 3, 4]);
    assert!(!buffer.is_detached());
    buffer.detach();
    assert!(buffer.is_detached());
    assert_eq!(buffer.byte_len(), 0);
    assert_eq!(buffer.i8_load(0), Err(BoundsCheckError));
    assert!(buffer.to_vec().is_empty());
}

#[test]
fn hex_dump() {
    let buffer = ArrayBuffer::from_bytes(b"SIMD\x00\x01\x02\x03\xFF");
    insta::assert_snapshot!(HexDump::new(&buffer), @r###"
    Offset    00 01 02 03  04 05 06 07  08 09 0A 0B  0C 0D 0E 0F  ASCII
    00000000  53 49 4D 44  00 01 02 03  FF                        SIMD.....
    "###);
}

#[test]
fn lower_hex_dump() {
    let buffer = ArrayBuffer::from_bytes(&[0xAB, 0x0C, b'z']);
    insta::assert_snapshot!(format!("{:x}", HexDump::new(&buffer)), @r###"
    Offset    00 01 02 03  04 05 06 07  08 09 0a 0b  0c 0d 0e 0f  ASCII
    00000000  ab 0c 7a                                            ..z
    "###);
}
