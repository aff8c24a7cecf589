mod arith;
mod convert;
mod integer;
mod memory;

use simdjs_rt_simd::{ErrorKind, Result};

#[track_caller]
fn assert_error<T: std::fmt::Debug>(result: Result<T>, kind: ErrorKind, message: &str) {
    let error = result.unwrap_err();
    assert_eq!(error.kind(), kind);
    assert_eq!(error.message(), message);
}
