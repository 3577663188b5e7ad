//! C ABI for the `kbignum-engine` arithmetic.
//!
//! Two channels reach the same engine:
//! - decimal C strings for [`BigInt`](kbignum_engine::BigInt) and
//!   [`BigDec`](kbignum_engine::BigDec) (`bigint_*`, `bigdecimal_*`),
//! - big-endian two's-complement byte buffers for BigInt (`bigint_*_bytes`).
//!
//! Failed calls return null (or `0` for scalar results) and leave a code in a
//! thread-local slot read by [`kbignum_last_error`]. The declarations live in
//! `include/kbignum_ffi.h`.

mod buffer;
mod error;
mod bigint_ffi;
mod bigint_bytes;
mod bigdecimal_ffi;

pub use buffer::{bigint_free_byte_result, bigint_free_string, ByteArrayResult};
pub use error::{kbignum_last_error, kbignum_last_error_message, FfiError};
pub use bigint_ffi::*;
pub use bigint_bytes::*;
pub use bigdecimal_ffi::*;
pub use kbignum_engine;

#[cfg(test)]
mod tests {
    use std::ffi::{CStr, CString};

    use crate::*;

    #[test]
    fn it_works() {
        let a = CString::new("123.45").unwrap();
        let b = CString::new("12.34").unwrap();
        unsafe {
            let result = bigdecimal_divide(a.as_ptr(), b.as_ptr(), 2);
            assert!(!result.is_null());
            assert_eq!(CStr::from_ptr(result).to_str().unwrap(), "10.00");
            bigint_free_string(result);
        }
    }
}
