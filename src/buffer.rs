//! Owned result buffers and the raw-pointer decoding shared by every entry point.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;
use std::slice;

use kbignum_engine::BigInt;

use crate::error::{FfiError, FfiResult};

/// A length-tagged byte buffer owned by the caller until it is handed back to
/// `bigint_free_byte_result`.
#[repr(C)]
pub struct ByteArrayResult {
    pub data: *mut u8,
    pub len: usize,
}

/// Releases a string returned by any `bigint_*`, `bigdecimal_*` or
/// `kbignum_*` function. Null is ignored.
///
/// # Safety
/// `s` must be null or a pointer returned by this library that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn bigint_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Releases a byte buffer and its descriptor. Null is ignored.
///
/// # Safety
/// `result` must be null or a pointer returned by this library that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn bigint_free_byte_result(result: *mut ByteArrayResult) {
    if result.is_null() {
        return;
    }
    let result = Box::from_raw(result);
    if !result.data.is_null() {
        drop(Box::from_raw(slice::from_raw_parts_mut(result.data, result.len)));
    }
}

pub(crate) fn string_to_c_str(s: String) -> *mut c_char {
    CString::new(s).map_or(ptr::null_mut(), CString::into_raw)
}

pub(crate) fn bigint_to_byte_result(n: &BigInt) -> *mut ByteArrayResult {
    let bytes = n.to_signed_bytes_be().into_boxed_slice();
    let len = bytes.len();
    let data = Box::into_raw(bytes) as *mut u8;
    Box::into_raw(Box::new(ByteArrayResult { data, len }))
}

/// Borrows a NUL-terminated UTF-8 argument.
///
/// # Safety
/// `s` must be null or point to a NUL-terminated string that outlives `'a`.
pub(crate) unsafe fn c_str_arg<'a>(s: *const c_char) -> FfiResult<&'a str> {
    if s.is_null() {
        return Err(FfiError::NullPointer);
    }
    CStr::from_ptr(s).to_str().map_err(|_| FfiError::InvalidUtf8)
}

/// Borrows a byte argument; a null pointer is only accepted with length zero.
///
/// # Safety
/// `data` must be null or valid for `len` bytes that outlive `'a`.
pub(crate) unsafe fn bytes_arg<'a>(data: *const u8, len: usize) -> FfiResult<&'a [u8]> {
    if data.is_null() {
        if len == 0 {
            return Ok(&[]);
        }
        return Err(FfiError::NullPointer);
    }
    Ok(slice::from_raw_parts(data, len))
}

/// # Safety
/// See [`bytes_arg`].
pub(crate) unsafe fn bigint_from_bytes(data: *const u8, len: usize) -> FfiResult<BigInt> {
    bytes_arg(data, len).map(BigInt::from_signed_bytes_be)
}
