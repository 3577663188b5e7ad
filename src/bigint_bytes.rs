//! BigInt over big-endian two's-complement byte buffers.
//!
//! Inputs are `(pointer, length)` pairs; an empty buffer is zero and a null
//! pointer is only valid with length zero. Results are minimal encodings
//! (zero is `[0x00]`) owned by the caller until `bigint_free_byte_result`.
//!
//! # Safety
//! Every `(data, len)` pair must be null with `len == 0` or valid for `len` bytes.

use std::os::raw::c_char;
use std::ptr;

use kbignum_engine::BigInt;

use crate::buffer::{bigint_from_bytes, bigint_to_byte_result, c_str_arg, string_to_c_str, ByteArrayResult};
use crate::error::{ffi_guard, FfiResult};

unsafe fn unary(
    data: *const u8,
    len: usize,
    op: impl FnOnce(BigInt) -> FfiResult<BigInt>,
) -> *mut ByteArrayResult {
    ffi_guard(ptr::null_mut(), || {
        let a = bigint_from_bytes(data, len)?;
        Ok(bigint_to_byte_result(&op(a)?))
    })
}

unsafe fn binary(
    a_data: *const u8,
    a_len: usize,
    b_data: *const u8,
    b_len: usize,
    op: impl FnOnce(BigInt, BigInt) -> FfiResult<BigInt>,
) -> *mut ByteArrayResult {
    ffi_guard(ptr::null_mut(), || {
        let a = bigint_from_bytes(a_data, a_len)?;
        let b = bigint_from_bytes(b_data, b_len)?;
        Ok(bigint_to_byte_result(&op(a, b)?))
    })
}

/// Parses decimal text into its byte encoding.
#[no_mangle]
pub unsafe extern "C" fn bigint_from_string_bytes(s: *const c_char) -> *mut ByteArrayResult {
    ffi_guard(ptr::null_mut(), || {
        let n: BigInt = c_str_arg(s)?.parse()?;
        Ok(bigint_to_byte_result(&n))
    })
}

/// Formats a byte encoding as decimal text.
#[no_mangle]
pub unsafe extern "C" fn bigint_to_string_bytes(data: *const u8, len: usize) -> *mut c_char {
    ffi_guard(ptr::null_mut(), || {
        Ok(string_to_c_str(bigint_from_bytes(data, len)?.to_string()))
    })
}

#[no_mangle]
pub unsafe extern "C" fn bigint_add_bytes(
    a_data: *const u8, a_len: usize,
    b_data: *const u8, b_len: usize,
) -> *mut ByteArrayResult {
    binary(a_data, a_len, b_data, b_len, |a, b| Ok(a + b))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_subtract_bytes(
    a_data: *const u8, a_len: usize,
    b_data: *const u8, b_len: usize,
) -> *mut ByteArrayResult {
    binary(a_data, a_len, b_data, b_len, |a, b| Ok(a - b))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_multiply_bytes(
    a_data: *const u8, a_len: usize,
    b_data: *const u8, b_len: usize,
) -> *mut ByteArrayResult {
    binary(a_data, a_len, b_data, b_len, |a, b| Ok(a * b))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_divide_bytes(
    a_data: *const u8, a_len: usize,
    b_data: *const u8, b_len: usize,
) -> *mut ByteArrayResult {
    binary(a_data, a_len, b_data, b_len, |a, b| Ok(a.checked_div(&b)?))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_mod_bytes(
    a_data: *const u8, a_len: usize,
    b_data: *const u8, b_len: usize,
) -> *mut ByteArrayResult {
    binary(a_data, a_len, b_data, b_len, |a, b| Ok(a.checked_rem(&b)?))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_gcd_bytes(
    a_data: *const u8, a_len: usize,
    b_data: *const u8, b_len: usize,
) -> *mut ByteArrayResult {
    binary(a_data, a_len, b_data, b_len, |a, b| Ok(a.gcd(&b)))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_pow_bytes(data: *const u8, len: usize, exponent: u32) -> *mut ByteArrayResult {
    unary(data, len, |a| Ok(a.pow(exponent)))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_abs_bytes(data: *const u8, len: usize) -> *mut ByteArrayResult {
    unary(data, len, |a| Ok(a.abs()))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_negate_bytes(data: *const u8, len: usize) -> *mut ByteArrayResult {
    unary(data, len, |a| Ok(-a))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_signum_bytes(data: *const u8, len: usize) -> i32 {
    ffi_guard(0, || Ok(bigint_from_bytes(data, len)?.signum()))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_compare_bytes(
    a_data: *const u8, a_len: usize,
    b_data: *const u8, b_len: usize,
) -> i32 {
    ffi_guard(0, || {
        let a = bigint_from_bytes(a_data, a_len)?;
        let b = bigint_from_bytes(b_data, b_len)?;
        Ok(a.compare(&b))
    })
}

/// Narrows to `i64`; out of range values give `0` with code 4.
#[no_mangle]
pub unsafe extern "C" fn bigint_to_long_bytes(data: *const u8, len: usize) -> i64 {
    ffi_guard(0, || Ok(bigint_from_bytes(data, len)?.to_i64()?))
}
