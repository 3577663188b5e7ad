//! BigInt over decimal C strings.
//!
//! Every function returns a fresh string (release with `bigint_free_string`)
//! or null on failure; scalar results fall back to `0`. The failure itself is
//! available from `kbignum_last_error`.
//!
//! # Safety
//! String arguments must be null or valid NUL-terminated strings.

use std::os::raw::c_char;
use std::ptr;

use kbignum_engine::BigInt;

use crate::buffer::{c_str_arg, string_to_c_str};
use crate::error::{ffi_guard, FfiResult};

unsafe fn parse_arg(s: *const c_char) -> FfiResult<BigInt> {
    Ok(c_str_arg(s)?.parse::<BigInt>()?)
}

unsafe fn unary(a: *const c_char, op: impl FnOnce(BigInt) -> FfiResult<BigInt>) -> *mut c_char {
    ffi_guard(ptr::null_mut(), || {
        let a = parse_arg(a)?;
        Ok(string_to_c_str(op(a)?.to_string()))
    })
}

unsafe fn binary(
    a: *const c_char,
    b: *const c_char,
    op: impl FnOnce(BigInt, BigInt) -> FfiResult<BigInt>,
) -> *mut c_char {
    ffi_guard(ptr::null_mut(), || {
        let a = parse_arg(a)?;
        let b = parse_arg(b)?;
        Ok(string_to_c_str(op(a, b)?.to_string()))
    })
}

#[no_mangle]
pub unsafe extern "C" fn bigint_add(a: *const c_char, b: *const c_char) -> *mut c_char {
    binary(a, b, |a, b| Ok(a + b))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_subtract(a: *const c_char, b: *const c_char) -> *mut c_char {
    binary(a, b, |a, b| Ok(a - b))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_multiply(a: *const c_char, b: *const c_char) -> *mut c_char {
    binary(a, b, |a, b| Ok(a * b))
}

/// Quotient truncated toward zero; null with code 2 for a zero divisor.
#[no_mangle]
pub unsafe extern "C" fn bigint_divide(a: *const c_char, b: *const c_char) -> *mut c_char {
    binary(a, b, |a, b| Ok(a.checked_div(&b)?))
}

/// Remainder with the sign of the dividend.
#[no_mangle]
pub unsafe extern "C" fn bigint_mod(a: *const c_char, b: *const c_char) -> *mut c_char {
    binary(a, b, |a, b| Ok(a.checked_rem(&b)?))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_pow(base: *const c_char, exponent: u32) -> *mut c_char {
    unary(base, |a| Ok(a.pow(exponent)))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_abs(a: *const c_char) -> *mut c_char {
    unary(a, |a| Ok(a.abs()))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_negate(a: *const c_char) -> *mut c_char {
    unary(a, |a| Ok(-a))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_gcd(a: *const c_char, b: *const c_char) -> *mut c_char {
    binary(a, b, |a, b| Ok(a.gcd(&b)))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_lcm(a: *const c_char, b: *const c_char) -> *mut c_char {
    binary(a, b, |a, b| Ok(a.lcm(&b)))
}

/// Floor square root; null with code 5 for a negative operand.
#[no_mangle]
pub unsafe extern "C" fn bigint_sqrt(a: *const c_char) -> *mut c_char {
    unary(a, |a| Ok(a.sqrt()?))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_signum(a: *const c_char) -> i32 {
    ffi_guard(0, || Ok(parse_arg(a)?.signum()))
}

#[no_mangle]
pub unsafe extern "C" fn bigint_compare(a: *const c_char, b: *const c_char) -> i32 {
    ffi_guard(0, || Ok(parse_arg(a)?.compare(&parse_arg(b)?)))
}

/// Narrows to `i64`; out of range values give `0` with code 4.
#[no_mangle]
pub unsafe extern "C" fn bigint_to_long(a: *const c_char) -> i64 {
    ffi_guard(0, || Ok(parse_arg(a)?.to_i64()?))
}
