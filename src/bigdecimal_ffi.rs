//! BigDec over decimal C strings.
//!
//! Results at a negative scale come back in exponent form (`"1.2E+3"`), which
//! every function here accepts as input again. The three-argument arithmetic
//! functions round with `HALF_UP`; the `_rounded` variants take a rounding
//! code (0 `UP` .. 7 `UNNECESSARY`).
//!
//! # Safety
//! String arguments must be null or valid NUL-terminated strings.

use std::os::raw::c_char;
use std::ptr;

use kbignum_engine::{BigDec, RoundingMode};

use crate::buffer::{c_str_arg, string_to_c_str};
use crate::error::{ffi_guard, FfiResult};

type ScaledOp = fn(&BigDec, &BigDec, i32, RoundingMode) -> kbignum_engine::Result<BigDec>;

unsafe fn parse_arg(s: *const c_char) -> FfiResult<BigDec> {
    Ok(c_str_arg(s)?.parse::<BigDec>()?)
}

unsafe fn scaled(
    a: *const c_char,
    b: *const c_char,
    scale: i32,
    rounding_mode: i32,
    op: ScaledOp,
) -> *mut c_char {
    ffi_guard(ptr::null_mut(), || {
        let mode = RoundingMode::from_code(rounding_mode)?;
        let a = parse_arg(a)?;
        let b = parse_arg(b)?;
        Ok(string_to_c_str(op(&a, &b, scale, mode)?.to_string()))
    })
}

fn default_mode() -> i32 {
    RoundingMode::default().code()
}

#[no_mangle]
pub unsafe extern "C" fn bigdecimal_add(a: *const c_char, b: *const c_char, scale: i32) -> *mut c_char {
    scaled(a, b, scale, default_mode(), BigDec::add_with_scale)
}

#[no_mangle]
pub unsafe extern "C" fn bigdecimal_subtract(a: *const c_char, b: *const c_char, scale: i32) -> *mut c_char {
    scaled(a, b, scale, default_mode(), BigDec::sub_with_scale)
}

#[no_mangle]
pub unsafe extern "C" fn bigdecimal_multiply(a: *const c_char, b: *const c_char, scale: i32) -> *mut c_char {
    scaled(a, b, scale, default_mode(), BigDec::mul_with_scale)
}

#[no_mangle]
pub unsafe extern "C" fn bigdecimal_divide(a: *const c_char, b: *const c_char, scale: i32) -> *mut c_char {
    scaled(a, b, scale, default_mode(), BigDec::div_with_scale)
}

#[no_mangle]
pub unsafe extern "C" fn bigdecimal_add_rounded(
    a: *const c_char,
    b: *const c_char,
    scale: i32,
    rounding_mode: i32,
) -> *mut c_char {
    scaled(a, b, scale, rounding_mode, BigDec::add_with_scale)
}

#[no_mangle]
pub unsafe extern "C" fn bigdecimal_subtract_rounded(
    a: *const c_char,
    b: *const c_char,
    scale: i32,
    rounding_mode: i32,
) -> *mut c_char {
    scaled(a, b, scale, rounding_mode, BigDec::sub_with_scale)
}

#[no_mangle]
pub unsafe extern "C" fn bigdecimal_multiply_rounded(
    a: *const c_char,
    b: *const c_char,
    scale: i32,
    rounding_mode: i32,
) -> *mut c_char {
    scaled(a, b, scale, rounding_mode, BigDec::mul_with_scale)
}

#[no_mangle]
pub unsafe extern "C" fn bigdecimal_divide_rounded(
    a: *const c_char,
    b: *const c_char,
    scale: i32,
    rounding_mode: i32,
) -> *mut c_char {
    scaled(a, b, scale, rounding_mode, BigDec::div_with_scale)
}

#[no_mangle]
pub unsafe extern "C" fn bigdecimal_abs(a: *const c_char) -> *mut c_char {
    ffi_guard(ptr::null_mut(), || Ok(string_to_c_str(parse_arg(a)?.abs().to_string())))
}

#[no_mangle]
pub unsafe extern "C" fn bigdecimal_signum(a: *const c_char) -> i32 {
    ffi_guard(0, || Ok(parse_arg(a)?.signum()))
}

/// Value comparison: `"1.0"` and `"1.00"` compare equal.
#[no_mangle]
pub unsafe extern "C" fn bigdecimal_compare(a: *const c_char, b: *const c_char) -> i32 {
    ffi_guard(0, || Ok(parse_arg(a)?.compare(&parse_arg(b)?)))
}

#[no_mangle]
pub unsafe extern "C" fn bigdecimal_set_scale(a: *const c_char, scale: i32, rounding_mode: i32) -> *mut c_char {
    ffi_guard(ptr::null_mut(), || {
        let mode = RoundingMode::from_code(rounding_mode)?;
        let rescaled = parse_arg(a)?.set_scale(scale, mode)?;
        Ok(string_to_c_str(rescaled.to_string()))
    })
}

/// Integer part, truncated toward zero.
#[no_mangle]
pub unsafe extern "C" fn bigdecimal_to_biginteger(a: *const c_char) -> *mut c_char {
    ffi_guard(ptr::null_mut(), || Ok(string_to_c_str(parse_arg(a)?.to_big_int().to_string())))
}
