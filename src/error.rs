use std::cell::RefCell;
use std::os::raw::c_char;
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use kbignum_engine::NumError;
use thiserror::Error;

use crate::buffer::string_to_c_str;

/// Failures an entry point can report through the side channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FfiError {
    #[error(transparent)]
    Num(#[from] NumError),

    #[error("null pointer argument")]
    NullPointer,

    #[error("argument is not valid UTF-8")]
    InvalidUtf8,

    #[error("internal panic: {0}")]
    Panic(String),
}

impl FfiError {
    /// Stable code reported by `kbignum_last_error`.
    pub fn code(&self) -> i32 {
        match self {
            FfiError::Num(NumError::Parse { .. }) => 1,
            FfiError::Num(NumError::DivisionByZero) => 2,
            FfiError::Num(NumError::Inexact { .. }) => 3,
            FfiError::Num(NumError::Overflow { .. }) => 4,
            FfiError::Num(NumError::NegativeOperand { .. }) => 5,
            FfiError::Num(NumError::InvalidRoundingMode(_)) => 6,
            FfiError::NullPointer => 7,
            FfiError::InvalidUtf8 => 8,
            FfiError::Panic(_) => 9,
        }
    }
}

pub type FfiResult<T> = Result<T, FfiError>;

thread_local! {
    static LAST_ERROR: RefCell<Option<FfiError>> = RefCell::new(None);
}

fn record(err: FfiError) {
    log::debug!("ffi call failed with code {}: {}", err.code(), err);
    LAST_ERROR.with(|last| *last.borrow_mut() = Some(err));
}

fn clear() {
    LAST_ERROR.with(|last| *last.borrow_mut() = None);
}

/// Runs an entry point body: clears the side channel, keeps panics from
/// unwinding into the caller and turns any failure into `fallback`.
pub(crate) fn ffi_guard<T, F: FnOnce() -> FfiResult<T>>(fallback: T, f: F) -> T {
    clear();
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(val)) => val,
        Ok(Err(err)) => {
            record(err);
            fallback
        }
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| String::from("unknown panic"));
            log::warn!("caught panic at the ffi boundary: {}", message);
            record(FfiError::Panic(message));
            fallback
        }
    }
}

/// Code of the most recent failure on this thread, `0` if the last call succeeded.
#[no_mangle]
pub extern "C" fn kbignum_last_error() -> i32 {
    LAST_ERROR.with(|last| last.borrow().as_ref().map_or(0, FfiError::code))
}

/// Description of the most recent failure on this thread, or null.
/// Release with `bigint_free_string`.
#[no_mangle]
pub extern "C" fn kbignum_last_error_message() -> *mut c_char {
    LAST_ERROR.with(|last| match last.borrow().as_ref() {
        Some(err) => string_to_c_str(err.to_string()),
        None => ptr::null_mut(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(FfiError::from(NumError::DivisionByZero).code(), 2);
        assert_eq!(FfiError::from(NumError::InvalidRoundingMode(9)).code(), 6);
        assert_eq!(FfiError::NullPointer.code(), 7);
        assert_eq!(FfiError::Panic(String::new()).code(), 9);
    }

    #[test]
    fn guard_records_and_clears() {
        let val = ffi_guard(-1, || Err(FfiError::NullPointer));
        assert_eq!(val, -1);
        assert_eq!(kbignum_last_error(), 7);

        let val = ffi_guard(-1, || Ok(5));
        assert_eq!(val, 5);
        assert_eq!(kbignum_last_error(), 0);
        assert!(kbignum_last_error_message().is_null());
    }

    #[test]
    fn guard_catches_panics() {
        let val = ffi_guard(0_i64, || -> FfiResult<i64> { panic!("boom") });
        assert_eq!(val, 0);
        assert_eq!(kbignum_last_error(), 9);
        assert_eq!(LAST_ERROR.with(|last| last.borrow().clone()), Some(FfiError::Panic("boom".into())));
    }
}
