//! Big Num \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision integers.  All operations behave as if BigInt were represented in two's-complement notation.
//! - [`BigDec`]: Immutable, arbitrary-precision signed decimal numbers. A BigDec consists of an arbitrary precision integer unscaled value and a 32-bit integer scale.
//! - [`RoundingMode`]: The eight rounding modes used whenever a decimal result loses digits.
//!
//! Fallible operations return [`Result`] with a [`NumError`]; nothing here
//! panics on malformed input.

#[macro_use]
mod macros;

mod big_dec;
mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;
mod magnitude;
mod rounding;

pub use big_dec::BigDec;
pub use big_int::BigInt;
pub use error::{NumError, Result};
pub use rounding::RoundingMode;

#[cfg(test)]
mod tests {
    use crate::{BigDec, BigInt, RoundingMode};

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");

        let x: BigDec = "10".parse().unwrap();
        let y: BigDec = "3".parse().unwrap();
        let q = x.div_with_scale(&y, 4, RoundingMode::HalfUp).unwrap();
        assert_eq!(q.to_string(), "3.3333");
        assert_eq!(q.to_big_int(), BigInt::from(3));
    }
}
