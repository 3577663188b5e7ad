//! # BigDec
//! Immutable arbitrary-precision signed decimals: an unscaled [`BigInt`] and an
//! `i32` scale, standing for `unscaled * 10^(-scale)`.
//!
//! Every operation that can shorten a result takes an explicit target scale
//! and a [`RoundingMode`]. Rounding is decided from the exact remainder, never
//! from a fixed number of guard digits.
//! # Example
//! ```
//! use kbignum_engine::{BigDec, RoundingMode};
//!
//! let a: BigDec = "10".parse().unwrap();
//! let b: BigDec = "3".parse().unwrap();
//! let q = a.div_with_scale(&b, 4, RoundingMode::HalfUp).unwrap();
//! assert_eq!(q.to_string(), "3.3333");
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::big_int::{BigInt, ZERO};
use crate::error::{NumError, Result};
use crate::rounding::RoundingMode;

#[derive(Debug, Clone)]
pub struct BigDec {
    int_val: BigInt,
    scale: i32,
}

fn scale_overflow() -> NumError {
    NumError::Overflow { target: "decimal scale" }
}

fn checked_scale(scale: i64) -> Result<i32> {
    i32::try_from(scale).map_err(|_| scale_overflow())
}

fn ten_pow(n: i64) -> Result<BigInt> {
    u32::try_from(n).map(BigInt::ten_pow).map_err(|_| scale_overflow())
}

/// `num / den` truncated, then moved one unit away from zero when `mode` says
/// the discarded remainder has to round up.
fn div_round(num: &BigInt, den: &BigInt, mode: RoundingMode, scale: i32) -> Result<BigInt> {
    let (q, r) = num.div_rem(den)?;
    if r.is_zero() {
        return Ok(q);
    }
    if mode == RoundingMode::Unnecessary {
        return Err(NumError::Inexact { scale });
    }
    let negative = num.signum() * den.signum() < 0;
    let half_cmp = (r.abs() << 1).cmp(&den.abs());
    if mode.increments(half_cmp, negative, q.is_odd()) {
        let unit = if negative { BigInt::from(-1) } else { BigInt::one() };
        Ok(q + unit)
    } else {
        Ok(q)
    }
}

/// Rounds a non-zero quotient known to be below half a unit: truncation
/// leaves zero and `mode` alone decides whether one unit is added.
fn round_below_half(negative: bool, mode: RoundingMode, scale: i32) -> Result<BigInt> {
    if mode == RoundingMode::Unnecessary {
        return Err(NumError::Inexact { scale });
    }
    if !mode.increments(Ordering::Less, negative, false) {
        Ok(ZERO)
    } else if negative {
        Ok(BigInt::from(-1))
    } else {
        Ok(BigInt::one())
    }
}

/// Whether `|val| / 10^k` stays below one tenth, so that dividing by `10^k`
/// never has to build the power.
fn vanishes_below(val: &BigInt, k: u64) -> bool {
    k > val.max_decimal_digits()
}

/// Re-expresses `val * 10^(-from)` with `to` fraction digits.
fn rescale(val: &BigInt, from: i64, to: i32, mode: RoundingMode) -> Result<BigInt> {
    let diff = to as i64 - from;
    if val.is_zero() {
        Ok(ZERO)
    } else if diff >= 0 {
        Ok(val * &ten_pow(diff)?)
    } else if vanishes_below(val, diff.unsigned_abs()) {
        round_below_half(val.is_negative(), mode, to)
    } else {
        div_round(val, &ten_pow(-diff)?, mode, to)
    }
}

impl BigDec {
    pub fn new(unscaled: BigInt, scale: i32) -> BigDec {
        BigDec { int_val: unscaled, scale }
    }

    pub fn zero() -> BigDec {
        BigDec::new(ZERO, 0)
    }

    pub fn unscaled(&self) -> &BigInt {
        &self.int_val
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Decimal digits in the unscaled value, `1` for zero.
    pub fn precision(&self) -> usize {
        self.int_val.decimal_digits()
    }

    /// Sign of the unscaled value; every zero is `0` whatever its scale.
    pub fn signum(&self) -> i32 {
        self.int_val.signum()
    }

    pub fn is_zero(&self) -> bool {
        self.int_val.is_zero()
    }

    pub fn abs(&self) -> BigDec {
        BigDec::new(self.int_val.abs(), self.scale)
    }

    pub fn negate(&self) -> BigDec {
        BigDec::new(-&self.int_val, self.scale)
    }

    fn adjusted_exponent(&self) -> i64 {
        self.precision() as i64 - self.scale as i64
    }

    /// Both unscaled values brought to the larger of the two scales.
    fn align(&self, other: &BigDec) -> (BigInt, BigInt, i32) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.int_val.clone(), other.int_val.clone(), self.scale),
            Ordering::Less => {
                let diff = other.scale.abs_diff(self.scale);
                (&self.int_val * &BigInt::ten_pow(diff), other.int_val.clone(), other.scale)
            }
            Ordering::Greater => {
                let diff = self.scale.abs_diff(other.scale);
                (self.int_val.clone(), &other.int_val * &BigInt::ten_pow(diff), self.scale)
            }
        }
    }

    pub fn compare(&self, other: &BigDec) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl From<BigInt> for BigDec {
    fn from(val: BigInt) -> Self {
        BigDec::new(val, 0)
    }
}

impl From<i64> for BigDec {
    fn from(val: i64) -> Self {
        BigDec::new(BigInt::from(val), 0)
    }
}

impl From<i32> for BigDec {
    fn from(val: i32) -> Self {
        BigDec::new(BigInt::from(val), 0)
    }
}

impl PartialEq for BigDec {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigDec {}

impl PartialOrd for BigDec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigDec {
    fn cmp(&self, other: &Self) -> Ordering {
        let sign = self.signum();
        match sign.cmp(&other.signum()) {
            Ordering::Equal if sign == 0 => return Ordering::Equal,
            Ordering::Equal => {}
            ord => return ord,
        }
        if self.scale == other.scale {
            return self.int_val.cmp(&other.int_val);
        }
        // Same sign: the position of the leading digit settles most cases
        let by_magnitude = match self.adjusted_exponent().cmp(&other.adjusted_exponent()) {
            Ordering::Equal => {
                let (a, b, _) = self.align(other);
                return a.cmp(&b);
            }
            ord => ord,
        };
        if sign > 0 {
            by_magnitude
        } else {
            by_magnitude.reverse()
        }
    }
}

impl Neg for BigDec {
    type Output = BigDec;

    fn neg(self) -> Self::Output {
        BigDec::new(-self.int_val, self.scale)
    }
}

impl Neg for &BigDec {
    type Output = BigDec;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// 精确运算
impl BigDec {
    fn add_ref(&self, other: &BigDec) -> BigDec {
        let (a, b, scale) = self.align(other);
        BigDec::new(a + b, scale)
    }

    fn sub_ref(&self, other: &BigDec) -> BigDec {
        let (a, b, scale) = self.align(other);
        BigDec::new(a - b, scale)
    }

    /// Exact product at scale `self.scale + other.scale`.
    pub fn checked_mul(&self, other: &BigDec) -> Result<BigDec> {
        let scale = checked_scale(self.scale as i64 + other.scale as i64)?;
        Ok(BigDec::new(&self.int_val * &other.int_val, scale))
    }

    fn mul_ref(&self, other: &BigDec) -> BigDec {
        match self.checked_mul(other) {
            Ok(product) => product,
            Err(e) => panic!("{}", e),
        }
    }

    /// Exact power at scale `self.scale * exponent`.
    pub fn pow(&self, exponent: u32) -> Result<BigDec> {
        let scale = checked_scale(self.scale as i64 * exponent as i64)?;
        Ok(BigDec::new(self.int_val.pow(exponent), scale))
    }
}

forward_binop!(BigDec, Add, add, AddAssign, add_assign, add_ref);
forward_binop!(BigDec, Sub, sub, SubAssign, sub_assign, sub_ref);
// panics if the product's scale leaves the i32 range, see `checked_mul`
forward_binop!(BigDec, Mul, mul, MulAssign, mul_assign, mul_ref);

// 指定标度的运算
impl BigDec {
    pub fn add_with_scale(&self, other: &BigDec, scale: i32, mode: RoundingMode) -> Result<BigDec> {
        if self.is_zero() {
            return other.set_scale(scale, mode);
        }
        if other.is_zero() {
            return self.set_scale(scale, mode);
        }
        let a = self.sticky_operand(other, scale);
        let b = other.sticky_operand(self, scale);
        a.add_ref(&b).set_scale(scale, mode)
    }

    pub fn sub_with_scale(&self, other: &BigDec, scale: i32, mode: RoundingMode) -> Result<BigDec> {
        self.add_with_scale(&other.negate(), scale, mode)
    }

    /// `self` as an addend of `other` in a sum rounded to `scale`.
    ///
    /// With `finest = max(scale, other.scale)`, no rounding boundary at `scale`
    /// lies strictly between `other` and `other + self` once
    /// `|self| < 10^-(finest + 1)`. Any addend of that size and sign then
    /// rounds alike, so a single digit at scale `finest + 2` stands in for it
    /// and the two operands align without a huge power of ten.
    fn sticky_operand(&self, other: &BigDec, scale: i32) -> BigDec {
        let finest = scale.max(other.scale) as i64;
        let stand_in_scale = finest + 2;
        let leading = self.scale as i64 - self.int_val.max_decimal_digits() as i64;
        if stand_in_scale > i32::MAX as i64 || leading < stand_in_scale {
            return self.clone();
        }
        let unit = if self.signum() < 0 { BigInt::from(-1) } else { BigInt::one() };
        BigDec::new(unit, stand_in_scale as i32)
    }

    pub fn mul_with_scale(&self, other: &BigDec, scale: i32, mode: RoundingMode) -> Result<BigDec> {
        let product = &self.int_val * &other.int_val;
        let product_scale = self.scale as i64 + other.scale as i64;
        Ok(BigDec::new(rescale(&product, product_scale, scale, mode)?, scale))
    }

    /// `self / other` with `scale` fraction digits.
    ///
    /// The dividend (or the divisor) is multiplied by a power of ten so that a
    /// single integer division yields the quotient directly at `scale`; its
    /// remainder then decides the rounding.
    pub fn div_with_scale(&self, other: &BigDec, scale: i32, mode: RoundingMode) -> Result<BigDec> {
        if other.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        let shift = other.scale as i64 + scale as i64 - self.scale as i64;
        let q = if self.is_zero() {
            ZERO
        } else if shift >= 0 {
            div_round(&(&self.int_val * &ten_pow(shift)?), &other.int_val, mode, scale)?
        } else if vanishes_below(&self.int_val, shift.unsigned_abs()) {
            // |self| < |other| * 10^(-shift) / 10
            round_below_half(self.signum() * other.signum() < 0, mode, scale)?
        } else {
            div_round(&self.int_val, &(&other.int_val * &ten_pow(-shift)?), mode, scale)?
        };
        Ok(BigDec::new(q, scale))
    }

    /// Same value at `new_scale`. Growing the scale is exact; shrinking it
    /// rounds with `mode`.
    pub fn set_scale(&self, new_scale: i32, mode: RoundingMode) -> Result<BigDec> {
        if new_scale == self.scale {
            return Ok(self.clone());
        }
        let int_val = rescale(&self.int_val, self.scale as i64, new_scale, mode)?;
        Ok(BigDec::new(int_val, new_scale))
    }

    /// Square root with `scale` fraction digits.
    ///
    /// With `x = sqrt(self) * 10^scale`, the integer square root gives
    /// `q = floor(x)` and comparing `4x^2` with `(2q + 1)^2` tells which side of
    /// the midpoint `x` falls on, all in integers.
    pub fn sqrt(&self, scale: i32, mode: RoundingMode) -> Result<BigDec> {
        if self.signum() < 0 {
            return Err(NumError::NegativeOperand { operation: "square root" });
        }
        if self.is_zero() {
            return Ok(BigDec::new(ZERO, scale));
        }
        // x^2 = unscaled * 10^exp
        let exp = 2 * scale as i64 - self.scale as i64;
        if exp < 0 && vanishes_below(&self.int_val, exp.unsigned_abs()) {
            // x^2 < 1/10 puts x below the midpoint 1/2
            return Ok(BigDec::new(round_below_half(false, mode, scale)?, scale));
        }
        let (square, denom) = if exp >= 0 {
            (&self.int_val * &ten_pow(exp)?, BigInt::one())
        } else {
            (self.int_val.clone(), ten_pow(-exp)?)
        };
        let q = square.checked_div(&denom)?.sqrt()?;
        if &(&q * &q) * &denom == square {
            return Ok(BigDec::new(q, scale));
        }
        if mode == RoundingMode::Unnecessary {
            return Err(NumError::Inexact { scale });
        }
        let mid = (&q << 1) + BigInt::one();
        let half_cmp = (square << 2).cmp(&(&(&mid * &mid) * &denom));
        let q = if mode.increments(half_cmp, false, q.is_odd()) {
            q + BigInt::one()
        } else {
            q
        };
        Ok(BigDec::new(q, scale))
    }

    /// Smallest scale that still represents the same value; zero ends up at scale 0.
    pub fn strip_trailing_zeros(&self) -> BigDec {
        if self.is_zero() {
            return BigDec::zero();
        }
        let ten = BigInt::from(10);
        let mut int_val = self.int_val.clone();
        let mut scale = self.scale;
        while scale > i32::MIN {
            match int_val.div_rem(&ten) {
                Ok((q, r)) if r.is_zero() => {
                    int_val = q;
                    scale -= 1;
                }
                _ => break,
            }
        }
        BigDec::new(int_val, scale)
    }

    /// Integer part, truncated toward zero.
    pub fn to_big_int(&self) -> BigInt {
        if self.is_zero() || vanishes_below(&self.int_val, self.scale.max(0) as u64) {
            return ZERO;
        }
        if self.scale <= 0 {
            return &self.int_val * &BigInt::ten_pow(self.scale.unsigned_abs());
        }
        let divisor = BigInt::ten_pow(self.scale.unsigned_abs());
        match self.int_val.checked_div(&divisor) {
            Ok(q) => q,
            Err(_) => ZERO,
        }
    }
}

// 解析
impl FromStr for BigDec {
    type Err = NumError;

    /// `["+" | "-"] digit+ ["." digit*] [("e" | "E") ["+" | "-"] digit+]`
    fn from_str(val: &str) -> Result<Self> {
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

        let (negative, body) = match val.as_bytes().first() {
            Some(b'-') => (true, &val[1..]),
            Some(b'+') => (false, &val[1..]),
            _ => (false, val),
        };
        let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
            None => (body, None),
        };
        let (int_part, frac_part) = match mantissa.find('.') {
            Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
            None => (mantissa, ""),
        };
        if int_part.is_empty() {
            return Err(NumError::parse(val, "missing integer digits"));
        }
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(NumError::parse(val, "illegal digit"));
        }

        let exponent = match exponent {
            None => 0,
            Some(exp) => {
                let digits = exp.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(exp);
                if digits.is_empty() || !all_digits(digits) {
                    return Err(NumError::parse(val, "malformed exponent"));
                }
                exp.parse::<i64>()
                    .map_err(|_| NumError::parse(val, "exponent out of range"))?
            }
        };
        let scale = (frac_part.len() as i64)
            .checked_sub(exponent)
            .and_then(|scale| i32::try_from(scale).ok())
            .ok_or_else(|| NumError::parse(val, "scale out of range"))?;

        let mut digits = String::with_capacity(int_part.len() + frac_part.len());
        digits.push_str(int_part);
        digits.push_str(frac_part);
        let magnitude = BigInt::from_str_radix(&digits, 10)?;
        let int_val = if negative { -magnitude } else { magnitude };
        Ok(BigDec::new(int_val, scale))
    }
}

// 打印
impl BigDec {
    /// Decimal notation without an exponent, whatever the scale.
    pub fn to_plain_string(&self) -> String {
        if self.scale >= 0 {
            return self.fixed_point_string();
        }
        if self.is_zero() {
            return String::from("0");
        }
        let mut result = self.int_val.to_string();
        result.extend(std::iter::repeat('0').take(self.scale.unsigned_abs() as usize));
        result
    }

    fn fixed_point_string(&self) -> String {
        let coefficient = self.int_val.abs().to_string();
        let scale = self.scale as usize;
        let mut result = String::with_capacity(coefficient.len() + scale + 3);
        if self.signum() < 0 {
            result.push('-');
        }
        if scale == 0 {
            result.push_str(&coefficient);
        } else if coefficient.len() > scale {
            let (int_part, frac_part) = coefficient.split_at(coefficient.len() - scale);
            result.push_str(int_part);
            result.push('.');
            result.push_str(frac_part);
        } else {
            result.push_str("0.");
            result.extend(std::iter::repeat('0').take(scale - coefficient.len()));
            result.push_str(&coefficient);
        }
        result
    }

    /// `d.dddE+n`, used for negative scales so the scale survives a reparse.
    fn scientific_string(&self) -> String {
        let coefficient = self.int_val.abs().to_string();
        let adjusted = coefficient.len() as i64 - 1 - self.scale as i64;
        let mut result = String::with_capacity(coefficient.len() + 16);
        if self.signum() < 0 {
            result.push('-');
        }
        let (lead, rest) = coefficient.split_at(1);
        result.push_str(lead);
        if !rest.is_empty() {
            result.push('.');
            result.push_str(rest);
        }
        result.push_str(&format!("E{:+}", adjusted));
        result
    }
}

impl Display for BigDec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.scale >= 0 {
            f.write_str(&self.fixed_point_string())
        } else {
            f.write_str(&self.scientific_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDec {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_scale() {
        let cases = [
            ("0", 0, 0),
            ("123.45", 12345, 2),
            ("-0.05", -5, 2),
            ("+7.", 7, 0),
            ("1.000", 1000, 3),
            ("1.23E+5", 123, -3),
            ("1.23e5", 123, -3),
            ("12E-3", 12, 3),
            ("-4.5e-2", -45, 3),
            ("0E+3", 0, -3),
        ];
        for (text, unscaled, scale) in cases {
            let d = dec(text);
            assert_eq!(d.unscaled(), &BigInt::from(unscaled), "unscaled of {}", text);
            assert_eq!(d.scale(), scale, "scale of {}", text);
        }
    }

    #[test]
    fn test_parse_rejects() {
        let bad = [
            "", "-", "+", ".5", "-.5", "1.2.3", "1e", "1e+", "1ee5", "1e5.0", "1e+-5",
            " 1", "1 ", "abc", "1_000", "--1", "1e99999999999", "1e99999999999999999999",
        ];
        for text in bad {
            assert!(
                matches!(text.parse::<BigDec>(), Err(NumError::Parse { .. })),
                "accepted {:?}",
                text
            );
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(dec("0.05").to_string(), "0.05");
        assert_eq!(dec("-12.340").to_string(), "-12.340");
        assert_eq!(dec("-0.001").to_string(), "-0.001");
        assert_eq!(dec("0.00").to_string(), "0.00");
        assert_eq!(dec("-0.00").to_string(), "0.00");
        assert_eq!(dec("1.23E+5").to_string(), "1.23E+5");
        assert_eq!(dec("-5e2").to_string(), "-5E+2");
        assert_eq!(dec("0E+3").to_string(), "0E+3");
        assert_eq!(dec("1.23E+5").to_plain_string(), "123000");
        assert_eq!(dec("0E+3").to_plain_string(), "0");
        assert_eq!(dec("12E-3").to_plain_string(), "0.012");
    }

    #[test]
    fn test_round_trip_keeps_scale() {
        for text in ["0", "0.000", "-1.5", "123456789.987654321", "1.23E+5", "-9E+10", "0E+3"] {
            let d = dec(text);
            let again = dec(&d.to_string());
            assert_eq!(again, d);
            assert_eq!(again.scale(), d.scale());
            assert_eq!(again.unscaled(), d.unscaled());
        }
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(dec("1.0"), dec("1.00"));
        assert_eq!(dec("1.0").compare(&dec("1.00")), 0);
        assert_eq!(dec("0"), dec("0.000"));
        assert_eq!(dec("1E+2"), dec("100"));
        assert_ne!(dec("1.01"), dec("1.001"));
        assert_eq!(dec("0.00").signum(), 0);
        assert_eq!(dec("-0.01").signum(), -1);
    }

    #[test]
    fn test_ordering() {
        assert!(dec("0.1") > dec("0.09999"));
        assert!(dec("-0.1") < dec("-0.09999"));
        assert!(dec("123.4") > dec("99.99"));
        assert!(dec("-123.4") < dec("-99.99"));
        assert!(dec("2") > dec("-3"));
        assert!(dec("1.23E+5") > dec("122999.99"));
        assert_eq!(dec("1.5").max(dec("1.49")), dec("1.5"));
    }

    #[test]
    fn test_rounding_table() {
        use RoundingMode::*;
        let inputs = ["5.5", "2.5", "1.6", "1.1", "1.0", "-1.0", "-1.1", "-1.6", "-2.5", "-5.5"];
        let expected: [(RoundingMode, [i64; 10]); 7] = [
            (Up, [6, 3, 2, 2, 1, -1, -2, -2, -3, -6]),
            (Down, [5, 2, 1, 1, 1, -1, -1, -1, -2, -5]),
            (Ceiling, [6, 3, 2, 2, 1, -1, -1, -1, -2, -5]),
            (Floor, [5, 2, 1, 1, 1, -1, -2, -2, -3, -6]),
            (HalfUp, [6, 3, 2, 1, 1, -1, -1, -2, -3, -6]),
            (HalfDown, [5, 2, 2, 1, 1, -1, -1, -2, -2, -5]),
            (HalfEven, [6, 2, 2, 1, 1, -1, -1, -2, -2, -6]),
        ];
        for (mode, results) in expected {
            for (input, &want) in inputs.iter().zip(results.iter()) {
                let got = dec(input).set_scale(0, mode).unwrap();
                assert_eq!(got.scale(), 0);
                assert_eq!(got, BigDec::from(want), "{} rounded {}", input, mode);
            }
        }
        assert_eq!(dec("1.0").set_scale(0, Unnecessary).unwrap(), BigDec::from(1));
        assert_eq!(dec("-1.0").set_scale(0, Unnecessary).unwrap(), BigDec::from(-1));
        for input in ["5.5", "1.1", "-1.6"] {
            assert_eq!(
                dec(input).set_scale(0, Unnecessary),
                Err(NumError::Inexact { scale: 0 })
            );
        }
    }

    #[test]
    fn test_set_scale() {
        let d = dec("123.451").set_scale(2, RoundingMode::Ceiling).unwrap();
        assert_eq!(d.to_string(), "123.46");
        assert_eq!(dec("2.5").set_scale(0, RoundingMode::HalfEven).unwrap().to_string(), "2");
        assert_eq!(dec("3.5").set_scale(0, RoundingMode::HalfEven).unwrap().to_string(), "4");
        assert_eq!(dec("1.5").set_scale(4, RoundingMode::Unnecessary).unwrap().to_string(), "1.5000");
        assert_eq!(dec("-0.4").set_scale(0, RoundingMode::Up).unwrap().to_string(), "-1");
        assert_eq!(dec("1234").set_scale(-2, RoundingMode::HalfUp).unwrap().to_string(), "1.2E+3");
        assert_eq!(dec("0.004").set_scale(2, RoundingMode::HalfUp).unwrap().to_string(), "0.00");
    }

    #[test]
    fn test_add_sub_with_scale() {
        let r = dec("123.456").add_with_scale(&dec("789.123"), 3, RoundingMode::HalfUp).unwrap();
        assert_eq!(r.to_string(), "912.579");
        let r = dec("1.005").add_with_scale(&dec("1"), 2, RoundingMode::HalfEven).unwrap();
        assert_eq!(r.to_string(), "2.00");
        let r = dec("1.5").sub_with_scale(&dec("3.25"), 4, RoundingMode::HalfUp).unwrap();
        assert_eq!(r.to_string(), "-1.7500");
        assert_eq!((dec("1.5") + dec("0.25")).to_string(), "1.75");
        assert_eq!((dec("1.5") - dec("1.50")).to_string(), "0.00");
    }

    #[test]
    fn test_mul_with_scale() {
        let r = dec("1.25").mul_with_scale(&dec("1.25"), 2, RoundingMode::HalfEven).unwrap();
        assert_eq!(r.to_string(), "1.56");
        let r = dec("1.25").mul_with_scale(&dec("1.25"), 2, RoundingMode::HalfUp).unwrap();
        assert_eq!(r.to_string(), "1.56");
        let r = dec("-2.5").mul_with_scale(&dec("0.3"), 1, RoundingMode::Floor).unwrap();
        assert_eq!(r.to_string(), "-0.8");
        assert_eq!((dec("1.5") * dec("-0.02")).to_string(), "-0.030");
        assert!(matches!(
            dec("1E-2147483647").checked_mul(&dec("0.1")),
            Err(NumError::Overflow { .. })
        ));
    }

    #[test]
    fn test_div_with_scale() {
        let r = dec("10").div_with_scale(&dec("3"), 4, RoundingMode::HalfUp).unwrap();
        assert_eq!(r.to_string(), "3.3333");
        let r = dec("123.45").div_with_scale(&dec("12.34"), 2, RoundingMode::HalfUp).unwrap();
        assert_eq!(r.to_string(), "10.00");
        let r = dec("2").div_with_scale(&dec("3"), 2, RoundingMode::HalfUp).unwrap();
        assert_eq!(r.to_string(), "0.67");
        let r = dec("-2").div_with_scale(&dec("3"), 2, RoundingMode::Down).unwrap();
        assert_eq!(r.to_string(), "-0.66");
        let r = dec("1").div_with_scale(&dec("8"), 2, RoundingMode::HalfEven).unwrap();
        assert_eq!(r.to_string(), "0.12");
        let r = dec("1").div_with_scale(&dec("0.001"), 0, RoundingMode::Unnecessary).unwrap();
        assert_eq!(r.to_string(), "1000");
        let r = dec("12345").div_with_scale(&dec("1"), -2, RoundingMode::HalfUp).unwrap();
        assert_eq!(r.to_plain_string(), "12300");
        assert_eq!(
            dec("1").div_with_scale(&dec("3"), 2, RoundingMode::Unnecessary),
            Err(NumError::Inexact { scale: 2 })
        );
        assert_eq!(
            dec("5").div_with_scale(&dec("0.00"), 2, RoundingMode::HalfUp),
            Err(NumError::DivisionByZero)
        );
    }

    #[test]
    fn test_to_big_int_truncates() {
        assert_eq!(dec("123.999").to_big_int(), BigInt::from(123));
        assert_eq!(dec("-123.999").to_big_int(), BigInt::from(-123));
        assert_eq!(dec("-0.5").to_big_int(), BigInt::zero());
        assert_eq!(dec("1.5E+3").to_big_int(), BigInt::from(1500));
    }

    #[test]
    fn test_pow_sqrt() {
        assert_eq!(dec("1.5").pow(2).unwrap().to_string(), "2.25");
        assert_eq!(dec("-0.1").pow(3).unwrap().to_string(), "-0.001");
        assert_eq!(dec("7.25").pow(0).unwrap().to_string(), "1");
        assert!(matches!(dec("0.1").pow(u32::MAX), Err(NumError::Overflow { .. })));

        assert_eq!(dec("2").sqrt(10, RoundingMode::HalfUp).unwrap().to_string(), "1.4142135624");
        assert_eq!(dec("2").sqrt(3, RoundingMode::Down).unwrap().to_string(), "1.414");
        assert_eq!(dec("2.25").sqrt(1, RoundingMode::Unnecessary).unwrap().to_string(), "1.5");
        assert_eq!(dec("0.0625").sqrt(3, RoundingMode::Unnecessary).unwrap().to_string(), "0.250");
        // sqrt(0.2025) = 0.45 sits exactly on the midpoint at scale 1
        assert_eq!(dec("0.2025").sqrt(1, RoundingMode::HalfEven).unwrap().to_string(), "0.4");
        assert_eq!(dec("0.2025").sqrt(1, RoundingMode::HalfUp).unwrap().to_string(), "0.5");
        assert_eq!(
            dec("2").sqrt(2, RoundingMode::Unnecessary),
            Err(NumError::Inexact { scale: 2 })
        );
        assert!(matches!(
            dec("-1").sqrt(2, RoundingMode::HalfUp),
            Err(NumError::NegativeOperand { .. })
        ));
    }

    #[test]
    fn test_strip_and_precision() {
        let d = dec("12.3400").strip_trailing_zeros();
        assert_eq!((d.unscaled().clone(), d.scale()), (BigInt::from(1234), 2));
        let d = dec("1200").strip_trailing_zeros();
        assert_eq!(d.to_string(), "1.2E+3");
        assert_eq!(dec("0.000").strip_trailing_zeros().scale(), 0);
        assert_eq!(dec("123.45").precision(), 5);
        assert_eq!(dec("-0.001").precision(), 1);
        assert_eq!(dec("0.00").precision(), 1);
    }

    #[test]
    fn test_precision_at_powers_of_ten() {
        assert_eq!(dec("99999999999999999999").precision(), 20);
        assert_eq!(dec("100000000000000000000").precision(), 21);
        assert_eq!(dec("-1E-2147483647").precision(), 1);
    }

    #[test]
    fn test_set_scale_far_below_last_digit() {
        let one = dec("1");
        let cases = [
            (RoundingMode::Up, "1E+2147483648"),
            (RoundingMode::Down, "0E+2147483648"),
            (RoundingMode::Ceiling, "1E+2147483648"),
            (RoundingMode::Floor, "0E+2147483648"),
            (RoundingMode::HalfUp, "0E+2147483648"),
            (RoundingMode::HalfDown, "0E+2147483648"),
            (RoundingMode::HalfEven, "0E+2147483648"),
        ];
        for (mode, expected) in cases {
            assert_eq!(one.set_scale(i32::MIN, mode).unwrap().to_string(), expected, "{}", mode);
        }
        assert_eq!(dec("-1").set_scale(i32::MIN, RoundingMode::Floor).unwrap().to_string(), "-1E+2147483648");
        assert_eq!(dec("-1").set_scale(i32::MIN, RoundingMode::Ceiling).unwrap().to_string(), "0E+2147483648");
        assert_eq!(one.set_scale(i32::MIN, RoundingMode::Unnecessary), Err(NumError::Inexact { scale: i32::MIN }));
        assert_eq!(dec("0").set_scale(i32::MIN, RoundingMode::Unnecessary).unwrap().to_string(), "0E+2147483648");

        let tiny = dec("1E-2147483647");
        assert_eq!(tiny.scale(), i32::MAX);
        assert_eq!(tiny.set_scale(0, RoundingMode::Up).unwrap().to_string(), "1");
        assert_eq!(tiny.set_scale(0, RoundingMode::Ceiling).unwrap().to_string(), "1");
        assert_eq!(tiny.set_scale(0, RoundingMode::HalfUp).unwrap().to_string(), "0");
        assert_eq!(tiny.set_scale(0, RoundingMode::Floor).unwrap().to_string(), "0");
        assert_eq!(tiny.negate().set_scale(0, RoundingMode::Floor).unwrap().to_string(), "-1");
        assert_eq!(tiny.negate().set_scale(0, RoundingMode::Ceiling).unwrap().to_string(), "0");
        assert_eq!(tiny.set_scale(i32::MIN, RoundingMode::Up).unwrap().to_string(), "1E+2147483648");

        // one digit short of the scale is still an ordinary division
        let d = dec("5E-2147483647").set_scale(i32::MAX - 1, RoundingMode::HalfUp).unwrap();
        assert_eq!((d.unscaled().clone(), d.scale()), (BigInt::one(), i32::MAX - 1));
    }

    #[test]
    fn test_to_big_int_far_below_one() {
        assert_eq!(dec("1E-2147483647").to_big_int(), BigInt::zero());
        assert_eq!(dec("-999E-2147483647").to_big_int(), BigInt::zero());
        assert_eq!(dec("0E+2147483647").to_big_int(), BigInt::zero());
        assert_eq!(dec("0.999").to_big_int(), BigInt::zero());
    }

    #[test]
    fn test_arithmetic_at_extreme_scales() {
        let tiny = dec("1E-2147483647");

        let r = tiny.mul_with_scale(&tiny, i32::MIN, RoundingMode::HalfUp).unwrap();
        assert_eq!(r.to_string(), "0E+2147483648");
        let r = tiny.mul_with_scale(&tiny, i32::MIN, RoundingMode::Up).unwrap();
        assert_eq!(r.to_string(), "1E+2147483648");
        let r = tiny.mul_with_scale(&tiny.negate(), 0, RoundingMode::Floor).unwrap();
        assert_eq!(r.to_string(), "-1");

        let huge = dec("1E+2147483647");
        let r = tiny.div_with_scale(&huge, -10, RoundingMode::HalfUp).unwrap();
        assert_eq!(r.to_string(), "0E+10");
        let r = tiny.div_with_scale(&huge, -10, RoundingMode::Ceiling).unwrap();
        assert_eq!(r.to_string(), "1E+10");
        let r = tiny.negate().div_with_scale(&huge, 0, RoundingMode::Up).unwrap();
        assert_eq!(r.to_string(), "-1");
        assert_eq!(
            tiny.div_with_scale(&huge, 0, RoundingMode::Unnecessary),
            Err(NumError::Inexact { scale: 0 })
        );

        let one = dec("1");
        assert_eq!(one.add_with_scale(&tiny, 0, RoundingMode::Up).unwrap().to_string(), "2");
        assert_eq!(one.add_with_scale(&tiny, 0, RoundingMode::HalfUp).unwrap().to_string(), "1");
        assert_eq!(tiny.add_with_scale(&one, 2, RoundingMode::Ceiling).unwrap().to_string(), "1.01");
        assert_eq!(one.sub_with_scale(&tiny, 0, RoundingMode::Down).unwrap().to_string(), "0");
        assert_eq!(one.sub_with_scale(&tiny, 0, RoundingMode::Ceiling).unwrap().to_string(), "1");
        assert_eq!(dec("0.5").sub_with_scale(&tiny, 0, RoundingMode::HalfUp).unwrap().to_string(), "0");
        assert_eq!(dec("0.5").add_with_scale(&tiny, 0, RoundingMode::HalfDown).unwrap().to_string(), "1");
        assert_eq!(
            one.add_with_scale(&tiny, 0, RoundingMode::Unnecessary),
            Err(NumError::Inexact { scale: 0 })
        );
        assert_eq!(dec("0E-2147483647").add_with_scale(&one, 0, RoundingMode::Unnecessary).unwrap().to_string(), "1");

        assert_eq!(tiny.sqrt(0, RoundingMode::Up).unwrap().to_string(), "1");
        assert_eq!(tiny.sqrt(0, RoundingMode::HalfUp).unwrap().to_string(), "0");
        assert_eq!(dec("0E-2147483647").sqrt(3, RoundingMode::Unnecessary).unwrap().to_string(), "0.000");
    }

    #[test]
    fn test_abs_neg() {
        assert_eq!(dec("-1.50").abs().to_string(), "1.50");
        assert_eq!((-dec("1.50")).to_string(), "-1.50");
        assert_eq!((-&dec("-0.0")).to_string(), "0.0");
    }
}
