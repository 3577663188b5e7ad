//! # BigInt
//! Immutable arbitrary-precision integers kept as a sign and a little-endian
//! `u32` magnitude. Bitwise operations and shifts behave as if the value were
//! held in (infinitely sign-extended) two's-complement notation.
//! # Example
//! ```
//! use kbignum_engine::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", a.checked_div(&b).unwrap());
//! println!("a % b = {}", a.checked_rem(&b).unwrap());
//! println!("a << 10 = {}", &a << 10);
//! println!("a >> 10 = {}", &a >> 10);
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Shl, Shr, Neg, Not,
};
use std::str::FromStr;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::{NumError, Result};
use crate::magnitude;

pub const ZERO: BigInt = BigInt { signum: 0, mag: Vec::new() };

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    signum: i8,
    mag: Vec<u32>,
}

// 构造
impl BigInt {
    /// Builds a value from a little-endian magnitude and restores canonical form,
    /// so zero always ends up as `signum == 0` with an empty magnitude.
    pub(crate) fn from_mag(mut mag: Vec<u32>, signum: i8) -> BigInt {
        magnitude::trim(&mut mag);
        if mag.is_empty() || signum == 0 {
            ZERO
        } else {
            BigInt { signum: signum.signum(), mag }
        }
    }

    pub fn zero() -> BigInt {
        ZERO
    }

    pub fn one() -> BigInt {
        POS_CACHE[1].clone()
    }

    fn value_of(val: u64, signum: i8) -> BigInt {
        if val == 0 {
            ZERO
        } else if val <= MAX_CONSTANT as u64 {
            if signum == 1 {
                POS_CACHE[val as usize].clone()
            } else {
                NEG_CACHE[val as usize].clone()
            }
        } else {
            BigInt::from_mag(magnitude::from_u64(val), signum)
        }
    }

    /// `10^n`, served from the cache for small exponents.
    pub(crate) fn ten_pow(n: u32) -> BigInt {
        match POW10_CACHE.get(n as usize) {
            Some(cached) => cached.clone(),
            None => BigInt::from(10_u32).pow(n),
        }
    }
}

macro_rules! impl_unsigned_to_big_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, 1)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_num {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            let signum = if val < 0 { -1 } else { 1 };
            BigInt::value_of(val.unsigned_abs() as u64, signum)
        }
    }
    )*
    };
}
impl_unsigned_to_big_num!(u8, u16, u32, usize, u64);
impl_signed_to_big_num!(i8, i16, i32, isize, i64);

// 打印
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_str_radix(10))
    }
}

impl BigInt {
    /// Formats in the given radix; a radix outside `2..=36` falls back to 10.
    pub fn to_str_radix(&self, mut radix: u32) -> String {
        if self.signum == 0 {
            return String::from("0");
        }
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            radix = 10;
        }
        let group_len = DIGITS_PER_INT[radix as usize];
        let super_radix = INT_RADIX[radix as usize];

        // Peel off one digit group at a time, least significant first
        let mut digit_groups: Vec<u32> = Vec::with_capacity(self.mag.len() * 2);
        let mut tmp = self.mag.clone();
        while !tmp.is_empty() {
            let (q, r) = magnitude::div_rem_small(&tmp, super_radix);
            digit_groups.push(r);
            tmp = q;
        }

        let mut result = String::with_capacity(digit_groups.len() * group_len + 1);
        if self.signum < 0 {
            result.push('-');
        }
        let mut groups = digit_groups.iter().rev();
        if let Some(&first) = groups.next() {
            BigInt::push_digit_group(&mut result, first, radix, 0);
        }
        // Remaining digit groups are padded with leading zeros
        for &group in groups {
            BigInt::push_digit_group(&mut result, group, radix, group_len);
        }
        result
    }

    fn push_digit_group(s: &mut String, mut val: u32, radix: u32, pad: usize) {
        let mut digits: Vec<char> = Vec::with_capacity(pad.max(10));
        while val != 0 {
            digits.push(DIGITS[(val % radix) as usize]);
            val /= radix;
        }
        while digits.len() < pad {
            digits.push('0');
        }
        s.extend(digits.iter().rev());
    }

    /// Number of decimal digits of the magnitude, `1` for zero.
    ///
    /// Estimated from the bit length, which lands at most two digits short,
    /// then settled against powers of ten.
    pub(crate) fn decimal_digits(&self) -> usize {
        if self.signum == 0 {
            return 1;
        }
        let bits = magnitude::bit_length(&self.mag) as u128;
        let mut digits = (((bits - 1) * LOG10_2_Q64) >> 64) as usize + 1;
        let mut bound = BigInt::ten_pow(digits as u32);
        while self.compare_mag(&bound) != Ordering::Less {
            digits += 1;
            magnitude::mul_add_small(&mut bound.mag, 10, 0);
        }
        digits
    }

    /// Cheap upper bound on [`decimal_digits`](BigInt::decimal_digits).
    pub(crate) fn max_decimal_digits(&self) -> u64 {
        let bits = magnitude::bit_length(&self.mag) as u128;
        ((bits * (LOG10_2_Q64 + 1)) >> 64) as u64 + 1
    }
}

// 解析
impl FromStr for BigInt {
    type Err = NumError;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::from_str_radix(s, 10)
    }
}

impl BigInt {
    /// Parses `["+" | "-"] digit+` in the given radix. Leading zeros are allowed,
    /// whitespace and embedded signs are not.
    pub fn from_str_radix(val: &str, radix: u32) -> Result<BigInt> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(NumError::parse(val, "radix out of range"));
        }
        let (signum, digits) = match val.as_bytes().first() {
            None => return Err(NumError::parse(val, "zero length BigInt")),
            Some(b'-') => (-1, &val[1..]),
            Some(b'+') => (1, &val[1..]),
            Some(_) => (1, val),
        };
        if digits.is_empty() {
            return Err(NumError::parse(val, "sign without digits"));
        }
        if !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(NumError::parse(val, "illegal digit"));
        }

        // skip leading zero
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(ZERO);
        }

        let group_len = DIGITS_PER_INT[radix as usize];
        let super_radix = INT_RADIX[radix as usize];
        let group_value = |group: &str| {
            u32::from_str_radix(group, radix).map_err(|_| NumError::parse(val, "illegal digit"))
        };

        let mut first_group_len = digits.len() % group_len;
        if first_group_len == 0 {
            first_group_len = group_len;
        }
        let mut magnitude = magnitude::from_u64(group_value(&digits[..first_group_len])? as u64);
        magnitude.reserve(digits.len() / group_len + 1);

        let mut cursor = first_group_len;
        while cursor < digits.len() {
            let group = &digits[cursor..cursor + group_len];
            magnitude::mul_add_small(&mut magnitude, super_radix, group_value(group)?);
            cursor += group_len;
        }
        Ok(BigInt::from_mag(magnitude, signum))
    }
}

// 字节编码
impl BigInt {
    /// Decodes big-endian two's complement. Any length is accepted, an empty
    /// slice is zero and redundant sign-extension bytes are ignored.
    pub fn from_signed_bytes_be(bytes: &[u8]) -> BigInt {
        let negative = match bytes.first() {
            None => return ZERO,
            Some(&top) => top & 0x80 != 0,
        };
        let mut be = bytes.to_vec();
        if negative {
            negate_bytes(&mut be);
        }
        let mag: Vec<u32> = be
            .rchunks(4)
            .map(|chunk| chunk.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32))
            .collect();
        BigInt::from_mag(mag, if negative { -1 } else { 1 })
    }

    /// Encodes as minimal big-endian two's complement; zero is `[0x00]`.
    pub fn to_signed_bytes_be(&self) -> Vec<u8> {
        if self.signum == 0 {
            return vec![0];
        }
        let mut bytes: Vec<u8> = self
            .mag
            .iter()
            .rev()
            .flat_map(|limb| limb.to_be_bytes())
            .skip_while(|&b| b == 0)
            .collect();
        if self.signum > 0 {
            if bytes[0] & 0x80 != 0 {
                bytes.insert(0, 0x00);
            }
        } else {
            negate_bytes(&mut bytes);
            if bytes[0] & 0x80 == 0 {
                bytes.insert(0, 0xFF);
            }
        }
        bytes
    }
}

fn negate_bytes(bytes: &mut [u8]) {
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        let (val, overflow) = (!*b).overflowing_add(carry as u8);
        *b = val;
        carry = overflow;
    }
}

// 窄化
impl BigInt {
    /// Narrows to `i64`, failing with [`NumError::Overflow`] instead of saturating.
    pub fn to_i64(&self) -> Result<i64> {
        let overflow = || NumError::Overflow { target: "i64" };
        let m = magnitude::to_u64(&self.mag).ok_or_else(overflow)?;
        match self.signum {
            0 => Ok(0),
            1 => i64::try_from(m).map_err(|_| overflow()),
            _ if m <= i64::MAX as u64 => Ok(-(m as i64)),
            _ if m == 1 << 63 => Ok(i64::MIN),
            _ => Err(overflow()),
        }
    }

    pub fn to_i32(&self) -> Result<i32> {
        let overflow = || NumError::Overflow { target: "i32" };
        let val = self.to_i64().map_err(|_| overflow())?;
        i32::try_from(val).map_err(|_| overflow())
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = NumError;

    fn try_from(val: &BigInt) -> Result<i64> {
        val.to_i64()
    }
}

impl TryFrom<&BigInt> for i32 {
    type Error = NumError;

    fn try_from(val: &BigInt) -> Result<i32> {
        val.to_i32()
    }
}

// 符号
impl BigInt {
    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i32 {
        self.signum as i32
    }

    pub fn is_zero(&self) -> bool {
        self.signum == 0
    }

    pub fn is_negative(&self) -> bool {
        self.signum < 0
    }

    pub fn is_positive(&self) -> bool {
        self.signum > 0
    }

    pub(crate) fn is_odd(&self) -> bool {
        self.mag.first().map_or(false, |&low| low & 1 == 1)
    }

    pub fn abs(&self) -> BigInt {
        BigInt { signum: self.signum.abs(), mag: self.mag.clone() }
    }

    pub fn negate(&self) -> BigInt {
        BigInt { signum: -self.signum, mag: self.mag.clone() }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { signum, mag } = self;
        BigInt { signum: -signum, mag }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// 大小比较
impl BigInt {
    fn compare_mag(&self, other: &BigInt) -> Ordering {
        magnitude::compare(&self.mag, &other.mag)
    }

    /// Three-way comparison as `-1`, `0` or `1`.
    pub fn compare(&self, other: &BigInt) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum.cmp(&other.signum) {
            Ordering::Equal => {}
            ord => return ord,
        }
        if self.signum >= 0 {
            self.compare_mag(other)
        } else {
            self.compare_mag(other).reverse()
        }
    }
}

// 加减法
impl BigInt {
    fn add_signed(&self, val: &BigInt, val_signum: i8) -> BigInt {
        if val_signum == 0 {
            return self.clone();
        }
        if self.signum == 0 {
            return BigInt { signum: val_signum, mag: val.mag.clone() };
        }
        if val_signum == self.signum {
            return BigInt::from_mag(magnitude::add(&self.mag, &val.mag), self.signum);
        }
        match self.compare_mag(val) {
            Ordering::Less => BigInt::from_mag(magnitude::sub(&val.mag, &self.mag), val_signum),
            Ordering::Equal => ZERO,
            Ordering::Greater => BigInt::from_mag(magnitude::sub(&self.mag, &val.mag), self.signum),
        }
    }

    fn add_ref(&self, val: &BigInt) -> BigInt {
        self.add_signed(val, val.signum)
    }

    fn sub_ref(&self, val: &BigInt) -> BigInt {
        self.add_signed(val, -val.signum)
    }
}

forward_binop!(BigInt, Add, add, AddAssign, add_assign, add_ref);
forward_binop!(BigInt, Sub, sub, SubAssign, sub_assign, sub_ref);

// 乘法
impl BigInt {
    fn mul_ref(&self, val: &BigInt) -> BigInt {
        if self.signum == 0 || val.signum == 0 {
            return ZERO;
        }
        BigInt::from_mag(magnitude::mul(&self.mag, &val.mag), self.signum * val.signum)
    }

    /// `self ^ exponent` by repeated squaring; anything to the power zero is one.
    pub fn pow(&self, exponent: u32) -> BigInt {
        if exponent == 0 {
            return BigInt::one();
        }
        if self.signum == 0 {
            return ZERO;
        }
        let mut result = BigInt::one();
        let mut base = self.clone();
        let mut exp = exponent;
        loop {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp == 0 {
                break;
            }
            base = &base * &base;
        }
        result
    }

    /// `n!`
    pub fn factorial(n: u32) -> BigInt {
        let mut mag = vec![1u32];
        for i in 2..=n {
            magnitude::mul_add_small(&mut mag, i, 0);
        }
        BigInt::from_mag(mag, 1)
    }
}

forward_binop!(BigInt, Mul, mul, MulAssign, mul_assign, mul_ref);

// 除法
impl BigInt {
    /// Truncating division. The quotient rounds toward zero and the remainder
    /// carries the sign of the dividend, so `q * val + r == self`.
    pub fn div_rem(&self, val: &BigInt) -> Result<(BigInt, BigInt)> {
        if val.signum == 0 {
            return Err(NumError::DivisionByZero);
        }
        if self.signum == 0 {
            return Ok((ZERO, ZERO));
        }
        let (q, r) = magnitude::div_rem(&self.mag, &val.mag);
        Ok((
            BigInt::from_mag(q, self.signum * val.signum),
            BigInt::from_mag(r, self.signum),
        ))
    }

    pub fn checked_div(&self, val: &BigInt) -> Result<BigInt> {
        self.div_rem(val).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, val: &BigInt) -> Result<BigInt> {
        self.div_rem(val).map(|(_, r)| r)
    }

    fn div_ref(&self, val: &BigInt) -> BigInt {
        match self.checked_div(val) {
            Ok(q) => q,
            Err(e) => panic!("{}", e),
        }
    }

    fn rem_ref(&self, val: &BigInt) -> BigInt {
        match self.checked_rem(val) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

// `/` and `%` panic on a zero divisor like the primitive integers do;
// `checked_div`, `checked_rem` and `div_rem` report it instead.
forward_binop!(BigInt, Div, div, DivAssign, div_assign, div_ref);
forward_binop!(BigInt, Rem, rem, RemAssign, rem_assign, rem_ref);

// 数论
impl BigInt {
    /// Non-negative greatest common divisor, `gcd(0, 0) == 0`.
    pub fn gcd(&self, val: &BigInt) -> BigInt {
        let mut a = self.mag.clone();
        let mut b = val.mag.clone();
        while !b.is_empty() {
            let (_, r) = magnitude::div_rem(&a, &b);
            a = b;
            b = r;
        }
        BigInt::from_mag(a, 1)
    }

    /// Non-negative least common multiple, zero when either operand is zero.
    pub fn lcm(&self, val: &BigInt) -> BigInt {
        if self.signum == 0 || val.signum == 0 {
            return ZERO;
        }
        let gcd = self.gcd(val);
        let (q, _) = magnitude::div_rem(&self.mag, &gcd.mag);
        BigInt::from_mag(magnitude::mul(&q, &val.mag), 1)
    }

    /// Floor of the square root, by Newton's iteration from above.
    pub fn sqrt(&self) -> Result<BigInt> {
        if self.signum < 0 {
            return Err(NumError::NegativeOperand { operation: "square root" });
        }
        if self.signum == 0 {
            return Ok(ZERO);
        }
        let bits = magnitude::bit_length(&self.mag);
        let mut x = magnitude::shl_bits(&[1], (bits + 1) / 2);
        loop {
            let (q, _) = magnitude::div_rem(&self.mag, &x);
            let y = magnitude::shr_bits(&magnitude::add(&x, &q), 1);
            if magnitude::compare(&y, &x) != Ordering::Less {
                return Ok(BigInt::from_mag(x, 1));
            }
            x = y;
        }
    }

    /// `self ^ exponent mod modulus`, always in `0..|modulus|`.
    pub fn mod_pow(&self, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt> {
        if modulus.signum == 0 {
            return Err(NumError::DivisionByZero);
        }
        if exponent.signum < 0 {
            return Err(NumError::NegativeOperand { operation: "modular exponentiation" });
        }
        let m = &modulus.mag;
        let mut base = magnitude::div_rem(&self.mag, m).1;
        if self.signum < 0 && !base.is_empty() {
            base = magnitude::sub(m, &base);
        }
        let mut result = magnitude::div_rem(&[1], m).1;
        for i in 0..magnitude::bit_length(&exponent.mag) {
            if exponent.mag[i >> 5] >> (i & 0x1f) & 1 == 1 {
                result = magnitude::div_rem(&magnitude::mul(&result, &base), m).1;
            }
            base = magnitude::div_rem(&magnitude::mul(&base, &base), m).1;
        }
        Ok(BigInt::from_mag(result, 1))
    }

    /// Primality test: trial division by small odd numbers, then Miller-Rabin
    /// with the fixed witnesses in `MILLER_RABIN_BASES`. The answer is exact
    /// below 3.3 * 10^24 and a strong probable-prime verdict above.
    pub fn is_probable_prime(&self) -> bool {
        if self.signum <= 0 {
            return false;
        }
        if let Some(small) = magnitude::to_u64(&self.mag) {
            if small < 4 {
                return small >= 2;
            }
        }
        if !self.is_odd() {
            return false;
        }
        for d in (3..PRIME_TRIAL_DIVISION_LIMIT).step_by(2) {
            if magnitude::div_rem_small(&self.mag, d).1 == 0 {
                return self.mag == [d];
            }
        }
        let limit = PRIME_TRIAL_DIVISION_LIMIT as u64;
        if magnitude::to_u64(&self.mag).map_or(false, |n| n < limit * limit) {
            return true;
        }

        // n - 1 = d * 2^s with d odd
        let n_minus_one = self - &BigInt::one();
        let s = n_minus_one.lowest_set_bit();
        let d = &n_minus_one >> s as u32;
        MILLER_RABIN_BASES.iter().all(|&witness| {
            let mut x = match BigInt::from(witness).mod_pow(&d, self) {
                Ok(x) => x,
                Err(_) => return false,
            };
            if x == BigInt::one() || x == n_minus_one {
                return true;
            }
            for _ in 1..s {
                x = (&x * &x) % self;
                if x == n_minus_one {
                    return true;
                }
            }
            false
        })
    }

    fn lowest_set_bit(&self) -> usize {
        self.mag
            .iter()
            .position(|&limb| limb != 0)
            .map_or(0, |i| (i << 5) + self.mag[i].trailing_zeros() as usize)
    }
}

// 位运算
impl BigInt {
    fn to_twos_complement(&self, len: usize) -> Vec<u32> {
        let mut limbs = self.mag.clone();
        limbs.resize(len, 0);
        if self.signum < 0 {
            negate_limbs(&mut limbs);
        }
        limbs
    }

    fn from_twos_complement(mut limbs: Vec<u32>) -> BigInt {
        let negative = limbs.last().map_or(false, |&top| top & 0x8000_0000 != 0);
        if negative {
            negate_limbs(&mut limbs);
            BigInt::from_mag(limbs, -1)
        } else {
            BigInt::from_mag(limbs, 1)
        }
    }

    fn bitwise(&self, val: &BigInt, op: impl Fn(u32, u32) -> u32) -> BigInt {
        // one spare limb keeps room for the sign bit of either operand
        let len = self.mag.len().max(val.mag.len()) + 1;
        let a = self.to_twos_complement(len);
        let b = val.to_twos_complement(len);
        BigInt::from_twos_complement(a.iter().zip(&b).map(|(&x, &y)| op(x, y)).collect())
    }

    fn and_ref(&self, val: &BigInt) -> BigInt {
        self.bitwise(val, |x, y| x & y)
    }

    fn or_ref(&self, val: &BigInt) -> BigInt {
        self.bitwise(val, |x, y| x | y)
    }

    fn xor_ref(&self, val: &BigInt) -> BigInt {
        self.bitwise(val, |x, y| x ^ y)
    }

    /// `self & !val`
    pub fn and_not(&self, val: &BigInt) -> BigInt {
        self.bitwise(val, |x, y| x & !y)
    }

    pub fn test_bit(&self, n: usize) -> bool {
        let idx = n >> 5;
        let limb = match self.mag.get(idx) {
            // past the magnitude only sign extension is left
            None => return self.signum < 0,
            Some(&limb) if self.signum >= 0 => limb,
            // the borrow of `-x` reaches this limb only when every lower limb is zero
            Some(&limb) if self.mag[..idx].iter().all(|&low| low == 0) => limb.wrapping_neg(),
            Some(&limb) => !limb,
        };
        limb >> (n & 0x1f) & 1 == 1
    }

    /// Bits in the minimal two's-complement form, excluding the sign bit.
    pub fn bit_length(&self) -> usize {
        let len = magnitude::bit_length(&self.mag);
        let is_pow2 = self.mag.iter().map(|limb| limb.count_ones()).sum::<u32>() == 1;
        if self.signum < 0 && is_pow2 {
            len - 1
        } else {
            len
        }
    }
}

fn negate_limbs(limbs: &mut [u32]) {
    let mut carry = true;
    for limb in limbs.iter_mut() {
        let (val, overflow) = (!*limb).overflowing_add(carry as u32);
        *limb = val;
        carry = overflow;
    }
}

forward_binop!(BigInt, BitAnd, bitand, BitAndAssign, bitand_assign, and_ref);
forward_binop!(BigInt, BitOr, bitor, BitOrAssign, bitor_assign, or_ref);
forward_binop!(BigInt, BitXor, bitxor, BitXorAssign, bitxor_assign, xor_ref);

impl Not for &BigInt {
    type Output = BigInt;

    /// `!x == -x - 1`
    fn not(self) -> Self::Output {
        &self.negate() - &BigInt::one()
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        !&self
    }
}

// 移位
impl Shl<u32> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        if self.signum == 0 || n == 0 {
            return self.clone();
        }
        BigInt::from_mag(magnitude::shl_bits(&self.mag, n as usize), self.signum)
    }
}

impl Shl<u32> for BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        &self << n
    }
}

impl Shr<u32> for &BigInt {
    type Output = BigInt;

    /// Arithmetic shift: negative values round toward negative infinity.
    fn shr(self, n: u32) -> Self::Output {
        if self.signum == 0 || n == 0 {
            return self.clone();
        }
        let n = n as usize;
        let mut shifted = magnitude::shr_bits(&self.mag, n);
        if self.signum < 0 && magnitude::has_low_bits(&self.mag, n) {
            shifted = magnitude::add(&shifted, &[1]);
        }
        BigInt::from_mag(shifted, self.signum)
    }
}

impl Shr<u32> for BigInt {
    type Output = BigInt;

    fn shr(self, n: u32) -> Self::Output {
        &self >> n
    }
}
