//! Unsigned magnitudes stored as little-endian `u32` limbs.
//!
//! Every function here expects trimmed input (no most-significant zero limb,
//! the empty slice is zero) and hands back trimmed output. Signs are none of
//! this module's business, `big_int` combines them.

use std::cmp::Ordering;

use crate::big_num_constants::KARATSUBA_THRESHOLD;

const LIMB_BITS: u32 = u32::BITS;
const LOW_MASK: u64 = 0xFFFF_FFFF;

macro_rules! bit_length_u32 {
    ($n: expr) => {
        (32 - $n.leading_zeros()) as usize
    };
}

pub(crate) fn trim(v: &mut Vec<u32>) {
    while let Some(&0) = v.last() {
        v.pop();
    }
}

fn trimmed(s: &[u32]) -> &[u32] {
    let len = s.iter().rposition(|&x| x != 0).map_or(0, |i| i + 1);
    &s[..len]
}

pub(crate) fn from_u64(val: u64) -> Vec<u32> {
    let mut mag = vec![val as u32, (val >> LIMB_BITS) as u32];
    trim(&mut mag);
    mag
}

pub(crate) fn to_u64(a: &[u32]) -> Option<u64> {
    match a.len() {
        0 => Some(0),
        1 => Some(a[0] as u64),
        2 => Some(((a[1] as u64) << LIMB_BITS) | a[0] as u64),
        _ => None,
    }
}

pub(crate) fn bit_length(a: &[u32]) -> usize {
    match a.last() {
        None => 0,
        Some(&top) => ((a.len() - 1) << 5) + bit_length_u32!(top),
    }
}

/// Length is the primary discriminator, then limbs from the most significant down.
pub(crate) fn compare(a: &[u32], b: &[u32]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

pub(crate) fn add(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut result = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;
    for (i, &x) in long.iter().enumerate() {
        let sum = x as u64 + short.get(i).copied().unwrap_or(0) as u64 + carry;
        result.push(sum as u32);
        carry = sum >> LIMB_BITS;
    }
    if carry != 0 {
        result.push(carry as u32);
    }
    result
}

/// `a - b`, the caller guarantees `a >= b`.
pub(crate) fn sub(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert!(compare(a, b) != Ordering::Less);
    let mut result = Vec::with_capacity(a.len());
    let mut borrow: i64 = 0;
    for (i, &x) in a.iter().enumerate() {
        let difference = x as i64 - b.get(i).copied().unwrap_or(0) as i64 + borrow;
        result.push(difference as u32);
        borrow = difference >> LIMB_BITS;
    }
    debug_assert_eq!(borrow, 0);
    trim(&mut result);
    result
}

pub(crate) fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    if a.len() < KARATSUBA_THRESHOLD || b.len() < KARATSUBA_THRESHOLD {
        return mul_to_len(a, b);
    }
    log::trace!("karatsuba multiply: {} x {} limbs", a.len(), b.len());
    mul_karatsuba(a, b)
}

fn mul_to_len(x: &[u32], y: &[u32]) -> Vec<u32> {
    let mut z = vec![0u32; x.len() + y.len()];
    for (i, &xi) in x.iter().enumerate() {
        if xi == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &yj) in y.iter().enumerate() {
            let product = xi as u64 * yj as u64 + z[i + j] as u64 + carry;
            z[i + j] = product as u32;
            carry = product >> LIMB_BITS;
        }
        z[i + y.len()] = carry as u32;
    }
    trim(&mut z);
    z
}

/// Multiplies two magnitudes using the Karatsuba algorithm.
///
/// Three half-size products replace the four of the grade-school method:
/// `x*y = z2*B^(2h) + ((x0+x1)(y0+y1) - z2 - z0)*B^h + z0` with `B = 2^32`.
/// Only worth it once both operands pass `KARATSUBA_THRESHOLD` limbs.
fn mul_karatsuba(x: &[u32], y: &[u32]) -> Vec<u32> {
    let half = (x.len().max(y.len()) + 1) / 2;

    let (x_low, x_high) = split_limbs(x, half);
    let (y_low, y_high) = split_limbs(y, half);

    let z0 = mul(x_low, y_low);
    let z2 = mul(x_high, y_high);
    let cross = mul(&add(x_low, x_high), &add(y_low, y_high));
    let z1 = sub(&sub(&cross, &z0), &z2);

    let mut result = vec![0u32; x.len() + y.len() + 1];
    add_at(&mut result, &z0, 0);
    add_at(&mut result, &z1, half);
    add_at(&mut result, &z2, 2 * half);
    trim(&mut result);
    result
}

fn split_limbs(v: &[u32], at: usize) -> (&[u32], &[u32]) {
    if v.len() <= at {
        (v, &[])
    } else {
        (trimmed(&v[..at]), &v[at..])
    }
}

fn add_at(acc: &mut [u32], x: &[u32], offset: usize) {
    let mut carry = 0u64;
    let mut index = offset;
    for &limb in x {
        let sum = acc[index] as u64 + limb as u64 + carry;
        acc[index] = sum as u32;
        carry = sum >> LIMB_BITS;
        index += 1;
    }
    while carry != 0 {
        let sum = acc[index] as u64 + carry;
        acc[index] = sum as u32;
        carry = sum >> LIMB_BITS;
        index += 1;
    }
}

/// In place `a = a * m + c`. Used to fold a digit group into a magnitude.
pub(crate) fn mul_add_small(a: &mut Vec<u32>, m: u32, c: u32) {
    let mut carry = c as u64;
    for x in a.iter_mut() {
        let product = *x as u64 * m as u64 + carry;
        *x = product as u32;
        carry = product >> LIMB_BITS;
    }
    if carry != 0 {
        a.push(carry as u32);
    }
}

/// Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1 exercise 16
pub(crate) fn div_rem_small(a: &[u32], d: u32) -> (Vec<u32>, u32) {
    debug_assert!(d != 0);
    let divisor = d as u64;
    let mut q = vec![0u32; a.len()];
    let mut rem = 0u64;
    for i in (0..a.len()).rev() {
        let current = (rem << LIMB_BITS) | a[i] as u64;
        q[i] = (current / divisor) as u32;
        rem = current % divisor;
    }
    trim(&mut q);
    (q, rem as u32)
}

/// Truncating division of magnitudes, returns `(quotient, remainder)`.
///
/// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1.
/// Panics if `v` is zero; callers check the divisor first.
pub(crate) fn div_rem(u: &[u32], v: &[u32]) -> (Vec<u32>, Vec<u32>) {
    assert!(!v.is_empty(), "magnitude division by zero");
    if compare(u, v) == Ordering::Less {
        return (Vec::new(), u.to_vec());
    }
    if v.len() == 1 {
        let (q, r) = div_rem_small(u, v[0]);
        let r = if r == 0 { Vec::new() } else { vec![r] };
        return (q, r);
    }
    log::trace!("knuth division: {} by {} limbs", u.len(), v.len());

    let n = v.len();
    let m = u.len() - n;

    // D1 normalize: shift so the top limb of v has its high bit set,
    // which keeps qhat at most two above the true quotient digit.
    let shift = v[n - 1].leading_zeros();
    let vn = normalize(v, shift, n);
    let mut un = normalize(u, shift, u.len() + 1);

    let base = 1u64 << LIMB_BITS;
    let v_top = vn[n - 1] as u64;
    let v_next = vn[n - 2] as u64;
    let mut q = vec![0u32; m + 1];

    // D2 .. D7
    for j in (0..=m).rev() {
        // D3 estimate qhat
        let numerator = ((un[j + n] as u64) << LIMB_BITS) | un[j + n - 1] as u64;
        let mut qhat = numerator / v_top;
        let mut rhat = numerator % v_top;
        while qhat >= base || qhat * v_next > ((rhat << LIMB_BITS) | un[j + n - 2] as u64) {
            qhat -= 1;
            rhat += v_top;
            if rhat >= base {
                break;
            }
        }

        // D4 multiply and subtract
        let mut borrow: i64 = 0;
        for i in 0..n {
            let product = qhat * vn[i] as u64;
            let t = un[i + j] as i64 - borrow - (product & LOW_MASK) as i64;
            un[i + j] = t as u32;
            borrow = (product >> LIMB_BITS) as i64 - (t >> LIMB_BITS);
        }
        let t = un[j + n] as i64 - borrow;
        un[j + n] = t as u32;

        // D5, D6 add back when qhat was one too large
        if t < 0 {
            qhat -= 1;
            let mut carry = 0u64;
            for i in 0..n {
                let sum = un[i + j] as u64 + vn[i] as u64 + carry;
                un[i + j] = sum as u32;
                carry = sum >> LIMB_BITS;
            }
            un[j + n] = un[j + n].wrapping_add(carry as u32);
        }
        q[j] = qhat as u32;
    }

    // D8 unnormalize
    trim(&mut q);
    un.truncate(n);
    let r = shr_bits(&un, shift as usize);
    (q, r)
}

fn normalize(a: &[u32], shift: u32, len: usize) -> Vec<u32> {
    let mut out = vec![0u32; len];
    if shift == 0 {
        out[..a.len()].copy_from_slice(a);
    } else {
        let mut carry = 0u32;
        for (i, &x) in a.iter().enumerate() {
            out[i] = (x << shift) | carry;
            carry = x >> (LIMB_BITS - shift);
        }
        if a.len() < len {
            out[a.len()] = carry;
        }
    }
    out
}

pub(crate) fn shl_bits(a: &[u32], n: usize) -> Vec<u32> {
    if a.is_empty() {
        return Vec::new();
    }
    let n_ints = n >> 5;
    let n_bits = (n & 0x1f) as u32;
    let mut result = vec![0u32; n_ints];
    result.reserve(a.len() + 1);
    if n_bits == 0 {
        result.extend_from_slice(a);
    } else {
        let mut carry = 0u32;
        for &x in a {
            result.push((x << n_bits) | carry);
            carry = x >> (LIMB_BITS - n_bits);
        }
        if carry != 0 {
            result.push(carry);
        }
    }
    result
}

pub(crate) fn shr_bits(a: &[u32], n: usize) -> Vec<u32> {
    let n_ints = n >> 5;
    if n_ints >= a.len() {
        return Vec::new();
    }
    let n_bits = (n & 0x1f) as u32;
    let src = &a[n_ints..];
    let mut result: Vec<u32> = if n_bits == 0 {
        src.to_vec()
    } else {
        src.iter()
            .enumerate()
            .map(|(i, &x)| {
                let high = src.get(i + 1).map_or(0, |&h| h << (LIMB_BITS - n_bits));
                (x >> n_bits) | high
            })
            .collect()
    };
    trim(&mut result);
    result
}

/// True when any of the lowest `n` bits of `a` is set.
pub(crate) fn has_low_bits(a: &[u32], n: usize) -> bool {
    let n_ints = n >> 5;
    let n_bits = n & 0x1f;
    if a.iter().take(n_ints).any(|&x| x != 0) {
        return true;
    }
    n_bits != 0 && a.get(n_ints).map_or(false, |&x| x & ((1u32 << n_bits) - 1) != 0)
}
