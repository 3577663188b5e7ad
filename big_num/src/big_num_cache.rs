use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT)
        .map(|val| BigInt::from_mag(vec![val as u32], 1))
        .collect();
    pub static ref NEG_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT)
        .map(|val| BigInt::from_mag(vec![val as u32], -1))
        .collect();
    pub static ref POW10_CACHE: Vec<BigInt> = {
        let ten = BigInt::from_mag(vec![10], 1);
        let mut powers = Vec::with_capacity(MAX_CACHED_POW10 + 1);
        let mut current = BigInt::from_mag(vec![1], 1);
        for _ in 0..=MAX_CACHED_POW10 {
            let next = &current * &ten;
            powers.push(current);
            current = next;
        }
        powers
    };
}
