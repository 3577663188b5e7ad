pub const DIGITS: [char; 36] = [
    '0' , '1' , '2' , '3' , '4' , '5' ,
    '6' , '7' , '8' , '9' , 'a' , 'b' ,
    'c' , 'd' , 'e' , 'f' , 'g' , 'h' ,
    'i' , 'j' , 'k' , 'l' , 'm' , 'n' ,
    'o' , 'p' , 'q' , 'r' , 's' , 't' ,
    'u' , 'v' , 'w' , 'x' , 'y' , 'z'
];

/// Number of radix digits that always fit in one `u32` limb.
pub const DIGITS_PER_INT: [usize; 37] = [
    0, 0,
    30, 19, 15, 13, 11, 11, 10, 9, 9, 8, 8, 8, 8, 7, 7, 7, 7, 7, 7, 7,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 5
];

/// `radix ^ DIGITS_PER_INT[radix]`, the "super radix" used to consume a digit group at a time.
pub const INT_RADIX: [u32; 37] = [
    0, 0,
    0x40000000, 0x4546b3db, 0x40000000, 0x48c27395, 0x159fd800,
    0x75db9c97, 0x40000000, 0x17179149, 0x3b9aca00, 0xcc6db61,
    0x19a10000, 0x309f1021, 0x57f6c100, 0xa2f1b6f,  0x10000000,
    0x18754571, 0x247dbc80, 0x3547667b, 0x4c4b4000, 0x6b5a6e1d,
    0x6c20a40,  0x8d2d931,  0xb640000,  0xe8d4a51,  0x1269ae40,
    0x17179149, 0x1cb91000, 0x23744899, 0x2b73a840, 0x34e63b41,
    0x40000000, 0x4cfa3cc1, 0x5c13d840, 0x6d91b519, 0x39aa400
];

pub const MIN_RADIX: u32 = 2;

pub const MAX_RADIX: u32 = 36;

/// Small values in `-MAX_CONSTANT..=MAX_CONSTANT` are served from the cache.
pub const MAX_CONSTANT: usize = 16;

/// Powers of ten `10^0..=10^MAX_CACHED_POW10` are kept in the cache.
pub const MAX_CACHED_POW10: usize = 64;

/// Operands with fewer limbs than this are multiplied with the grade-school algorithm.
pub const KARATSUBA_THRESHOLD: usize = 80;

/// Odd numbers below this bound are tried as divisors before Miller-Rabin.
pub const PRIME_TRIAL_DIVISION_LIMIT: u32 = 1000;

/// Miller-Rabin witnesses; deterministic for every n < 3.3 * 10^24.
pub const MILLER_RABIN_BASES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// `floor(log10(2) * 2^64)`, for estimating decimal digit counts from bit lengths.
pub const LOG10_2_Q64: u128 = 5553023288523357132;
