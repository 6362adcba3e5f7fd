//! Character sets and the random string primitive.

use crate::ports::RandomSource;

/// Lowercase ASCII letters.
pub const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Digits, lowercase letters, `-` and `/`: what a branch name may contain.
pub const EXTENDED: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '-', '/',
];

/// Builds a string of `len` characters drawn uniformly from `charset`.
///
/// Each character is then upper-cased on an independent coin flip, which
/// leaves digits and punctuation untouched.
pub fn random_string<R>(rng: &mut R, len: usize, charset: &[char]) -> String
where
    R: RandomSource + ?Sized,
{
    let mut out = String::with_capacity(len);
    if charset.is_empty() {
        return out;
    }
    for _ in 0..len {
        let c = charset[rng.index(charset.len())];
        out.push(if rng.coin() { c.to_ascii_uppercase() } else { c });
    }
    out
}
