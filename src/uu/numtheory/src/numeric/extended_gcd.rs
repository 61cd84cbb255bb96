// This file is part of the numtheory package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// spell-checker:ignore (math) bezout

use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `a * x + b * y == g`, where `g` is the greatest
/// common divisor up to the truncating-remainder sign convention. Recursion
/// depth is logarithmic in the smaller operand.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() {
        (b.clone(), BigInt::zero(), BigInt::one())
    } else {
        let (g, x1, y1) = extended_gcd(&(b % a), a);
        let x = &y1 - (b / a) * &x1;
        (g, x, x1)
    }
}
