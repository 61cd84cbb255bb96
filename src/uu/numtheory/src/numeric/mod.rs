// This file is part of the numtheory package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Pure arithmetic on arbitrary-precision signed integers.

use num_bigint::BigInt;

mod extended_gcd;
mod gcd;
mod modular;

pub use extended_gcd::extended_gcd;
pub use gcd::{gcd, is_coprime, lcm};
pub use modular::{modular_exponentiation, modular_inverse};

/// Floor remainder: the representative of `x mod m` carrying the sign of
/// `m`, i.e. in `[0, m)` for positive `m`.
///
/// `BigInt`'s `%` truncates toward zero; the modular operations need the
/// floor convention so results land in the canonical residue range.
pub(crate) fn rem_floor(x: &BigInt, m: &BigInt) -> BigInt {
    ((x % m) + m) % m
}
