// This file is part of the numtheory package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use super::{extended_gcd, rem_floor};
use crate::errors::NumTheoryError;

/// Computes `base^exponent mod modulus` by binary exponentiation.
///
/// Every intermediate product is reduced, so no value grows past
/// `modulus²`. The result is normalized into the canonical residue range
/// (`[0, modulus)` for positive moduli); in particular a zero exponent
/// yields `1 mod modulus`, which is 0 when `modulus` is 1.
///
/// Errors with [`NumTheoryError::DivisionByZero`] for a zero modulus and
/// [`NumTheoryError::InvalidArgument`] for a negative exponent.
pub fn modular_exponentiation(
    base: &BigInt,
    exponent: &BigInt,
    modulus: &BigInt,
) -> Result<BigInt, NumTheoryError> {
    if modulus.is_zero() {
        return Err(NumTheoryError::DivisionByZero);
    }
    if exponent.is_negative() {
        return Err(NumTheoryError::InvalidArgument("negative exponent"));
    }

    let two = BigInt::from(2);
    let mut result = BigInt::one();
    let mut base = rem_floor(base, modulus);
    let mut exponent = exponent.clone();

    while exponent.is_positive() {
        if (&exponent % &two).is_one() {
            result = rem_floor(&(&result * &base), modulus);
        }
        base = rem_floor(&(&base * &base), modulus);
        exponent /= &two;
    }

    Ok(rem_floor(&result, modulus))
}

/// Computes the inverse of `a` modulo `m`, if one exists.
///
/// `Ok(None)` means the Bézout triple's gcd was not 1, so `a` has no
/// inverse; that is a normal outcome, not an error. A zero modulus errors
/// with [`NumTheoryError::DivisionByZero`].
pub fn modular_inverse(a: &BigInt, m: &BigInt) -> Result<Option<BigInt>, NumTheoryError> {
    if m.is_zero() {
        return Err(NumTheoryError::DivisionByZero);
    }
    let (g, x, _) = extended_gcd(a, m);
    if !g.is_one() {
        return Ok(None);
    }
    Ok(Some(rem_floor(&x, m)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::gcd;
    use quickcheck::quickcheck;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn fast_exponentiation() {
        assert_eq!(
            modular_exponentiation(&big(2), &big(10), &big(1000)),
            Ok(big(24))
        );
        assert_eq!(modular_exponentiation(&big(3), &big(4), &big(5)), Ok(big(1)));
    }

    #[test]
    fn zero_exponent() {
        assert_eq!(modular_exponentiation(&big(5), &big(0), &big(7)), Ok(big(1)));
        assert_eq!(modular_exponentiation(&big(0), &big(0), &big(7)), Ok(big(1)));
        // 1 mod 1 is 0
        assert_eq!(modular_exponentiation(&big(5), &big(0), &big(1)), Ok(big(0)));
    }

    #[test]
    fn negative_base_is_reduced_first() {
        // -2 ≡ 3 (mod 5), and 3³ = 27 ≡ 2
        assert_eq!(modular_exponentiation(&big(-2), &big(3), &big(5)), Ok(big(2)));
    }

    #[test]
    fn zero_modulus_is_rejected() {
        assert_eq!(
            modular_exponentiation(&big(2), &big(3), &big(0)),
            Err(NumTheoryError::DivisionByZero)
        );
        assert_eq!(
            modular_inverse(&big(3), &big(0)),
            Err(NumTheoryError::DivisionByZero)
        );
    }

    #[test]
    fn negative_exponent_is_rejected() {
        assert_eq!(
            modular_exponentiation(&big(2), &big(-1), &big(5)),
            Err(NumTheoryError::InvalidArgument("negative exponent"))
        );
    }

    #[test]
    fn inverse_exists() {
        assert_eq!(modular_inverse(&big(3), &big(11)), Ok(Some(big(4))));
        assert_eq!(modular_inverse(&big(7), &big(26)), Ok(Some(big(15))));
    }

    #[test]
    fn inverse_absent() {
        assert_eq!(modular_inverse(&big(4), &big(8)), Ok(None));
        assert_eq!(modular_inverse(&big(0), &big(7)), Ok(None));
    }

    #[test]
    fn inverse_sign_conventions() {
        // Truncating remainders give the Bézout triple for (-3, 11) a gcd of
        // -1, which reads as "no inverse" even though 7 would invert -3.
        assert_eq!(modular_inverse(&big(-3), &big(11)), Ok(None));
        // A negative modulus normalizes into (m, 0], like a floor remainder.
        assert_eq!(modular_inverse(&big(3), &big(-11)), Ok(Some(big(-7))));
    }

    quickcheck! {
        fn matches_naive_exponentiation(base: i64, exp: u8, modulus: i64) -> bool {
            if modulus == 0 {
                return true;
            }
            let (b, m) = (BigInt::from(base), BigInt::from(modulus));
            let mut acc = BigInt::one();
            for _ in 0..exp {
                acc *= &b;
            }
            modular_exponentiation(&b, &BigInt::from(exp), &m) == Ok(rem_floor(&acc, &m))
        }

        fn inverse_round_trips(a: u64, m: u64) -> bool {
            let (a, m) = (BigInt::from(a), BigInt::from(m));
            if m.is_zero() {
                return true;
            }
            match modular_inverse(&a, &m) {
                // x inverts a exactly when (a * x) mod m is 1 mod m
                Ok(Some(x)) => rem_floor(&(&a * &x), &m) == rem_floor(&BigInt::one(), &m),
                Ok(None) => !gcd(&a, &m).is_one(),
                Err(_) => false,
            }
        }
    }
}
