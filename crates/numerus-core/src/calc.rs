//! Number-theoretic algorithms over [`Natural`] magnitudes.
//!
//! The gcd is the binary (Stein) algorithm, the integer square root is a
//! plain binary search, and both exponentiations scan the exponent's bits
//! from the least significant end, squaring as they go.

use std::cmp::Ordering;

use num_traits::{One, Zero};

use crate::error::NumericError;
use crate::natural::Natural;

/// Greatest common divisor by the binary algorithm.
///
/// Common factors of two are stripped up front and restored by the final
/// left shift; the subtract-and-halve loop keeps both operands odd, so
/// every difference is even and shrinks quickly.
#[must_use]
pub fn gcd(mut a: Natural, mut b: Natural) -> Natural {
    if a.is_zero() {
        return b;
    }
    if b.is_zero() {
        return a;
    }

    let i = a.trailing_zeros();
    let j = b.trailing_zeros();

    a >>= i;
    b >>= j;

    let common_twos = i.min(j);

    loop {
        debug_assert!(a.is_odd());
        debug_assert!(b.is_odd());

        if a > b {
            std::mem::swap(&mut a, &mut b);
        }

        b -= &a;

        if b.is_zero() {
            return a << common_twos;
        }

        b >>= b.trailing_zeros();
    }
}

/// Integer square root with remainder.
///
/// Binary-searches `[1, num >> 1]`; returns `(r, num - r*r)` where `r` is
/// the largest value with `r*r <= num`. Zero and one come back unchanged
/// with a zero remainder.
#[must_use]
pub fn sqrt(num: &Natural) -> (Natural, Natural) {
    if num.is_zero() || num.is_one() {
        return (num.clone(), Natural::zero());
    }

    let mut low = Natural::one();
    let mut high = num >> 1;
    let mut root = Natural::zero();

    while low <= high {
        let mut mid = &low + &high;
        mid >>= 1;

        let square = &mid * &mid;

        match square.cmp(num) {
            Ordering::Equal => return (mid, Natural::zero()),
            Ordering::Less => {
                root = mid.clone();
                mid.increment();
                low = mid;
            }
            Ordering::Greater => {
                mid.decrement();
                high = mid;
            }
        }
    }

    let remainder = num - &(&root * &root);
    (root, remainder)
}

/// Integer square root without the remainder.
#[must_use]
pub fn sqrt_whole(num: &Natural) -> Natural {
    sqrt(num).0
}

/// Raises `base` to `exponent` by right-to-left square-and-multiply.
#[must_use]
pub fn pow(mut base: Natural, mut exponent: Natural) -> Natural {
    if exponent.is_zero() {
        return Natural::one();
    }

    let mut result = Natural::one();

    loop {
        if exponent.is_odd() {
            result *= &base;
        }
        exponent >>= 1;
        if exponent.is_zero() {
            break;
        }
        base = &base * &base;
    }

    result
}

/// Modular exponentiation, reducing the running result after every
/// multiplication.
///
/// # Errors
///
/// Returns [`NumericError::DivisionByZero`] when `modulus` is zero.
pub fn pow_mod(
    mut base: Natural,
    mut exponent: Natural,
    modulus: &Natural,
) -> Result<Natural, NumericError> {
    if modulus.is_zero() {
        return Err(NumericError::division_by_zero());
    }
    if exponent.is_zero() {
        return Ok(Natural::one());
    }

    let mut result = Natural::one();

    loop {
        if exponent.is_odd() {
            result *= &base;
            result = result.div_rem_impl(modulus).1;
        }
        exponent >>= 1;
        if exponent.is_zero() {
            break;
        }
        base = &base * &base;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nat(value: u128) -> Natural {
        Natural::from(value)
    }

    #[test]
    fn gcd_of_small_values() {
        assert_eq!(gcd(nat(48), nat(18)), nat(6));
        assert_eq!(gcd(nat(18), nat(48)), nat(6));
        assert_eq!(gcd(nat(17), nat(5)), nat(1));
    }

    #[test]
    fn gcd_with_zero_returns_the_other_operand() {
        assert_eq!(gcd(nat(42), Natural::zero()), nat(42));
        assert_eq!(gcd(Natural::zero(), nat(42)), nat(42));
        assert!(gcd(Natural::zero(), Natural::zero()).is_zero());
    }

    #[test]
    fn gcd_restores_stripped_powers_of_two() {
        // 96 = 2^5 * 3, 160 = 2^5 * 5
        assert_eq!(gcd(nat(96), nat(160)), nat(32));
    }

    #[test]
    fn gcd_of_wide_values_divides_both() {
        let a = nat(600_851_475_143) * nat(600_851_475_143);
        let b = nat(600_851_475_143) * nat(104_729);
        let g = gcd(a.clone(), b.clone());
        assert_eq!(g, nat(600_851_475_143));
        assert!(a.div_rem(&g).unwrap().1.is_zero());
        assert!(b.div_rem(&g).unwrap().1.is_zero());
    }

    #[test]
    fn sqrt_brackets_the_root() {
        assert_eq!(sqrt(&nat(0)), (nat(0), nat(0)));
        assert_eq!(sqrt(&nat(1)), (nat(1), nat(0)));
        assert_eq!(sqrt(&nat(4)), (nat(2), nat(0)));
        assert_eq!(sqrt(&nat(10)), (nat(3), nat(1)));
        assert_eq!(sqrt(&nat(99)), (nat(9), nat(18)));
    }

    #[test]
    fn sqrt_of_a_large_square_is_exact() {
        let root = nat(123_456_789_987);
        let (found, remainder) = sqrt(&(&root * &root));
        assert_eq!(found, root);
        assert!(remainder.is_zero());
        assert_eq!(sqrt_whole(&(&root * &root)), root);
    }

    #[test]
    fn pow_matches_known_values() {
        assert_eq!(pow(nat(2), nat(10)), nat(1024));
        assert_eq!(pow(nat(3), nat(0)), nat(1));
        assert_eq!(pow(nat(0), nat(5)), nat(0));
        assert_eq!(pow(nat(7), nat(13)), nat(96_889_010_407));
    }

    #[test]
    fn pow_handles_multiword_results() {
        assert_eq!(pow(nat(2), nat(200)), Natural::one() << 200);
    }

    #[test]
    fn pow_mod_reduces_at_every_step() {
        // 3^200 = (3^6)^33 * 3^2 = 9 = 2 (mod 7)
        assert_eq!(pow_mod(nat(3), nat(200), &nat(7)).unwrap(), nat(2));
        assert_eq!(pow_mod(nat(10), nat(0), &nat(3)).unwrap(), nat(1));
        assert_eq!(
            pow_mod(nat(2), nat(10), &nat(1000)).unwrap(),
            nat(24)
        );
    }

    #[test]
    fn pow_mod_with_zero_modulus_is_reported() {
        assert_eq!(
            pow_mod(nat(2), nat(10), &Natural::zero()),
            Err(NumericError::division_by_zero())
        );
    }
}
