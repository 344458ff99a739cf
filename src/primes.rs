//! Trial-division primality test for the counter's initial value.

/// Returns whether `n` is prime. Values at or below 1 are not prime.
///
/// Divisors are checked from 2 through the integer square root. The
/// bound is written `i <= n / i` so it never overflows, even for
/// candidates near `i64::MAX`.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let mut i: i64 = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference check: scan every candidate divisor below `n`.
    fn is_prime_naive(n: i64) -> bool {
        if n <= 1 {
            return false;
        }
        (2..n).all(|i| n % i != 0)
    }

    #[test]
    fn one_and_below_are_not_prime() {
        assert!(!is_prime(1));
        assert!(!is_prime(0));
        assert!(!is_prime(-1));
        assert!(!is_prime(-17));
        assert!(!is_prime(i64::MIN));
    }

    #[test]
    fn known_small_values() {
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(9));
        assert!(is_prime(17));
        assert!(!is_prime(25));
    }

    #[test]
    fn agrees_with_naive_scan() {
        for n in 2..=1000 {
            assert_eq!(is_prime(n), is_prime_naive(n), "disagreement at {n}");
        }
    }

    #[test]
    fn perfect_squares_are_composite() {
        // The divisor bound must include the square root itself.
        for root in 2..=40i64 {
            assert!(!is_prime(root * root), "{} claimed prime", root * root);
        }
    }

    #[test]
    fn larger_values() {
        assert!(is_prime(1_000_003));
        assert!(!is_prime(1_000_001)); // 101 * 9901
    }
}
