use crate::domain::model::Candidate;
use crate::domain::ports::PrimalityTest;

/// Trial division by every `d` in `2..=n/2`.
///
/// Returns `true` as soon as some `d` with `d * 2 <= n` divides `n` evenly.
/// For `n < 4` the search range is empty and the answer is `false`.
pub fn has_divisor_up_to_half(n: Candidate) -> bool {
    let mut divisor: Candidate = 2;
    // `divisor <= n / 2` is `divisor * 2 <= n` without the overflow near i64::MAX
    while divisor <= n / 2 {
        if n % divisor == 0 {
            return true;
        }
        divisor += 1;
    }
    false
}

/// Returns `true` iff `n` is prime.
///
/// Values below 2 (zero, one, negatives) are not prime.
pub fn is_prime(n: Candidate) -> bool {
    n >= 2 && !has_divisor_up_to_half(n)
}

/// [`PrimalityTest`] backed by [`is_prime`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrialDivision;

impl PrimalityTest for TrialDivision {
    fn is_prime(&self, n: Candidate) -> bool {
        is_prime(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        for n in [2, 3, 5, 7, 11, 13] {
            assert!(is_prime(n), "{} should be prime", n);
        }
    }

    #[test]
    fn test_small_composites() {
        for n in [4, 6, 8, 9, 10, 12] {
            assert!(!is_prime(n), "{} should not be prime", n);
        }
    }

    #[test]
    fn test_below_two_is_not_prime() {
        assert!(!is_prime(1));
        assert!(!is_prime(0));
        assert!(!is_prime(-1));
        assert!(!is_prime(-7));
        assert!(!is_prime(Candidate::MIN));
    }

    #[test]
    fn test_raw_search_finds_no_divisor_below_two() {
        // empty search range: the raw search never rejects these
        for n in [-10, -1, 0, 1, 2, 3] {
            assert!(!has_divisor_up_to_half(n));
        }
        assert!(has_divisor_up_to_half(4));
    }

    #[test]
    fn test_matches_divisor_definition() {
        for n in 2..500 {
            let divisible = (2..=n / 2).any(|d| n % d == 0);
            assert_eq!(is_prime(n), !divisible, "mismatch at {}", n);
        }
    }

    #[test]
    fn test_squares_of_primes() {
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(121));
        assert!(is_prime(7919));
    }

    fn check<T: PrimalityTest>(test: T, n: Candidate) -> bool {
        test.is_prime(n)
    }

    #[test]
    fn test_trial_division_port() {
        let test = TrialDivision;
        assert!(check(test, 17));
        assert!(!check(test, 21));
        assert!(check(&test, 23));
    }
}
