use crate::core::primality::TrialDivision;
use crate::domain::model::Candidate;
use crate::domain::ports::PrimalityTest;
use std::io::Write;

/// Walks `n - 1, n - 2, ..., 1` and yields the candidates the test accepts.
///
/// The counter is the whole state: it holds the next candidate to test and the
/// iterator is exhausted once it drops below 1. A bound of 1 or less yields
/// nothing and tests nothing.
#[derive(Debug, Clone)]
pub struct DescendingEnumerator<T: PrimalityTest> {
    next: Candidate,
    test: T,
}

impl<T: PrimalityTest> DescendingEnumerator<T> {
    pub fn new(bound: Candidate, test: T) -> Self {
        Self {
            // saturating so that i64::MIN still means "empty"
            next: bound.saturating_sub(1),
            test,
        }
    }
}

impl<T: PrimalityTest> Iterator for DescendingEnumerator<T> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next >= 1 {
            let candidate = self.next;
            self.next -= 1;
            if self.test.is_prime(candidate) {
                return Some(candidate);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = usize::try_from(self.next.max(0)).ok();
        (0, upper)
    }
}

/// Primes strictly smaller than `bound`, largest first.
pub fn primes_below(bound: Candidate) -> DescendingEnumerator<TrialDivision> {
    DescendingEnumerator::new(bound, TrialDivision)
}

/// Writes every prime smaller than `bound` on its own line, largest first.
///
/// Returns how many lines were written.
pub fn write_primes_below<W: Write>(bound: Candidate, out: &mut W) -> std::io::Result<usize> {
    let mut written = 0;
    for prime in primes_below(bound) {
        writeln!(out, "{}", prime)?;
        written += 1;
    }
    Ok(written)
}
