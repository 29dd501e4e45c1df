use crate::domain::model::Candidate;

/// Decides primality for a single candidate.
pub trait PrimalityTest {
    fn is_prime(&self, n: Candidate) -> bool;
}

impl<T: PrimalityTest + ?Sized> PrimalityTest for &T {
    fn is_prime(&self, n: Candidate) -> bool {
        (**self).is_prime(n)
    }
}
