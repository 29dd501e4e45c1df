pub mod enumerator;
pub mod primality;
pub mod report;

pub use crate::domain::model::Candidate;
pub use crate::domain::ports::PrimalityTest;
pub use crate::utils::error::Result;
