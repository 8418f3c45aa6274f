//! Bulls and Cows game components
//!
//! The guessing side ([`CandidatePool`]) and the answering side ([`SecretHolder`]).

mod pool;
mod secret;

pub use pool::{CandidatePool, PoolError, candidate_count, generate_all};
pub use secret::{SecretError, SecretHolder};
