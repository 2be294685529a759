pub mod constants;
pub mod core;
pub mod permutations;
pub mod state;
pub mod types;

pub use self::core::CandidateIterator;
pub use permutations::generate_permutations;
pub use types::Candidate;

#[cfg(test)]
mod tests;
