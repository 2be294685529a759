pub mod constants;
mod config;
mod core;
mod errors;
mod session;

pub use config::{Comparison, SolverConfig};
pub use self::core::{ExpressionEnumerator, Solution};
pub use errors::SolverError;
pub use session::{SearchResult, SolverSession};

#[cfg(test)]
mod tests;
