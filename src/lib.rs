//! card24 - A library for solving the 24 card game
//!
//! Given four operands, this library finds every arithmetic expression that uses
//! each operand exactly once with `+`, `-`, `*`, `/` and parentheses, and that
//! evaluates to 24.

pub mod cards;
pub mod expression;
pub mod iterator;
pub mod report;
pub mod solver;

// Re-export the main public API
pub use cards::{CardError, Deck, Hand, parse_hand, parse_operand};
pub use expression::{Expression, ExpressionError, Operator, Shape};
pub use solver::{
    Comparison, ExpressionEnumerator, SearchResult, Solution, SolverConfig, SolverError,
    SolverSession,
};

/// Find every expression over the given operands that evaluates to 24
///
/// This is a convenience function that runs a single search with the default
/// configuration: exact floating-point comparison and a parallel search.
///
/// # Arguments
///
/// * `operands` - Exactly four operand values
///
/// # Returns
///
/// * `Ok(SearchResult)` - The solutions in enumeration order and the search time
/// * `Err(SolverError)` - If the operand count is not four
///
/// # Errors
///
/// This function will return an error if `operands` does not hold exactly four values.
///
/// # Examples
///
/// ```
/// use card24::solve_24;
///
/// match solve_24(&[4.0, 1.0, 8.0, 7.0]) {
///     Ok(result) => {
///         for expression in result.expressions() {
///             println!("{}", expression);
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve_24(operands: &[f64]) -> Result<SearchResult, SolverError> {
    let mut session = SolverSession::default();
    session.solve(operands).cloned()
}
