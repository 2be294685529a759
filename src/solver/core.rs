use std::fmt;

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::Expression;
use crate::iterator::constants::{OPERAND_COUNT, PERMUTATION_COUNT};
use crate::iterator::{Candidate, CandidateIterator};
use crate::solver::config::SolverConfig;

/// A candidate whose value matched the target, with its expression tree
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    candidate: Candidate,
    expression: Expression,
}

impl Solution {
    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Evaluates every candidate over four operands and keeps those that reach
/// the target
pub struct ExpressionEnumerator {
    config: SolverConfig,
}

impl ExpressionEnumerator {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find every candidate that evaluates to the target.
    ///
    /// Solutions come back in enumeration order whether or not the search
    /// runs in parallel. Identical strings produced by different candidates
    /// are all kept.
    pub fn enumerate(&self, operands: &[f64; OPERAND_COUNT]) -> Vec<Solution> {
        info!(
            "Searching for expressions over {:?} that equal {}",
            operands, self.config.target
        );

        let solutions: Vec<Solution> = if self.config.parallel {
            // Indexed collect keeps the per-permutation batches in order
            let batches: Vec<Vec<Solution>> = (0..PERMUTATION_COUNT)
                .into_par_iter()
                .map(|permutation_index| self.search_permutation(operands, permutation_index))
                .collect();
            batches.into_iter().flatten().collect()
        } else {
            CandidateIterator::new()
                .filter_map(|candidate| self.check(operands, candidate))
                .collect()
        };

        info!("Found {} solution(s)", solutions.len());
        solutions
    }

    fn search_permutation(
        &self,
        operands: &[f64; OPERAND_COUNT],
        permutation_index: usize,
    ) -> Vec<Solution> {
        CandidateIterator::for_permutation(permutation_index)
            .filter_map(|candidate| self.check(operands, candidate))
            .collect()
    }

    fn check(&self, operands: &[f64; OPERAND_COUNT], candidate: Candidate) -> Option<Solution> {
        let value = candidate.evaluate(operands);
        if !self.config.comparison.matches(value, self.config.target) {
            return None;
        }

        let expression = candidate.expression(operands);
        debug!("Candidate {} matched: {}", candidate.index, expression);
        Some(Solution {
            candidate,
            expression,
        })
    }
}

impl Default for ExpressionEnumerator {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
