use std::time::{Duration, Instant};

use log::info;

use crate::iterator::constants::OPERAND_COUNT;
use crate::solver::config::SolverConfig;
use crate::solver::core::{ExpressionEnumerator, Solution};
use crate::solver::errors::SolverError;

/// Outcome of one search: the solutions in enumeration order and how long
/// the search took
#[derive(Debug, Clone)]
pub struct SearchResult {
    solutions: Vec<Solution>,
    elapsed: Duration,
}

impl SearchResult {
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Rendered solution strings, e.g. `(8 - 4) * (7 - 1)`
    pub fn expressions(&self) -> impl Iterator<Item = String> + '_ {
        self.solutions.iter().map(|solution| solution.to_string())
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// One puzzle instance: holds the operands and the latest search result
pub struct SolverSession {
    enumerator: ExpressionEnumerator,
    operands: Option<[f64; OPERAND_COUNT]>,
    result: Option<SearchResult>,
}

impl SolverSession {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            enumerator: ExpressionEnumerator::new(config),
            operands: None,
            result: None,
        }
    }

    /// Runs a fresh search, replacing any previous result.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::OperandCount` unless exactly four operands are given.
    /// Operand values are not validated.
    pub fn solve(&mut self, operands: &[f64]) -> Result<&SearchResult, SolverError> {
        let operands: [f64; OPERAND_COUNT] = operands
            .try_into()
            .map_err(|_| SolverError::OperandCount(operands.len()))?;

        let start = Instant::now();
        let solutions = self.enumerator.enumerate(&operands);
        let elapsed = start.elapsed();
        info!("Search finished in {:?}", elapsed);

        self.operands = Some(operands);
        Ok(self.result.insert(SearchResult { solutions, elapsed }))
    }

    pub fn operands(&self) -> Option<&[f64; OPERAND_COUNT]> {
        self.operands.as_ref()
    }

    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    pub fn config(&self) -> &SolverConfig {
        self.enumerator.config()
    }
}

impl Default for SolverSession {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
