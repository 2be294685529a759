use super::constants::TARGET;

/// How an evaluated candidate is compared against the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison {
    /// Direct `==` on the `f64` result. Chains through inexact divisions such
    /// as `8 / (3 - (8 / 3))` land a few ulps off and are not matched.
    Exact,
    /// Accepts `|value - target| < epsilon`
    Tolerance(f64),
}

impl Comparison {
    #[inline]
    pub fn matches(self, value: f64, target: f64) -> bool {
        match self {
            Comparison::Exact => value == target,
            Comparison::Tolerance(epsilon) => (value - target).abs() < epsilon,
        }
    }
}

/// Configuration for the expression search
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub target: f64,
    pub comparison: Comparison,
    /// Fan permutations out over the rayon pool
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: TARGET,
            comparison: Comparison::Exact,
            parallel: true,
        }
    }
}
