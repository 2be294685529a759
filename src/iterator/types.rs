use crate::expression::{Expression, Operator, Shape};

use super::constants::{CANDIDATES_PER_PERMUTATION, OPERAND_COUNT, TRIPLE_COUNT};

/// One fully specified `(permutation, shape, operator triple)` combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// Position in the deterministic enumeration order
    pub index: usize,
    pub permutation: [usize; OPERAND_COUNT],
    pub shape: Shape,
    /// Operators in textual order
    pub operators: [Operator; 3],
}

impl Candidate {
    /// Decodes a triple index by mixed-radix counting; the first textual
    /// slot varies slowest.
    pub fn triple(triple_index: usize) -> [Operator; 3] {
        let digit = |place: usize| Operator::ALL[(triple_index / place) % Operator::ALL.len()];
        [digit(16), digit(4), digit(1)]
    }

    pub fn new(
        permutation_index: usize,
        permutation: [usize; OPERAND_COUNT],
        shape: Shape,
        triple_index: usize,
    ) -> Self {
        Self {
            index: permutation_index * CANDIDATES_PER_PERMUTATION
                + shape.index() * TRIPLE_COUNT
                + triple_index,
            permutation,
            shape,
            operators: Self::triple(triple_index),
        }
    }

    /// Leaf values `a, b, c, d` for this candidate's ordering of `operands`
    pub fn leaves(&self, operands: &[f64; OPERAND_COUNT]) -> [f64; OPERAND_COUNT] {
        self.permutation.map(|position| operands[position])
    }

    pub fn evaluate(&self, operands: &[f64; OPERAND_COUNT]) -> f64 {
        self.shape.evaluate(self.leaves(operands), self.operators)
    }

    pub fn expression(&self, operands: &[f64; OPERAND_COUNT]) -> Expression {
        self.shape.build(self.leaves(operands), self.operators)
    }
}
