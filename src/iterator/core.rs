use log::debug;

use crate::expression::Shape;

use super::constants::{CANDIDATES_PER_PERMUTATION, OPERAND_COUNT};
use super::permutations::generate_permutations;
use super::state::IteratorState;
use super::types::Candidate;

/// Lazily walks the candidate space in enumeration order: permutation,
/// then shape, then operator triple.
#[derive(Debug, Clone)]
pub struct CandidateIterator {
    permutations: Vec<[usize; OPERAND_COUNT]>,
    perm_idx: usize,
    end_perm: usize,
    state: IteratorState,
}

impl CandidateIterator {
    /// Iterates over all 7,680 candidates
    pub fn new() -> Self {
        let permutations = generate_permutations();
        let end_perm = permutations.len();
        Self {
            permutations,
            perm_idx: 0,
            end_perm,
            state: IteratorState::new(),
        }
    }

    /// Iterates over the 320 candidates of one permutation. An out-of-range
    /// index yields an empty iterator.
    pub fn for_permutation(permutation_index: usize) -> Self {
        let permutations = generate_permutations();
        let end_perm = (permutation_index + 1).min(permutations.len());
        debug!("Candidate iterator restricted to permutation {}", permutation_index);
        Self {
            permutations,
            perm_idx: permutation_index,
            end_perm,
            state: IteratorState::new(),
        }
    }

    pub fn permutation_count(&self) -> usize {
        self.permutations.len()
    }

    fn remaining(&self) -> usize {
        if self.perm_idx >= self.end_perm {
            return 0;
        }
        (self.end_perm - self.perm_idx) * CANDIDATES_PER_PERMUTATION - self.state.consumed()
    }
}

impl Default for CandidateIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for CandidateIterator {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.perm_idx >= self.end_perm {
            return None;
        }

        let permutation = *self.permutations.get(self.perm_idx)?;
        let shape = *Shape::ALL.get(self.state.shape_idx)?;
        let candidate = Candidate::new(self.perm_idx, permutation, shape, self.state.triple_idx);

        if !self.state.advance() {
            self.perm_idx += 1;
            self.state = IteratorState::new();
        }

        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CandidateIterator {}
