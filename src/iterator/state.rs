use super::constants::{SHAPE_COUNT, TRIPLE_COUNT};

/// Cursor into the candidate space of a single permutation
#[derive(Debug, Clone, Default)]
pub struct IteratorState {
    pub shape_idx: usize,
    pub triple_idx: usize,
}

impl IteratorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps to the next operator triple, rolling over into the next shape.
    /// Returns `false` once every shape has been visited.
    pub fn advance(&mut self) -> bool {
        self.triple_idx += 1;
        if self.triple_idx == TRIPLE_COUNT {
            self.triple_idx = 0;
            self.shape_idx += 1;
        }
        self.shape_idx < SHAPE_COUNT
    }

    pub fn consumed(&self) -> usize {
        self.shape_idx * TRIPLE_COUNT + self.triple_idx
    }
}
