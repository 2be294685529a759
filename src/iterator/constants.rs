// Sizes of the candidate space
pub const OPERAND_COUNT: usize = 4;
pub const PERMUTATION_COUNT: usize = 24;
pub const SHAPE_COUNT: usize = 5;
pub const TRIPLE_COUNT: usize = 64;
pub const CANDIDATES_PER_PERMUTATION: usize = SHAPE_COUNT * TRIPLE_COUNT;
pub const CANDIDATE_COUNT: usize = PERMUTATION_COUNT * CANDIDATES_PER_PERMUTATION;
