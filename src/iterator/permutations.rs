use log::debug;

use super::constants::{OPERAND_COUNT, PERMUTATION_COUNT};

/// All orderings of the four operand positions.
///
/// Four nested selections in ascending index order, each skipping the
/// positions already taken by the outer ones, so `[0, 1, 2, 3]` comes first
/// and `[3, 2, 1, 0]` last.
pub fn generate_permutations() -> Vec<[usize; OPERAND_COUNT]> {
    let mut result = Vec::with_capacity(PERMUTATION_COUNT);

    for i in 0..OPERAND_COUNT {
        for j in (0..OPERAND_COUNT).filter(|&j| j != i) {
            for k in (0..OPERAND_COUNT).filter(|&k| k != i && k != j) {
                for l in (0..OPERAND_COUNT).filter(|&l| l != i && l != j && l != k) {
                    result.push([i, j, k, l]);
                }
            }
        }
    }

    debug!("Generated {} permutations", result.len());
    result
}
