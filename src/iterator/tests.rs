use std::collections::HashSet;

use crate::expression::{Operator, Shape};
use crate::iterator::constants::{CANDIDATE_COUNT, PERMUTATION_COUNT};
use crate::iterator::{Candidate, CandidateIterator, generate_permutations};

#[test]
fn permutations_are_complete_and_ordered() {
    let perms = generate_permutations();
    assert_eq!(perms.len(), PERMUTATION_COUNT);
    assert_eq!(perms.first(), Some(&[0, 1, 2, 3]));
    assert_eq!(perms.get(1), Some(&[0, 1, 3, 2]));
    assert_eq!(perms.last(), Some(&[3, 2, 1, 0]));

    let unique: HashSet<_> = perms.iter().collect();
    assert_eq!(unique.len(), PERMUTATION_COUNT);

    for perm in &perms {
        let mut sorted = *perm;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3]);
    }

    let mut lexicographic = perms.clone();
    lexicographic.sort();
    assert_eq!(lexicographic, perms);
}

#[test]
fn iterator_visits_every_candidate_once_in_order() {
    let candidates: Vec<Candidate> = CandidateIterator::new().collect();
    assert_eq!(candidates.len(), CANDIDATE_COUNT);
    for (i, candidate) in candidates.iter().enumerate() {
        assert_eq!(candidate.index, i);
    }

    let unique: HashSet<_> = candidates
        .iter()
        .map(|c| (c.permutation, c.shape, c.operators))
        .collect();
    assert_eq!(unique.len(), CANDIDATE_COUNT);
}

#[test]
fn iterator_orders_shapes_then_triples() {
    let candidates: Vec<Candidate> = CandidateIterator::new().take(130).collect();

    if let (Some(first), Some(second), Some(boundary)) =
        (candidates.first(), candidates.get(1), candidates.get(64))
    {
        assert_eq!(first.shape, Shape::LeftDeep);
        assert_eq!(first.operators, [Operator::Add; 3]);
        assert_eq!(
            second.operators,
            [Operator::Add, Operator::Add, Operator::Sub]
        );
        assert_eq!(boundary.shape, Shape::InnerLeft);
        assert_eq!(boundary.operators, [Operator::Add; 3]);
    } else {
        panic!("expected at least 65 candidates");
    }
}

#[test]
fn triple_decoding_is_mixed_radix() {
    assert_eq!(Candidate::triple(0), [Operator::Add; 3]);
    assert_eq!(
        Candidate::triple(16),
        [Operator::Sub, Operator::Add, Operator::Add]
    );
    assert_eq!(
        Candidate::triple(3 * 16 + 3 * 4 + 2),
        [Operator::Div, Operator::Div, Operator::Mul]
    );
    assert_eq!(Candidate::triple(63), [Operator::Div; 3]);
}

#[test]
fn iterator_reports_exact_size() {
    let mut it = CandidateIterator::new();
    assert_eq!(it.len(), CANDIDATE_COUNT);
    let _ = it.nth(400);
    assert_eq!(it.len(), CANDIDATE_COUNT - 401);
}

#[test]
fn permutation_iterator_covers_one_ordering() {
    let candidates: Vec<Candidate> = CandidateIterator::for_permutation(23).collect();
    assert_eq!(candidates.len(), 320);
    assert!(candidates.iter().all(|c| c.permutation == [3, 2, 1, 0]));
    assert_eq!(candidates.first().map(|c| c.index), Some(23 * 320));
    assert_eq!(CandidateIterator::for_permutation(24).count(), 0);
}

#[test]
fn candidate_leaves_follow_permutation() {
    let operands = [1.0, 13.0, 1.0, 13.0];
    let candidate = Candidate::new(0, [1, 3, 0, 2], Shape::LeftDeep, 5);
    assert_eq!(candidate.leaves(&operands), [13.0, 13.0, 1.0, 1.0]);
    assert_eq!(
        candidate.operators,
        [Operator::Add, Operator::Sub, Operator::Sub]
    );
    assert_eq!(candidate.evaluate(&operands), 24.0);
    assert_eq!(
        candidate.expression(&operands).to_string(),
        "((13 + 13) - 1) - 1"
    );
}
