use crate::expression::Expression;
use crate::iterator::constants::CANDIDATE_COUNT;
use crate::solver::{Comparison, ExpressionEnumerator, SolverConfig, SolverError, SolverSession};

fn rendered(operands: [f64; 4]) -> Vec<String> {
    ExpressionEnumerator::default()
        .enumerate(&operands)
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn sequential() -> ExpressionEnumerator {
    ExpressionEnumerator::new(SolverConfig {
        parallel: false,
        ..SolverConfig::default()
    })
}

#[test]
fn test_four_sixes_start_with_left_deep_sum() {
    let solutions = rendered([6.0, 6.0, 6.0, 6.0]);
    assert_eq!(
        solutions.first().map(String::as_str),
        Some("((6 + 6) + 6) + 6")
    );
}

#[test]
fn test_four_ones_have_no_solution() {
    assert!(rendered([1.0, 1.0, 1.0, 1.0]).is_empty());
}

#[test]
fn test_aces_and_kings() {
    let solutions = rendered([1.0, 13.0, 1.0, 13.0]);
    assert!(solutions.iter().any(|s| s == "((13 + 13) - 1) - 1"));
}

#[test]
fn test_known_solutions_are_found() {
    let solutions = rendered([4.0, 1.0, 8.0, 7.0]);
    assert!(solutions.iter().any(|s| s == "(8 - 4) * (7 - 1)"));

    let solutions = rendered([1.0, 2.0, 3.0, 4.0]);
    assert!(solutions.iter().any(|s| s == "((1 + 2) + 3) * 4"));
    assert!(solutions.iter().any(|s| s == "((1 * 2) * 3) * 4"));
}

#[test]
fn test_exact_comparison_misses_inexact_division_chain() {
    let exact = rendered([8.0, 3.0, 3.0, 8.0]);
    assert!(!exact.iter().any(|s| s == "8 / (3 - (8 / 3))"));

    let tolerant = ExpressionEnumerator::new(SolverConfig {
        comparison: Comparison::Tolerance(1e-9),
        ..SolverConfig::default()
    });
    let solutions: Vec<String> = tolerant
        .enumerate(&[8.0, 3.0, 3.0, 8.0])
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert!(solutions.iter().any(|s| s == "8 / (3 - (8 / 3))"));
}

#[test]
fn test_solutions_reevaluate_to_target() {
    for operands in [
        [4.0, 1.0, 8.0, 7.0],
        [1.0, 13.0, 1.0, 13.0],
        [12.0, 12.0, 12.0, 12.0],
        [2.0, 3.0, 5.0, 12.0],
    ] {
        for s in rendered(operands) {
            let parsed: Result<Expression, _> = s.parse();
            assert!(parsed.is_ok(), "could not parse {}", s);
            if let Ok(expr) = parsed {
                assert_eq!(expr.evaluate(), 24.0, "{}", s);
            }
        }
    }
}

#[test]
fn test_solutions_use_each_operand_once() {
    let operands = [2.0, 3.0, 5.0, 12.0];
    for solution in ExpressionEnumerator::default().enumerate(&operands) {
        let mut leaves = solution.expression().leaves();
        leaves.sort_by(f64::total_cmp);
        assert_eq!(leaves, operands.to_vec());
    }
}

#[test]
fn test_candidate_indices_strictly_increase() {
    let solutions = ExpressionEnumerator::default().enumerate(&[6.0, 6.0, 6.0, 6.0]);
    assert!(!solutions.is_empty());
    assert!(solutions.len() <= CANDIDATE_COUNT);
    for pair in solutions.windows(2) {
        if let [a, b] = pair {
            assert!(a.candidate().index < b.candidate().index);
        }
    }
}

#[test]
fn test_duplicate_strings_are_kept() {
    // Equal operands in swapped positions render identically
    let solutions = rendered([6.0, 6.0, 6.0, 6.0]);
    let count = solutions
        .iter()
        .filter(|s| s.as_str() == "((6 + 6) + 6) + 6")
        .count();
    assert_eq!(count, 24);
}

#[test]
fn test_deterministic_and_parallel_matches_sequential() {
    let operands = [3.0, 8.0, 4.0, 1.0];
    let first = ExpressionEnumerator::default().enumerate(&operands);
    let second = ExpressionEnumerator::default().enumerate(&operands);
    let serial = sequential().enumerate(&operands);
    assert_eq!(first, second);
    assert_eq!(first, serial);
}

#[test]
fn test_solution_set_invariant_under_input_order() {
    let mut forward = rendered([4.0, 1.0, 8.0, 7.0]);
    let mut reversed = rendered([7.0, 8.0, 1.0, 4.0]);
    forward.sort();
    reversed.sort();
    assert!(!forward.is_empty());
    assert_eq!(forward, reversed);
}

#[test]
fn test_zero_subexpressions_do_not_abort() {
    // 3 - 3 and 8 - 8 feed divisions by zero
    for solution in ExpressionEnumerator::default().enumerate(&[3.0, 3.0, 8.0, 8.0]) {
        assert_eq!(solution.expression().evaluate(), 24.0);
    }
    assert!(rendered([0.0, 0.0, 0.0, 0.0]).is_empty());
    assert!(rendered([0.0, 4.0, 6.0, 1.0]).iter().any(|s| s == "((0 + 4) * 6) * 1"));
}

#[test]
fn test_custom_target() {
    let enumerator = ExpressionEnumerator::new(SolverConfig {
        target: 10.0,
        ..SolverConfig::default()
    });
    let solutions = enumerator.enumerate(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(
        solutions.first().map(|s| s.to_string()),
        Some("((1 + 2) + 3) + 4".to_string())
    );
}

#[test]
fn test_session_records_result() {
    let mut session = SolverSession::default();
    assert!(session.result().is_none());

    let count = match session.solve(&[4.0, 1.0, 8.0, 7.0]) {
        Ok(result) => {
            assert!(result.solution_count() > 0);
            assert_eq!(result.expressions().count(), result.solution_count());
            result.solution_count()
        }
        Err(e) => panic!("solve failed: {}", e),
    };

    assert_eq!(session.operands(), Some(&[4.0, 1.0, 8.0, 7.0]));
    assert_eq!(session.result().map(|r| r.solution_count()), Some(count));
}

#[test]
fn test_session_replaces_previous_result() {
    let mut session = SolverSession::default();
    assert!(session.solve(&[6.0, 6.0, 6.0, 6.0]).is_ok());
    assert!(session.solve(&[1.0, 1.0, 1.0, 1.0]).is_ok());
    assert_eq!(session.result().map(|r| r.is_empty()), Some(true));
    assert_eq!(session.operands(), Some(&[1.0; 4]));
}

#[test]
fn test_session_rejects_wrong_operand_count() {
    let mut session = SolverSession::default();
    assert_eq!(
        session.solve(&[1.0, 2.0, 3.0]).err(),
        Some(SolverError::OperandCount(3))
    );
    assert_eq!(
        session.solve(&[1.0, 2.0, 3.0, 4.0, 5.0]).err(),
        Some(SolverError::OperandCount(5))
    );
    assert!(session.result().is_none());
}

#[test]
fn test_comparison_policies() {
    assert!(Comparison::Exact.matches(24.0, 24.0));
    assert!(!Comparison::Exact.matches(23.999_999_999_999_99, 24.0));
    assert!(Comparison::Tolerance(1e-9).matches(23.999_999_999_999_99, 24.0));
    assert!(!Comparison::Tolerance(1e-9).matches(f64::NAN, 24.0));
    assert!(!Comparison::Exact.matches(f64::INFINITY, 24.0));
}
