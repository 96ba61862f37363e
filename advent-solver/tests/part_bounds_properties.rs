//! Property-based tests for solver part bounds validation

use advent_solver::{ParseError, PuzzleParser, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Test solver with configurable PARTS
struct TestSolver<const N: u8>;

impl<const N: u8> PuzzleParser for TestSolver<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for TestSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// For any solver with PARTS = N, `solve_part_checked_range(part)` with
    /// part = 0 or part > N returns `PartOutOfRange(part)`; otherwise it
    /// succeeds.
    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=3, part in 0u8..=255) {
        let mut shared = ();

        let result = match max_parts {
            1 => TestSolver::<1>::solve_part_checked_range(&mut shared, part),
            2 => TestSolver::<2>::solve_part_checked_range(&mut shared, part),
            _ => TestSolver::<3>::solve_part_checked_range(&mut shared, part),
        };

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert!(result.is_ok(), "Expected Ok for part {} with max {}", part, max_parts);
        }
    }

    /// For parts inside `1..=PARTS`, `solve_part_checked_range` delegates to
    /// `solve_part` unchanged.
    #[test]
    fn prop_valid_range_delegation(part in 1u8..=2) {
        let mut shared = ();
        let mut shared2 = ();

        let checked_result = TestSolver::<2>::solve_part_checked_range(&mut shared, part);
        let direct_result = TestSolver::<2>::solve_part(&mut shared2, part);

        prop_assert!(checked_result.is_ok());
        prop_assert!(direct_result.is_ok());
        prop_assert_eq!(checked_result.unwrap(), direct_result.unwrap());
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_part_zero_rejected() {
        let mut shared = ();
        let result = TestSolver::<2>::solve_part_checked_range(&mut shared, 0);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
    }

    #[test]
    fn test_part_exceeds_max_rejected() {
        let mut shared = ();
        let result = TestSolver::<2>::solve_part_checked_range(&mut shared, 3);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_valid_part_succeeds() {
        let mut shared = ();
        let result = TestSolver::<2>::solve_part_checked_range(&mut shared, 1);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "part1");
    }
}
