//! The AdventSolver derive routes runtime part numbers to PartSolver impls

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError, Solver, SolverExt};
use advent_solver_macros::AdventSolver;

#[derive(AdventSolver)]
#[advent_solver(parts = 2)]
struct TestSolver;

impl PuzzleParser for TestSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

#[test]
fn test_parts_constant() {
    assert_eq!(TestSolver::PARTS, 2);
}

#[test]
fn test_dispatch_to_parts() {
    let mut shared = TestSolver::parse("1\n2\n3\n4\n5").unwrap();

    assert_eq!(TestSolver::solve_part(&mut shared, 1).unwrap(), "15");
    assert_eq!(TestSolver::solve_part(&mut shared, 2).unwrap(), "120");
}

#[test]
fn test_unrouted_part_not_implemented() {
    let mut shared = TestSolver::parse("1\n2\n3").unwrap();

    let result = TestSolver::solve_part(&mut shared, 3);
    assert!(matches!(result, Err(SolveError::PartNotImplemented(3))));
}

#[test]
fn test_checked_range_rejects_beyond_parts() {
    let mut shared = TestSolver::parse("1\n2\n3").unwrap();

    let result = TestSolver::solve_part_checked_range(&mut shared, 3);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
}
