//! Day 3: maximum joltage from battery bank digit subsequences

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::{Context, ensure};

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(parts = 2)]
#[puzzle(day = 3, tags = ["digits"])]
pub struct Solver;

fn parse_bank(line: &str) -> anyhow::Result<Vec<u8>> {
    ensure!(line.len() >= 2, "bank {line:?} has fewer than two batteries");
    line.bytes()
        .map(|b| {
            ensure!(b.is_ascii_digit(), "bank {line:?} contains a non-digit");
            Ok(b - b'0')
        })
        .collect()
}

/// Largest value readable by keeping `n` digits in order: repeatedly take the
/// leftmost maximum that still leaves enough digits for the remaining picks.
fn best_subsequence(digits: &[u8], n: usize) -> anyhow::Result<u64> {
    ensure!(
        digits.len() >= n,
        "bank of {} batteries cannot supply {n} digits",
        digits.len()
    );

    let mut value = 0u64;
    let mut start = 0;
    for remaining in (1..=n).rev() {
        let window_end = digits.len() - remaining + 1;
        let mut best = start;
        for i in start + 1..window_end {
            if digits[i] > digits[best] {
                best = i;
            }
        }
        value = value * 10 + u64::from(digits[best]);
        start = best + 1;
    }
    Ok(value)
}

fn total_joltage(banks: &[Vec<u8>], n: usize) -> Result<String, SolveError> {
    banks
        .iter()
        .map(|bank| best_subsequence(bank, n))
        .sum::<anyhow::Result<u64>>()
        .map(|total| total.to_string())
        .map_err(|e| SolveError::SolveFailed(e.into()))
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<Vec<u8>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(i, line)| parse_bank(line).with_context(|| format!("line {}", i + 1)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(crate::util::invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 2)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_digit_subsequence() {
        assert_eq!(best_subsequence(&[9, 8, 7, 6, 5, 4], 2).unwrap(), 98);
        assert_eq!(best_subsequence(&[2, 8, 1, 6], 2).unwrap(), 86);
        // The trailing digit can only ever be the second pick
        assert_eq!(best_subsequence(&[1, 9], 2).unwrap(), 19);
    }

    #[test]
    fn test_twelve_digit_subsequence() {
        let digits: Vec<u8> = vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 1, 2, 3];
        // Dropping the zero beats dropping anything later
        assert_eq!(best_subsequence(&digits, 12).unwrap(), 987654321123);
    }

    #[test]
    fn test_sums_over_banks() {
        let mut shared = Solver::parse("987654\n2816").unwrap();
        let answer = <Solver as PartSolver<1>>::solve(&mut shared).unwrap();
        assert_eq!(answer, "184");
    }

    #[test]
    fn test_short_bank_fails_part_two() {
        let mut shared = Solver::parse("987654\n2816").unwrap();
        assert!(<Solver as PartSolver<2>>::solve(&mut shared).is_err());
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(Solver::parse("98a7").is_err());
        assert!(Solver::parse("7").is_err());
    }
}
