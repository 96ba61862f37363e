//! Day 4: paper rolls a forklift can reach

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::{Context, ensure};

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(parts = 1)]
#[puzzle(day = 4, tags = ["grid"])]
pub struct Solver;

const NEIGHBORS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug)]
pub struct Grid {
    rolls: Vec<Vec<bool>>,
}

impl Grid {
    fn is_roll(&self, row: i64, col: i64) -> bool {
        row >= 0
            && col >= 0
            && self
                .rolls
                .get(row as usize)
                .is_some_and(|r| r.get(col as usize).copied().unwrap_or(false))
    }

    fn roll_neighbors(&self, row: usize, col: usize) -> usize {
        NEIGHBORS
            .iter()
            .filter(|&&(dr, dc)| self.is_roll(row as i64 + dr, col as i64 + dc))
            .count()
    }
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Grid;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let parse_line = |line: &str| -> anyhow::Result<Vec<bool>> {
            ensure!(!line.is_empty(), "empty grid row");
            line.bytes()
                .map(|b| match b {
                    b'@' => Ok(true),
                    b'.' => Ok(false),
                    _ => anyhow::bail!("unexpected character {:?} in grid", b as char),
                })
                .collect()
        };

        input
            .trim()
            .lines()
            .map(parse_line)
            .collect::<anyhow::Result<Vec<_>>>()
            .and_then(|rolls| {
                ensure!(!rolls.is_empty(), "empty grid");
                ensure!(
                    rolls.iter().all(|r| r.len() == rolls[0].len()),
                    "grid rows differ in length"
                );
                Ok(Grid { rolls })
            })
            .context("grid of '.' and '@' expected")
            .map_err(crate::util::invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut accessible = 0u64;
        for (row, cells) in shared.rolls.iter().enumerate() {
            for (col, &is_roll) in cells.iter().enumerate() {
                if is_roll && shared.roll_neighbors(row, col) < 4 {
                    accessible += 1;
                }
            }
        }
        Ok(accessible.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_reachable_rolls() {
        let input = "@@.\n@@@\n.@@";
        let mut shared = Solver::parse(input).unwrap();
        // Only the two outer corners have fewer than four roll neighbors
        let answer = <Solver as PartSolver<1>>::solve(&mut shared).unwrap();
        assert_eq!(answer, "2");
    }

    #[test]
    fn test_lone_roll_is_accessible() {
        let mut shared = Solver::parse(".....\n..@..\n.....").unwrap();
        let answer = <Solver as PartSolver<1>>::solve(&mut shared).unwrap();
        assert_eq!(answer, "1");
    }

    #[test]
    fn test_rejects_ragged_or_foreign_grids() {
        assert!(Solver::parse("@@.\n@@").is_err());
        assert!(Solver::parse("@#.").is_err());
    }
}
