//! Day 2: summing the ids whose decimal halves repeat

use crate::util;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::{Context, ensure};

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(parts = 1)]
#[puzzle(day = 2, tags = ["ranges"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct IdRange {
    start: u64,
    end: u64,
}

fn parse_range(s: &str) -> anyhow::Result<IdRange> {
    let (start, end) = util::split_in_two(s, '-')?;
    let range = IdRange {
        start: util::parse_int(start)?,
        end: util::parse_int(end)?,
    };
    ensure!(range.start <= range.end, "inverted range {s:?}");
    Ok(range)
}

/// An id is invalid when its decimal representation is one half written twice.
fn is_invalid(id: u64) -> bool {
    let digits = id.to_string();
    if digits.len() % 2 != 0 {
        return false;
    }
    let (front, back) = digits.split_at(digits.len() / 2);
    front == back
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<IdRange>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .next()
            .context("empty input")
            .and_then(|line| line.trim().split(',').map(parse_range).collect())
            .map_err(util::invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .iter()
            .flat_map(|range| range.start..=range.end)
            .filter(|&id| is_invalid(id))
            .sum();
        Ok(total.to_string())
    }
}
