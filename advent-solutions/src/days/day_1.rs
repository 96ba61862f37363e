//! Day 1: a combination dial rotated left and right

use crate::util;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::{Context, bail, ensure};

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(parts = 2)]
#[puzzle(day = 1, tags = ["dial"])]
pub struct Solver;

const DIAL_SIZE: i64 = 100;
const DIAL_START: i64 = 50;

#[derive(Debug)]
pub struct SharedData {
    rotations: Vec<i64>,
    counts: Option<ZeroCounts>,
}

#[derive(Debug, Clone, Copy)]
struct ZeroCounts {
    /// Turns after which the dial rests on zero
    rests: u64,
    /// Every time the dial reaches or passes zero, rests included
    passes: u64,
}

/// `L<n>` turns left (negative), `R<n>` turns right (positive).
fn parse_rotation(line: &str) -> anyhow::Result<i64> {
    let (dir, count) = line.split_at_checked(1).context("empty line")?;
    let count: i64 = util::parse_int(count)?;
    ensure!(count > 0, "rotation count must be positive");
    match dir {
        "L" => Ok(-count),
        "R" => Ok(count),
        _ => bail!("rotation must start with 'L' or 'R', got {line:?}"),
    }
}

fn count_zeroes(rotations: &[i64]) -> ZeroCounts {
    let mut pos = DIAL_START;
    let mut rests = 0;
    let mut passes = 0;

    for &rot in rotations {
        let old = pos;
        let mut next = old + rot;
        // Leftward moves reach zero before wrapping; rightward moves and
        // full revolutions are covered by the division below.
        if next <= 0 && old != 0 {
            passes += 1;
        }
        passes += (next / DIAL_SIZE).unsigned_abs();
        next %= DIAL_SIZE;
        if next < 0 {
            next += DIAL_SIZE;
        }
        if next == 0 {
            rests += 1;
        }
        pos = next;
    }

    ZeroCounts { rests, passes }
}

fn counts(shared: &mut SharedData) -> ZeroCounts {
    *shared
        .counts
        .get_or_insert_with(|| count_zeroes(&shared.rotations))
}

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(i, line)| parse_rotation(line).with_context(|| format!("line {}", i + 1)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map(|rotations| SharedData {
                rotations,
                counts: None,
            })
            .map_err(util::invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(counts(shared).rests.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(counts(shared).passes.to_string())
    }
}
