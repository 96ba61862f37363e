//! Day 7: tachyon beams in a splitter manifold

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::{bail, ensure};

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(parts = 2)]
#[puzzle(day = 7, tags = ["grid", "beams"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Start,
    Splitter,
}

fn parse_cell(b: u8) -> anyhow::Result<Cell> {
    match b {
        b'.' => Ok(Cell::Empty),
        b'S' => Ok(Cell::Start),
        b'^' => Ok(Cell::Splitter),
        _ => bail!("unexpected character {:?} in manifold", b as char),
    }
}

fn parse_row(line: &str) -> anyhow::Result<Vec<Cell>> {
    ensure!(!line.is_empty(), "empty manifold row");
    line.bytes().map(parse_cell).collect()
}

/// A beam travels straight down; each splitter it meets consumes it and
/// emits one beam to either side.
fn count_splits(rows: &[Vec<Cell>]) -> u64 {
    let width = rows[0].len();
    let mut beams = vec![false; width];
    let mut splits = 0;

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            match cell {
                Cell::Empty => {}
                Cell::Start => beams[i] = true,
                Cell::Splitter => {
                    if beams[i] {
                        splits += 1;
                        beams[i] = false;
                        if i > 0 {
                            beams[i - 1] = true;
                        }
                        if i + 1 < width {
                            beams[i + 1] = true;
                        }
                    }
                }
            }
        }
    }

    splits
}

/// Same walk, but each splitter forks every timeline reaching it; timelines
/// leaving the grid sideways vanish.
fn count_timelines(rows: &[Vec<Cell>]) -> u64 {
    let width = rows[0].len();
    let mut timelines = vec![0u64; width];

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            match cell {
                Cell::Empty => {}
                Cell::Start => timelines[i] = 1,
                Cell::Splitter => {
                    if timelines[i] > 0 {
                        if i > 0 {
                            timelines[i - 1] += timelines[i];
                        }
                        if i + 1 < width {
                            timelines[i + 1] += timelines[i];
                        }
                        timelines[i] = 0;
                    }
                }
            }
        }
    }

    timelines.iter().sum()
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<Vec<Cell>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .map(parse_row)
            .collect::<anyhow::Result<Vec<_>>>()
            .and_then(|rows| {
                ensure!(!rows.is_empty(), "empty manifold");
                ensure!(
                    rows.iter().all(|r| r.len() == rows[0].len()),
                    "manifold rows differ in length"
                );
                Ok(rows)
            })
            .map_err(crate::util::invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_splits(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_timelines(shared).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = ".S.\n.^.\n^.^";

    #[test]
    fn test_counts_splits() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        let answer = <Solver as PartSolver<1>>::solve(&mut shared).unwrap();
        assert_eq!(answer, "3");
    }

    #[test]
    fn test_counts_timelines() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        // Both edge splitters fork; the halves that leave the grid vanish
        let answer = <Solver as PartSolver<2>>::solve(&mut shared).unwrap();
        assert_eq!(answer, "2");
    }

    #[test]
    fn test_beam_without_splitters() {
        let mut shared = Solver::parse("S..\n...\n...").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "0");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "1");
    }

    #[test]
    fn test_rejects_unknown_cells() {
        assert!(Solver::parse(".S.\n.X.").is_err());
    }
}
