//! Day 9: the largest rectangle of red floor tiles

mod floor;

use crate::util;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::Context;
use floor::{Floor, Point, Rect};
use itertools::Itertools;

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(parts = 2)]
#[puzzle(day = 9, tags = ["geometry", "intervals"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    corners: Vec<Point>,
    floor: Floor,
}

fn parse_point(line: &str) -> anyhow::Result<Point> {
    let [col, row] = util::parse_array(line.split(',').map(util::parse_int))?;
    Ok(Point::new(col, row))
}

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let corners = input
            .trim()
            .lines()
            .enumerate()
            .map(|(i, line)| parse_point(line).with_context(|| format!("line {}", i + 1)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(util::invalid_input)?;

        // The boundary is part of the input contract, so a degenerate or
        // self-crossing one is a parse failure, not a solve failure
        let floor = Floor::build(&corners)
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        Ok(SharedData { corners, floor })
    }
}

fn corner_rectangles(corners: &[Point]) -> impl Iterator<Item = Rect> + '_ {
    corners
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| Rect::bounding(a, b))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let largest = corner_rectangles(&shared.corners)
            .map(|rect| rect.area())
            .max()
            .expect("parser guarantees at least four corners");
        Ok(largest.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        corner_rectangles(&shared.corners)
            .filter(|&rect| shared.floor.is_tiled(rect))
            .map(|rect| rect.area())
            .max()
            .map(|area| area.to_string())
            .ok_or_else(|| {
                SolveError::NoSolution("no corner pair spans a fully tiled rectangle".to_string())
            })
    }
}
