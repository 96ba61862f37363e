//! Day 11: counting paths through the server rack

use crate::util;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::{Context, bail, ensure};
use std::collections::HashMap;

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(parts = 1)]
#[puzzle(day = 11, tags = ["graph"])]
pub struct Solver;

const START: &str = "you";
const GOAL: &str = "out";

type Connections<'a> = HashMap<&'a str, Vec<&'a str>>;

fn valid_device(name: &str) -> anyhow::Result<&str> {
    ensure!(
        name.len() == 3 && name.bytes().all(|b| b.is_ascii_alphabetic()),
        "device name {name:?} is not three letters"
    );
    Ok(name)
}

fn parse_connection(line: &str) -> anyhow::Result<(&str, Vec<&str>)> {
    let (device, targets) = util::split_in_two(line, ':')?;
    let device = valid_device(device)?;
    let targets = targets
        .split_whitespace()
        .map(valid_device)
        .collect::<anyhow::Result<Vec<_>>>()?;
    ensure!(!targets.is_empty(), "device {device:?} connects to nothing");
    Ok((device, targets))
}

/// Distinct paths from `node` to the outside, memoized per device.
fn count_paths<'a>(
    connections: &Connections<'a>,
    node: &'a str,
    memo: &mut HashMap<&'a str, Option<u64>>,
) -> anyhow::Result<u64> {
    if node == GOAL {
        return Ok(1);
    }
    match memo.get(node) {
        Some(Some(count)) => return Ok(*count),
        // Still on the stack below us
        Some(None) => bail!("connection loop through {node:?}"),
        None => {}
    }

    memo.insert(node, None);
    let mut total: u64 = 0;
    if let Some(targets) = connections.get(node) {
        for &target in targets {
            total += count_paths(connections, target, memo)?;
        }
    }
    memo.insert(node, Some(total));
    Ok(total)
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Connections<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(i, line)| parse_connection(line).with_context(|| format!("line {}", i + 1)))
            .collect::<anyhow::Result<Connections<'_>>>()
            .map_err(util::invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = || -> anyhow::Result<u64> {
            ensure!(shared.contains_key(START), "no {START:?} device in the rack");
            let mut memo = HashMap::new();
            count_paths(shared, START, &mut memo)
        };
        count()
            .map(|paths| paths.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_all_paths() {
        let input = "you: aaa bbb\naaa: out\nbbb: aaa out";
        let mut shared = Solver::parse(input).unwrap();
        // you-aaa-out, you-bbb-out, you-bbb-aaa-out
        let answer = <Solver as PartSolver<1>>::solve(&mut shared).unwrap();
        assert_eq!(answer, "3");
    }

    #[test]
    fn test_shared_suffixes_multiply() {
        let input = "you: aaa bbb\naaa: ccc\nbbb: ccc\nccc: out out";
        let mut shared = Solver::parse(input).unwrap();
        // Two branches into ccc, two listed exits from it
        let answer = <Solver as PartSolver<1>>::solve(&mut shared).unwrap();
        assert_eq!(answer, "4");
    }

    #[test]
    fn test_dead_ends_contribute_nothing() {
        let input = "you: aaa bbb\naaa: out\nbbb: ddd\nddd: eee";
        let mut shared = Solver::parse(input).unwrap();
        let answer = <Solver as PartSolver<1>>::solve(&mut shared).unwrap();
        assert_eq!(answer, "1");
    }

    #[test]
    fn test_missing_start_fails() {
        let mut shared = Solver::parse("aaa: out").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut shared).is_err());
    }

    #[test]
    fn test_loop_detected() {
        let input = "you: aaa\naaa: bbb\nbbb: aaa out";
        let mut shared = Solver::parse(input).unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut shared).is_err());
    }

    #[test]
    fn test_rejects_malformed_lines() {
        assert!(Solver::parse("you aaa").is_err());
        assert!(Solver::parse("you: ab").is_err());
        assert!(Solver::parse("y2u: aaa").is_err());
    }
}
