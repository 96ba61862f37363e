//! Day 5: fresh ingredient id ranges

use crate::util;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::{Context, ensure};

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(parts = 2)]
#[puzzle(day = 5, tags = ["intervals"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
struct IdRange {
    start: u64,
    end: u64,
}

impl IdRange {
    fn contains(&self, id: u64) -> bool {
        (self.start..=self.end).contains(&id)
    }
}

#[derive(Debug)]
pub struct SharedData {
    fresh: Vec<IdRange>,
    available: Vec<u64>,
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

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let sections = || -> anyhow::Result<SharedData> {
            let (ranges, ids) = input
                .trim()
                .split_once("\n\n")
                .context("expected a blank line between ranges and ids")?;

            let fresh = ranges
                .lines()
                .map(parse_range)
                .collect::<anyhow::Result<Vec<_>>>()?;
            let available = ids
                .lines()
                .map(util::parse_int)
                .collect::<anyhow::Result<Vec<_>>>()?;

            ensure!(!fresh.is_empty(), "no ranges before the blank line");
            Ok(SharedData { fresh, available })
        };

        sections().map_err(util::invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fresh_count = shared
            .available
            .iter()
            .filter(|&&id| shared.fresh.iter().any(|range| range.contains(id)))
            .count();
        Ok(fresh_count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut ranges = shared.fresh.clone();
        ranges.sort_unstable_by_key(|range| range.start);

        // Sweep left to right, counting only ids above everything already seen
        let mut covered = 0u64;
        let mut highest: Option<u64> = None;
        for range in ranges {
            let from = match highest {
                Some(h) if range.start <= h => h.saturating_add(1),
                _ => range.start,
            };
            if from <= range.end {
                covered += range.end - from + 1;
            }
            highest = Some(highest.map_or(range.end, |h| h.max(range.end)));
        }
        Ok(covered.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32";

    #[test]
    fn test_count_fresh_ids() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        let answer = <Solver as PartSolver<1>>::solve(&mut shared).unwrap();
        assert_eq!(answer, "3");
    }

    #[test]
    fn test_union_size_of_overlapping_ranges() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        // 3-5 plus the merged 10-20
        let answer = <Solver as PartSolver<2>>::solve(&mut shared).unwrap();
        assert_eq!(answer, "14");
    }

    #[test]
    fn test_union_counts_range_starting_at_zero() {
        let mut shared = Solver::parse("0-4\n2-6\n\n1").unwrap();
        let answer = <Solver as PartSolver<2>>::solve(&mut shared).unwrap();
        assert_eq!(answer, "7");
    }

    #[test]
    fn test_nested_range_adds_nothing() {
        let mut shared = Solver::parse("10-20\n12-15\n\n1").unwrap();
        let answer = <Solver as PartSolver<2>>::solve(&mut shared).unwrap();
        assert_eq!(answer, "11");
    }

    #[test]
    fn test_rejects_missing_separator() {
        assert!(Solver::parse("3-5\n10-14").is_err());
    }
}
