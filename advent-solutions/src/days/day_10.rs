//! Day 10: pressing the fewest buttons to light a machine's diagram

use crate::util;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::{Context, ensure};

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(parts = 1)]
#[puzzle(day = 10, tags = ["bitmask"])]
pub struct Solver;

#[derive(Debug)]
pub struct Machine {
    /// Target indicator lights, one bit per light
    target: u64,
    /// One toggle mask per wiring schematic
    wiring: Vec<u64>,
}

fn strip_brackets<'a>(token: &'a str, open: char, close: char) -> anyhow::Result<&'a str> {
    token
        .strip_prefix(open)
        .and_then(|t| t.strip_suffix(close))
        .with_context(|| format!("expected {open}...{close}, got {token:?}"))
}

fn parse_lights(token: &str) -> anyhow::Result<(u64, u32)> {
    let inner = strip_brackets(token, '[', ']')?;
    ensure!(!inner.is_empty(), "empty light diagram");
    ensure!(inner.len() <= 64, "more than 64 indicator lights");

    let mut mask = 0u64;
    for (i, b) in inner.bytes().enumerate() {
        match b {
            b'#' => mask |= 1 << i,
            b'.' => {}
            _ => anyhow::bail!("unexpected character {:?} in light diagram", b as char),
        }
    }
    Ok((mask, inner.len() as u32))
}

fn parse_schematic(token: &str, lights: u32) -> anyhow::Result<u64> {
    let inner = strip_brackets(token, '(', ')')?;
    let mut mask = 0u64;
    for field in inner.split(',') {
        let light: u32 = util::parse_int(field)?;
        ensure!(light < lights, "wire to light {light} of {lights}");
        mask |= 1 << light;
    }
    Ok(mask)
}

fn parse_machine(line: &str) -> anyhow::Result<Machine> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    ensure!(
        tokens.len() >= 3,
        "expected lights, schematics and joltage, got {line:?}"
    );

    let (target, lights) = parse_lights(tokens[0])?;

    let wiring = tokens[1..tokens.len() - 1]
        .iter()
        .map(|token| parse_schematic(token, lights))
        .collect::<anyhow::Result<Vec<_>>>()?;

    // Joltage requirements belong to a later puzzle; only their shape is held
    // against the format here
    let joltage = strip_brackets(tokens[tokens.len() - 1], '{', '}')?;
    for field in joltage.split(',') {
        util::parse_int::<u64>(field)?;
    }

    Ok(Machine { target, wiring })
}

/// Pressing a button twice undoes it, so a press set is a subset of the
/// schematics; enumerate them all and keep the smallest that lights the
/// diagram exactly.
fn minimal_presses(machine: &Machine) -> anyhow::Result<Option<u32>> {
    ensure!(
        machine.wiring.len() < 24,
        "{} schematics is past exhaustive search",
        machine.wiring.len()
    );

    let best = (0u32..1 << machine.wiring.len())
        .filter(|selection| {
            let lit = machine
                .wiring
                .iter()
                .enumerate()
                .filter(|(i, _)| selection & (1 << i) != 0)
                .fold(0u64, |acc, (_, mask)| acc ^ mask);
            lit == machine.target
        })
        .map(u32::count_ones)
        .min();
    Ok(best)
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(i, line)| parse_machine(line).with_context(|| format!("line {}", i + 1)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(util::invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total: u64 = 0;
        for (i, machine) in shared.iter().enumerate() {
            let presses = minimal_presses(machine)
                .map_err(|e| SolveError::SolveFailed(e.into()))?
                .ok_or_else(|| {
                    SolveError::NoSolution(format!(
                        "machine {} cannot reach its light diagram",
                        i + 1
                    ))
                })?;
            total += u64::from(presses);
        }
        Ok(total.to_string())
    }
}
