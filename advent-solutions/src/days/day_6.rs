//! Day 6: the cephalopod math worksheet

use crate::util;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::{Context, bail, ensure};

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(parts = 2)]
#[puzzle(day = 6, tags = ["worksheet"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Multiply,
}

#[derive(Debug)]
struct Problem {
    op: Op,
    operands: Vec<u64>,
}

impl Problem {
    fn eval(&self) -> u64 {
        match self.op {
            Op::Add => self.operands.iter().sum(),
            Op::Multiply => self.operands.iter().product(),
        }
    }
}

fn parse_op(b: u8) -> anyhow::Result<Op> {
    match b {
        b'+' => Ok(Op::Add),
        b'*' => Ok(Op::Multiply),
        _ => bail!("unknown operator {:?}", b as char),
    }
}

/// Columns read the usual way: the k-th token of every number row belongs to
/// the k-th problem, operators come from the last row.
fn column_problems(lines: &[&str]) -> anyhow::Result<Vec<Problem>> {
    let (op_line, number_lines) = lines.split_last().context("empty worksheet")?;

    let mut problems = op_line
        .split_whitespace()
        .map(|token| {
            ensure!(token.len() == 1, "operator {token:?} is not a single character");
            Ok(Problem {
                op: parse_op(token.as_bytes()[0])?,
                operands: Vec::new(),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    for line in number_lines {
        let numbers = line
            .split_whitespace()
            .map(util::parse_int)
            .collect::<anyhow::Result<Vec<u64>>>()?;
        ensure!(
            numbers.len() == problems.len(),
            "row has {} values, expected {}",
            numbers.len(),
            problems.len()
        );
        for (problem, number) in problems.iter_mut().zip(numbers) {
            problem.operands.push(number);
        }
    }

    Ok(problems)
}

/// Columns read the cephalopod way: right to left, one character column per
/// operand digit run, an all-space column between problems, the operator in
/// the bottom row.
fn cephalopod_problems(lines: &[&str]) -> anyhow::Result<Vec<Problem>> {
    let rows: Vec<&[u8]> = lines.iter().map(|l| l.as_bytes()).collect();
    let width = rows.iter().map(|r| r.len()).max().context("empty worksheet")?;

    let mut problems = vec![Problem {
        op: Op::Add,
        operands: Vec::new(),
    }];

    for col in (0..width).rev() {
        // Short lines count as space-padded
        let column: Vec<u8> = rows
            .iter()
            .map(|row| row.get(col).copied().unwrap_or(b' '))
            .collect();

        if column.iter().all(|&b| b == b' ') {
            problems.push(Problem {
                op: Op::Add,
                operands: Vec::new(),
            });
            continue;
        }

        let (&op_byte, digit_bytes) = column.split_last().context("worksheet has no rows")?;

        let mut operand = 0u64;
        for &b in digit_bytes {
            if b == b' ' {
                continue;
            }
            ensure!(b.is_ascii_digit(), "unexpected character {:?} in column", b as char);
            operand = operand * 10 + u64::from(b - b'0');
        }

        let problem = problems.last_mut().expect("started with one problem");
        problem.operands.push(operand);
        if op_byte != b' ' {
            problem.op = parse_op(op_byte)?;
        }
    }

    problems.retain(|p| !p.operands.is_empty());
    Ok(problems)
}

fn grand_total(problems: Vec<Problem>) -> String {
    problems
        .iter()
        .map(Problem::eval)
        .sum::<u64>()
        .to_string()
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        // Keep lines verbatim: column positions carry meaning, so only
        // trailing blank lines can go.
        let mut lines: Vec<&str> = input.lines().collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }

        if lines.len() < 2 {
            return Err(ParseError::MissingData(
                "worksheet needs number rows and an operator row".to_string(),
            ));
        }
        if let Some(line) = lines.iter().find(|l| !l.is_ascii()) {
            return Err(ParseError::InvalidFormat(format!(
                "worksheet line {line:?} is not ASCII"
            )));
        }

        Ok(lines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        column_problems(shared)
            .map(grand_total)
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        cephalopod_problems(shared)
            .map(grand_total)
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}
