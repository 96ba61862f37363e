//! Day 8: wiring the closest junction boxes into circuits

use crate::util;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::{Context, ensure};
use itertools::Itertools;

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(parts = 1)]
#[puzzle(day = 8, tags = ["clustering"])]
pub struct Solver;

/// Connections made on the real input
const CONNECTIONS: usize = 1000;

#[derive(Debug, Clone, Copy)]
pub struct Junction {
    x: u64,
    y: u64,
    z: u64,
}

fn distance_squared(a: Junction, b: Junction) -> u128 {
    let dx = a.x.abs_diff(b.x) as u128;
    let dy = a.y.abs_diff(b.y) as u128;
    let dz = a.z.abs_diff(b.z) as u128;
    dx * dx + dy * dy + dz * dz
}

fn parse_junction(line: &str) -> anyhow::Result<Junction> {
    let [x, y, z] = util::parse_array(line.split(',').map(util::parse_int))?;
    Ok(Junction { x, y, z })
}

/// Union-find over junction indices with size tracking
struct Circuits {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl Circuits {
    fn new(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            size: vec![1; count],
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            // Path halving
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
    }

    /// Sizes of all circuits, largest first
    fn sizes(&mut self) -> Vec<usize> {
        let roots: Vec<usize> = (0..self.parent.len())
            .filter(|&i| self.find(i) == i)
            .collect();
        let mut sizes: Vec<usize> = roots.iter().map(|&root| self.size[root]).collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }
}

fn largest_circuits_product(
    junctions: &[Junction],
    connections: usize,
) -> anyhow::Result<u64> {
    ensure!(junctions.len() >= 2, "need at least two junction boxes");

    let mut pairs: Vec<(usize, usize)> = (0..junctions.len()).tuple_combinations().collect();
    ensure!(
        connections < pairs.len(),
        "cannot make {connections} connections out of {} candidate pairs",
        pairs.len()
    );

    // Only membership in the closest-k set matters, not the order within it
    pairs.select_nth_unstable_by_key(connections, |&(i, j)| {
        distance_squared(junctions[i], junctions[j])
    });

    let mut circuits = Circuits::new(junctions.len());
    for &(i, j) in &pairs[..connections] {
        circuits.union(i, j);
    }

    let sizes = circuits.sizes();
    ensure!(
        sizes.len() >= 3,
        "expected at least three circuits, found {}",
        sizes.len()
    );
    Ok(sizes.iter().take(3).map(|&s| s as u64).product())
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<Junction>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(i, line)| parse_junction(line).with_context(|| format!("line {}", i + 1)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(util::invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        largest_circuits_product(shared, CONNECTIONS)
            .map(|product| product.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}
