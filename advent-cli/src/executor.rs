//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use advent_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

/// Result from a single solver execution
pub struct SolverResult {
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, advent_solver::SolverError>,
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: Duration,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        let inputs = match &config.explicit_input {
            Some(path) => InputStore::with_explicit(
                config.input_dir.clone(),
                config.day_filter.expect("--input requires --day"),
                path.clone(),
            ),
            None => InputStore::new(config.input_dir.clone()),
        };

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs,
                parallelize_by: config.parallelize_by,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// The input store work items will read from
    pub fn inputs(&self) -> &InputStore {
        &self.sync_executor_config.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_executor_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => {
                // No parallelization, execute all in order
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) =
                        run_solver_parallel(&work, &tx, &self.sync_executor_config)
                    {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            // Day and Part both parallelize across all work items (Part
            // additionally splits inside run_solver_parallel)
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_solver_parallel(&work, tx, sync_executor_config).err())
                .reduce_with(|err1, err2| {
                    err1.map(|err1| ArcExecutorError::combine_opt(err2, err1))
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }
}

/// Create an error result for a part that never ran
fn make_error_result(day: u8, part: u8, error: advent_solver::SolverError) -> SolverResult {
    SolverResult {
        day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: Duration::ZERO,
    }
}

/// Free function for parallel solver execution
fn run_solver_parallel(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let input = match get_input(work.day, &sync_executor_config.inputs) {
        Ok(input) => input,
        Err(e) => {
            // Report the same failure on every requested part
            let message = e.to_string();
            for part in work.parts.clone() {
                let error = advent_solver::SolverError::Parse(
                    advent_solver::ParseError::MissingData(message.clone()),
                );
                tx.send(make_error_result(work.day, part, error))
                    .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            }
            return Ok(());
        }
    };

    if matches!(sync_executor_config.parallelize_by, ParallelizeBy::Part) {
        run_solver_parts_parallel(work, &input, tx, sync_executor_config)
    } else {
        run_solver_sequential(work, &input, tx, sync_executor_config)
    }
}

/// Run solver with part-level parallelism, buffering results to emit in order
fn run_solver_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (result_tx, result_rx) = std::sync::mpsc::channel();
    let day = work.day;
    let registry = &sync_executor_config.registry;

    // Solve parts in parallel, each on its own instance
    work.parts
        .clone()
        .into_par_iter()
        .for_each_with(result_tx, |rtx, part| {
            let result = match registry.create_solver(day, input) {
                Ok(mut solver) => solve_part_internal(day, part, &mut *solver),
                Err(e) => make_error_result(day, part, e),
            };
            rtx.send(result).ok();
        });

    // Buffer and emit results in part order
    let mut buffer: [Option<SolverResult>; 2] = [None, None];
    let start_part = *work.parts.start();
    let mut next_part = start_part;

    for result in result_rx {
        let idx = (result.part - start_part) as usize;
        if idx < buffer.len() {
            buffer[idx] = Some(result);
        }
        // Emit buffered results in order
        while let Some(result) = buffer
            .get_mut((next_part - start_part) as usize)
            .and_then(Option::take)
        {
            tx.send(result)
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            next_part += 1;
        }
    }
    Ok(())
}

/// Run one solver instance over its parts, streaming results as they finish
fn run_solver_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (solve_tx, solve_rx) = std::sync::mpsc::channel();
    let day = work.day;
    let parts = work.parts.clone();
    let registry = &sync_executor_config.registry;

    std::thread::scope(|s| {
        s.spawn(move || {
            let mut solver = match registry.create_solver(day, input) {
                Ok(solver) => solver,
                Err(e) => {
                    // Parse failed once; report it for every part
                    let message = e.to_string();
                    for part in parts {
                        let error = advent_solver::SolverError::Parse(
                            advent_solver::ParseError::Other(message.clone()),
                        );
                        if solve_tx.send(make_error_result(day, part, error)).is_err() {
                            break;
                        }
                    }
                    return;
                }
            };
            for part in parts {
                if solve_tx
                    .send(solve_part_internal(day, part, &mut *solver))
                    .is_err()
                {
                    break;
                }
            }
        });

        for result in solve_rx {
            tx.send(result)
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
        }
        Ok(())
    })
}

/// Read a day's input, treating a missing file as an error here
fn get_input(day: u8, inputs: &InputStore) -> Result<String, ExecutorError> {
    match inputs.get(day) {
        Ok(Some(input)) => Ok(input),
        Ok(None) => Err(ExecutorError::InputRead {
            day,
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no input file at {}", inputs.path_for(day).display()),
            )),
        }),
        Err(e) => Err(ExecutorError::InputRead {
            day,
            source: Box::new(e),
        }),
    }
}

/// Solve a single part (free function)
fn solve_part_internal(day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let start = Instant::now();
    let answer = solver.solve(part);

    SolverResult {
        day,
        part,
        answer: answer.map(|r| r.answer).map_err(Into::into),
        parse_duration: Some(solver.parse_duration()),
        solve_duration: start.elapsed(),
    }
}
