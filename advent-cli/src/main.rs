//! Advent CLI - Command-line interface for running Advent of Code solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import advent-solutions to link the solver plugins
use advent_solutions as _;

use advent_solver::RegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use itertools::Itertools;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        if let error::CliError::MissingInputs(missing) = &e {
            for (day, path) in missing {
                eprintln!("  - day {:02}: expected {}", day, path.display());
            }
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;

    let executor =
        Executor::new(registry, &config).map_err(|e| error::CliError::Config(e.to_string()))?;

    // Collect work items
    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // All inputs must exist before anything runs: no fetching, no partial runs
    let missing: Vec<_> = work_items
        .iter()
        .filter(|w| !executor.inputs().contains(w.day))
        .map(|w| (w.day, executor.inputs().path_for(w.day)))
        .sorted_by_key(|(day, _)| *day)
        .collect();
    if !missing.is_empty() {
        return Err(error::CliError::MissingInputs(missing));
    }

    run_executor(executor, config.quiet)
}

/// Run the executor and collect results
fn run_executor(executor: Executor, quiet: bool) -> Result<(), error::CliError> {
    let work_items = executor.collect_work_items();
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    // Build expected keys for result aggregation
    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts
                .clone()
                .map(move |p| aggregator::ResultKey { day: w.day, part: p })
        })
        .collect();

    // Set up result channel
    let (tx, rx) = std::sync::mpsc::channel();

    // Run executor in background thread
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    // Collect and display results in order using aggregator
    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        // Add to aggregator and print any results that are ready (in order)
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // Drain any remaining buffered results (shouldn't happen if all results arrived)
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    // Verify all expected results were received
    if !aggregator.is_complete() {
        eprintln!("Warning: Not all expected results were received");
    }

    // Wait for executor to finish
    executor_handle
        .join()
        .map_err(|_| error::CliError::Config("Executor thread panicked".to_string()))?
        .map_err(error::CliError::Executor)?;

    // Print summary
    formatter.print_summary(&results);

    let failed = results.iter().filter(|r| r.answer.is_err()).count();
    if failed > 0 {
        return Err(error::CliError::FailedParts(failed));
    }

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<advent_solver::SolverRegistry, error::CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
