//! Shared `main` for the benchmark binaries.
//!
//! Each binary picks a layout (or all of them) and hands over here. Results go
//! to stdout; logs, errors and the usage line go to stderr, so a failed run
//! never prints a count.

use crate::bench::{run, run_all};
use crate::config::{usage, BenchConfig, OutputFormat};
use crate::error::{BenchError, Result};
use crate::partition::partition;
use crate::report::{comparison_table, RunReport};
use crate::store::Layout;
use crate::workload::{seeded_rng, Dataset};
use std::path::Path;
use std::process::ExitCode;

/// Sets up `env_logger` on stderr. `RUST_LOG` overrides the default `warn`.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    // A second call (tests, repeated runs in one process) is harmless.
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Parses the process arguments, runs the benchmark and maps the outcome to
/// an exit code. `None` runs every layout and prints a comparison.
pub fn main_for(layout: Option<Layout>) -> ExitCode {
    init_logging();

    let mut args = std::env::args();
    let program = args
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "false_sharing_bench".to_string());

    let outcome = BenchConfig::from_args(args)
        .map_err(BenchError::from)
        .and_then(|config| execute(layout, &config));

    match outcome {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            if err.is_config() {
                eprintln!("{}", usage(&program));
            }
            ExitCode::FAILURE
        }
    }
}

/// Generates the workload described by `config`, runs it and renders the
/// report in the requested format.
pub fn execute(layout: Option<Layout>, config: &BenchConfig) -> Result<String> {
    let cpus = num_cpus::get();
    if config.num_threads.get() > cpus {
        log::warn!(
            "{} worker threads requested but only {} logical CPUs available",
            config.num_threads,
            cpus
        );
    }

    let mut rng = seeded_rng(config.seed);
    let dataset = Dataset::generate(config.array_size, config.value_range(), &mut rng)?;
    log::info!(
        "generated {} values in {:?} (seed {:?})",
        dataset.len(),
        config.value_range(),
        config.seed
    );
    let partitions = partition(dataset.len(), config.num_threads)?;

    match layout {
        Some(layout) => {
            let outcome = run(layout, &dataset, &partitions, config.target)?;
            let report = RunReport::new(config, &outcome);
            match config.format {
                OutputFormat::Text => Ok(report.to_string()),
                OutputFormat::Json => Ok(report.to_json()?),
            }
        }
        None => {
            let outcomes = run_all(&dataset, &partitions, config.target)?;
            match config.format {
                OutputFormat::Text => Ok(comparison_table(config, &outcomes)),
                OutputFormat::Json => {
                    let reports: Vec<RunReport> = outcomes
                        .iter()
                        .map(|outcome| RunReport::new(config, outcome))
                        .collect();
                    Ok(serde_json::to_string_pretty(&reports)?)
                }
            }
        }
    }
}
