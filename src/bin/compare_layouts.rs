//! Runs all three result layouts on the same array and compares their times.
//!
//! Run with: cargo run --release --bin compare_layouts -- <array_size> <num_threads> [--seed <u64>]

use false_sharing_bench::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::main_for(None)
}
