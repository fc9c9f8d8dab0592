//! Parallel count using the shared-array layout (packed counters, false sharing).
//!
//! Run with: cargo run --release --bin count_shared -- <array_size> <num_threads>

use false_sharing_bench::cli;
use false_sharing_bench::Layout;
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::main_for(Some(Layout::Shared))
}
