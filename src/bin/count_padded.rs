//! Parallel count using the padded-array layout (one counter per cache line).
//!
//! Run with: cargo run --release --bin count_padded -- <array_size> <num_threads>

use false_sharing_bench::cli;
use false_sharing_bench::Layout;
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::main_for(Some(Layout::Padded))
}
