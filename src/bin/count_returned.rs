//! Parallel count using the return-value layout (counts come back through join).
//!
//! Run with: cargo run --release --bin count_returned -- <array_size> <num_threads>

use false_sharing_bench::cli;
use false_sharing_bench::Layout;
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::main_for(Some(Layout::Returned))
}
