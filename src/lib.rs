//! # False Sharing Bench
//!
//! Counts how many elements of a large random array equal a target value,
//! split across `T` threads, and times the parallel phase. The only thing
//! that changes between runs is where each thread's partial count lives:
//!
//! 1. **Shared** - a packed `u64` array; neighbouring slots share cache lines
//! 2. **Padded** - one slot per cache line (`#[repr(align(64))]`)
//! 3. **Returned** - no slots; each thread returns its count through `join`
//!
//! All three produce the same total. Only the timing differs.
//!
//! ## Running
//!
//! ```bash
//! cargo run --release --bin count_shared -- 100000000 8
//! cargo run --release --bin count_padded -- 100000000 8
//! cargo run --release --bin count_returned -- 100000000 8
//! cargo run --release --bin compare_layouts -- 100000000 8 --seed 42
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - error enums
//! - `rand` - workload generation with an explicitly owned RNG
//! - `log` / `env_logger` - diagnostics on stderr (`RUST_LOG=debug`)
//! - `serde_json` - `--json` reports
//! - `colored` - comparison table

pub mod bench;
pub mod cli;
pub mod config;
pub mod error;
pub mod partition;
pub mod reduce;
pub mod report;
pub mod store;
pub mod timer;
pub mod worker;
pub mod workload;

pub use bench::{run, run_all, RunOutcome};
pub use config::{BenchConfig, OutputFormat, CACHE_LINE_SIZE};
pub use error::{BenchError, ConfigError, Result};
pub use partition::{partition, try_partition, Partition};
pub use reduce::reduce;
pub use store::{Layout, PaddedSlot, PaddedSlots, SharedSlots, SlotStore};
pub use workload::{seeded_rng, Dataset};
