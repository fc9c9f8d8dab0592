//! Partition, count, reduce.
//!
//! Every layout follows the same sequence:
//!
//! 1. allocate result storage (before the clock starts)
//! 2. spawn one scoped thread per partition
//! 3. join every thread
//! 4. read the per-worker counts and sum them
//!
//! The clock covers steps 2-4 only. Generation and allocation are excluded.

use crate::error::{BenchError, Result};
use crate::partition::Partition;
use crate::reduce::reduce;
use crate::store::{Layout, PaddedSlots, SharedSlots, SlotStore};
use crate::timer::Stopwatch;
use crate::worker::count_matches;
use crate::workload::Dataset;
use std::thread::{self, Scope, ScopedJoinHandle};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub layout: Layout,
    pub per_worker: Vec<u64>,
    pub total: u64,
    pub elapsed: Duration,
}

impl RunOutcome {
    pub fn workers(&self) -> usize {
        self.per_worker.len()
    }
}

/// Runs one timed parallel count of `target` over `dataset`.
pub fn run(
    layout: Layout,
    dataset: &Dataset,
    partitions: &[Partition],
    target: i32,
) -> Result<RunOutcome> {
    log::info!(
        "running {} layout: {} workers over {} elements",
        layout,
        partitions.len(),
        dataset.len()
    );

    let data = dataset.as_slice();
    let (per_worker, total, elapsed) = match layout {
        Layout::Shared => count_into_slots::<SharedSlots>(data, partitions, target)?,
        Layout::Padded => count_into_slots::<PaddedSlots>(data, partitions, target)?,
        Layout::Returned => count_via_join(data, partitions, target)?,
    };

    for (index, count) in per_worker.iter().enumerate() {
        log::debug!("worker {} counted {}", index, count);
    }
    log::info!("{} layout finished: total {} in {:?}", layout, total, elapsed);

    Ok(RunOutcome {
        layout,
        per_worker,
        total,
        elapsed,
    })
}

/// Runs every layout against the same inputs, in [`Layout::ALL`] order.
///
/// Fails if the layouts disagree on the total.
pub fn run_all(dataset: &Dataset, partitions: &[Partition], target: i32) -> Result<Vec<RunOutcome>> {
    let outcomes = Layout::ALL
        .iter()
        .map(|&layout| run(layout, dataset, partitions, target))
        .collect::<Result<Vec<_>>>()?;

    let first = outcomes[0].total;
    if outcomes.iter().any(|o| o.total != first) {
        let details = outcomes
            .iter()
            .map(|o| format!("{}={}", o.layout, o.total))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(BenchError::TotalsDisagree { details });
    }
    Ok(outcomes)
}

// =============================================================================
// Layout strategies
// =============================================================================

fn count_into_slots<S: SlotStore>(
    data: &[i32],
    partitions: &[Partition],
    target: i32,
) -> Result<(Vec<u64>, u64, Duration)> {
    let mut store = S::with_workers(partitions.len())?;

    let watch = Stopwatch::start();
    thread::scope(|scope| {
        let jobs = store
            .slots_mut()
            .zip(partitions)
            .map(|(slot, partition)| move || S::write(slot, count_matches(data, partition, target)));
        spawn_and_join(scope, jobs, worker_thread)
    })?;
    // The scope has ended, so every slot's writer has been joined.
    let per_worker = store.counts();
    let total = reduce(&per_worker);
    let elapsed = watch.elapsed();

    Ok((per_worker, total, elapsed))
}

fn count_via_join(
    data: &[i32],
    partitions: &[Partition],
    target: i32,
) -> Result<(Vec<u64>, u64, Duration)> {
    let watch = Stopwatch::start();
    let per_worker = thread::scope(|scope| {
        let jobs = partitions
            .iter()
            .map(|partition| move || count_matches(data, partition, target));
        spawn_and_join(scope, jobs, worker_thread)
    })?;
    let total = reduce(&per_worker);
    let elapsed = watch.elapsed();

    Ok((per_worker, total, elapsed))
}

// =============================================================================
// Thread management
// =============================================================================

fn worker_thread(index: usize) -> thread::Builder {
    thread::Builder::new().name(format!("worker-{}", index))
}

/// Spawns one thread per job, configured by `builder`, and joins all of
/// them, returning results in job order.
///
/// If a spawn fails, the threads already started are joined before the spawn
/// error is returned. A panicking worker is reported only after every other
/// worker has been joined.
fn spawn_and_join<'scope, 'env, T, F, I, B>(
    scope: &'scope Scope<'scope, 'env>,
    jobs: I,
    builder: B,
) -> Result<Vec<T>>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> T + Send + 'scope,
    T: Send + 'scope,
    B: Fn(usize) -> thread::Builder,
{
    let jobs = jobs.into_iter();
    let mut handles: Vec<ScopedJoinHandle<'scope, T>> = Vec::with_capacity(jobs.size_hint().0);

    for (index, job) in jobs.enumerate() {
        let spawned = builder(index).spawn_scoped(scope, job);
        match spawned {
            Ok(handle) => handles.push(handle),
            Err(source) => {
                log::error!("failed to spawn worker {}: {}", index, source);
                // Result ignored: the spawn failure is what gets reported.
                let _ = join_all(handles);
                return Err(BenchError::ThreadSpawn { index, source });
            }
        }
    }

    join_all(handles)
}

fn join_all<T>(handles: Vec<ScopedJoinHandle<'_, T>>) -> Result<Vec<T>> {
    let mut results = Vec::with_capacity(handles.len());
    let mut panicked = None;

    for (index, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(value) => results.push(value),
            Err(_) => {
                panicked.get_or_insert(index);
            }
        }
    }

    match panicked {
        Some(index) => Err(BenchError::WorkerPanicked { index }),
        None => Ok(results),
    }
}
