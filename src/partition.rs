//! Static work partitioning.
//!
//! `[0, len)` is cut into one contiguous range per worker. The first
//! `workers - 1` ranges get `len / workers` elements each and the last one
//! absorbs the remainder, so with fewer elements than workers the leading
//! ranges are empty.

use crate::error::{BenchError, ConfigError, Result};
use std::num::NonZeroUsize;
use std::ops::Range;

/// Half-open index range `[start, end)` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub start: usize,
    pub end: usize,
}

impl Partition {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

pub fn partition(len: usize, workers: NonZeroUsize) -> Result<Vec<Partition>> {
    let workers = workers.get();
    let chunk = len / workers;

    let mut partitions = Vec::new();
    partitions
        .try_reserve_exact(workers)
        .map_err(|_| BenchError::allocation("partition list", workers))?;

    partitions.extend((0..workers).map(|i| {
        let start = i * chunk;
        let end = if i == workers - 1 { len } else { start + chunk };
        Partition::new(start, end)
    }));

    for (i, p) in partitions.iter().enumerate() {
        log::debug!("partition {}: [{}, {}) {} elements", i, p.start, p.end, p.len());
    }
    Ok(partitions)
}

/// Same as [`partition`] for a raw worker count; zero workers is a
/// configuration error.
pub fn try_partition(len: usize, workers: usize) -> Result<Vec<Partition>> {
    let workers = NonZeroUsize::new(workers).ok_or(ConfigError::NonPositiveThreads(0))?;
    partition(len, workers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn workers(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_even_split() {
        let parts = partition(10, workers(2)).unwrap();
        assert_eq!(parts, vec![Partition::new(0, 5), Partition::new(5, 10)]);
    }

    #[test]
    fn test_last_partition_takes_remainder() {
        let parts = partition(10, workers(3)).unwrap();
        assert_eq!(
            parts,
            vec![Partition::new(0, 3), Partition::new(3, 6), Partition::new(6, 10)]
        );
    }

    #[test]
    fn test_more_workers_than_elements() {
        let parts = partition(3, workers(5)).unwrap();
        assert_eq!(parts.len(), 5);
        assert!(parts[..4].iter().all(Partition::is_empty));
        assert_eq!(parts[4], Partition::new(0, 3));
    }

    #[test]
    fn test_empty_input() {
        let parts = partition(0, workers(4)).unwrap();
        assert_eq!(parts.len(), 4);
        assert!(parts.iter().all(|p| p.is_empty() && p.len() == 0));
    }

    #[test]
    fn test_zero_workers_is_a_config_error() {
        match try_partition(100, 0) {
            Err(BenchError::Config(ConfigError::NonPositiveThreads(0))) => {}
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_partition_list_is_an_allocation_error() {
        match try_partition(0, usize::MAX) {
            Err(BenchError::Allocation { what, count }) => {
                assert_eq!(what, "partition list");
                assert_eq!(count, usize::MAX);
            }
            other => panic!("expected allocation error, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn test_partitions_cover_range_exactly(len in 0usize..5_000, n in 1usize..64) {
            let parts = partition(len, workers(n)).unwrap();

            prop_assert_eq!(parts.len(), n);
            prop_assert_eq!(parts[0].start, 0);
            prop_assert_eq!(parts[n - 1].end, len);

            // Contiguous: each range starts where the previous one ended.
            for pair in parts.windows(2) {
                prop_assert_eq!(pair[0].end, pair[1].start);
                prop_assert!(pair[0].start <= pair[0].end);
            }

            let covered: usize = parts.iter().map(Partition::len).sum();
            prop_assert_eq!(covered, len);
        }

        #[test]
        fn test_leading_partitions_have_equal_size(len in 0usize..5_000, n in 1usize..64) {
            let parts = partition(len, workers(n)).unwrap();
            for p in &parts[..n - 1] {
                prop_assert_eq!(p.len(), len / n);
            }
            prop_assert_eq!(parts[n - 1].len(), len / n + len % n);
        }

        #[test]
        fn test_more_workers_than_elements_leaves_empty_ranges(len in 0usize..32, extra in 1usize..32) {
            let parts = partition(len, workers(len + extra)).unwrap();
            prop_assert!(parts.iter().any(Partition::is_empty));
        }
    }
}
