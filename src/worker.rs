use crate::partition::Partition;

/// Counts the elements of `data[partition]` equal to `target`.
///
/// # Panics
///
/// Panics if the partition is inverted or reaches past the end of `data`.
/// Partitions come from [`crate::partition::partition`], so this is a bug,
/// not an input error.
pub fn count_matches(data: &[i32], partition: &Partition, target: i32) -> u64 {
    assert!(
        partition.start <= partition.end && partition.end <= data.len(),
        "partition [{}, {}) out of bounds for dataset of {} elements",
        partition.start,
        partition.end,
        data.len()
    );

    let mut count = 0u64;
    for &value in &data[partition.range()] {
        if value == target {
            count += 1;
        }
    }
    count
}
