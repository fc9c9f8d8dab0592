/// Sums the per-worker counts into the run total.
pub fn reduce(counts: &[u64]) -> u64 {
    counts.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_counts() {
        assert_eq!(reduce(&[3, 2]), 5);
        assert_eq!(reduce(&[0, 0, 7, 0]), 7);
    }

    #[test]
    fn test_no_workers_sum_to_zero() {
        assert_eq!(reduce(&[]), 0);
    }

    #[test]
    fn test_reducing_twice_gives_the_same_total() {
        let counts = vec![12, 0, 40, 9, 1];
        let first = reduce(&counts);
        let second = reduce(&counts);
        assert_eq!(first, second);
        assert_eq!(first, 62);
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut counts = vec![5, 1, 9, 4];
        let forward = reduce(&counts);
        counts.reverse();
        assert_eq!(reduce(&counts), forward);
    }
}
