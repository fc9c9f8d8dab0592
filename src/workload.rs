//! Workload generation.
//!
//! The dataset is built once before any worker starts and only read
//! afterwards, so workers share it as a plain `&[i32]`.

use crate::error::{BenchError, Result};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    values: Vec<i32>,
}

impl Dataset {
    /// Fills `len` slots with values drawn uniformly from `range`.
    ///
    /// The backing buffer is reserved up front so an oversized request is
    /// reported as an allocation error instead of aborting the process.
    pub fn generate<R>(len: usize, range: RangeInclusive<i32>, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        let mut values = Vec::new();
        values
            .try_reserve_exact(len)
            .map_err(|_| BenchError::allocation("dataset", len))?;

        let dist = Uniform::from(range);
        values.extend((0..len).map(|_| dist.sample(rng)));
        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<i32>> for Dataset {
    fn from(values: Vec<i32>) -> Self {
        Self { values }
    }
}

impl AsRef<[i32]> for Dataset {
    fn as_ref(&self) -> &[i32] {
        &self.values
    }
}

/// Builds the random source for one run. A fixed seed makes runs repeatable.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
