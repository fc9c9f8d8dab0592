//! Per-worker result storage.
//!
//! Three layouts hold the same logical value, one count per worker:
//!
//! ```text
//! Shared:   [c0|c1|c2|c3|c4|c5|c6|c7]            <- eight counters, one cache line
//! Padded:   [c0|.......][c1|.......][c2|.......]  <- one cache line each
//! Returned: no slots, each count comes back through the thread's join handle
//! ```
//!
//! The array layouts hand each worker a `&mut` to exactly one slot, so no two
//! workers can touch the same index and the orchestrator cannot read a slot
//! until the thread scope that borrowed it has joined every worker.

use crate::config::CACHE_LINE_SIZE;
use crate::error::{BenchError, Result};
use serde::Serialize;
use std::fmt;
use std::mem;

// =============================================================================
// Layout selector
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Plain `u64` counters packed next to each other.
    Shared,
    /// One counter per cache line.
    Padded,
    /// Counts returned from the worker threads themselves.
    Returned,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Shared, Layout::Padded, Layout::Returned];

    pub fn name(self) -> &'static str {
        match self {
            Layout::Shared => "shared",
            Layout::Padded => "padded",
            Layout::Returned => "returned",
        }
    }

    /// Distance in bytes between the slots of neighbouring workers, or `None`
    /// when there are no slots.
    pub fn slot_stride(self) -> Option<usize> {
        match self {
            Layout::Shared => Some(mem::size_of::<<SharedSlots as SlotStore>::Slot>()),
            Layout::Padded => Some(mem::size_of::<<PaddedSlots as SlotStore>::Slot>()),
            Layout::Returned => None,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Slot storage
// =============================================================================

/// A contiguous array of per-worker result slots.
pub trait SlotStore: Sized {
    type Slot: Send + 'static;

    fn with_workers(workers: usize) -> Result<Self>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One exclusive slot per worker, in worker order.
    fn slots_mut(&mut self) -> std::slice::IterMut<'_, Self::Slot>;

    fn write(slot: &mut Self::Slot, count: u64);

    fn read(&self, index: usize) -> u64;

    fn counts(&self) -> Vec<u64> {
        (0..self.len()).map(|i| self.read(i)).collect()
    }
}

fn zeroed_slots<T: Default>(what: &'static str, workers: usize) -> Result<Vec<T>> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(workers)
        .map_err(|_| BenchError::allocation(what, workers))?;
    slots.resize_with(workers, T::default);
    Ok(slots)
}

/// Counters stored back to back; neighbours share cache lines.
#[derive(Debug, Default)]
pub struct SharedSlots {
    counts: Vec<u64>,
}

impl SlotStore for SharedSlots {
    type Slot = u64;

    fn with_workers(workers: usize) -> Result<Self> {
        Ok(Self {
            counts: zeroed_slots("shared result slots", workers)?,
        })
    }

    fn len(&self) -> usize {
        self.counts.len()
    }

    fn slots_mut(&mut self) -> std::slice::IterMut<'_, u64> {
        self.counts.iter_mut()
    }

    fn write(slot: &mut u64, count: u64) {
        *slot = count;
    }

    fn read(&self, index: usize) -> u64 {
        self.counts[index]
    }
}

// The literal must match CACHE_LINE_SIZE; checked below.
#[repr(C, align(64))]
#[derive(Debug, Default, Clone, Copy)]
pub struct PaddedSlot {
    pub count: u64,
}

const _: () = assert!(mem::align_of::<PaddedSlot>() == CACHE_LINE_SIZE);
const _: () = assert!(mem::size_of::<PaddedSlot>() >= CACHE_LINE_SIZE);

/// Counters spaced one cache line apart.
#[derive(Debug, Default)]
pub struct PaddedSlots {
    slots: Vec<PaddedSlot>,
}

impl SlotStore for PaddedSlots {
    type Slot = PaddedSlot;

    fn with_workers(workers: usize) -> Result<Self> {
        Ok(Self {
            slots: zeroed_slots("padded result slots", workers)?,
        })
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn slots_mut(&mut self) -> std::slice::IterMut<'_, PaddedSlot> {
        self.slots.iter_mut()
    }

    fn write(slot: &mut PaddedSlot, count: u64) {
        slot.count = count;
    }

    fn read(&self, index: usize) -> u64 {
        self.slots[index].count
    }
}
