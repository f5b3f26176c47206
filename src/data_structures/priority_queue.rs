use std::fmt::Debug;

use num_traits::Float;
use ordered_float::NotNan;

use crate::{Error, Result};

/// Which end of the priority range is dequeued first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOrder {
    /// Lowest priority first
    Min,
    /// Highest priority first
    Max,
}

impl HeapOrder {
    /// Strict comparison: equal priorities are never more urgent than each other
    fn is_more_urgent<P: Float>(self, left: NotNan<P>, right: NotNan<P>) -> bool {
        match self {
            HeapOrder::Min => left < right,
            HeapOrder::Max => left > right,
        }
    }
}

#[derive(Debug, Clone)]
struct HeapEntry<V, P> {
    priority: NotNan<P>,
    value: V,
}

/// A binary heap of `(priority, value)` pairs.
///
/// The same value may be queued any number of times with different
/// priorities; the queue never deduplicates. Ties between equal priorities
/// are broken arbitrarily.
#[derive(Debug, Clone)]
pub struct PriorityQueue<V, P = f64>
where
    P: Float,
{
    order: HeapOrder,
    entries: Vec<HeapEntry<V, P>>,
}

impl<V, P> PriorityQueue<V, P>
where
    P: Float,
{
    /// Creates a new empty priority queue
    pub fn new(order: HeapOrder) -> Self {
        PriorityQueue {
            order,
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(order: HeapOrder, capacity: usize) -> Self {
        PriorityQueue {
            order,
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries, duplicates included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Queues `value` at `priority`.
    ///
    /// A NaN priority has no place in the ordering and is rejected with
    /// [`Error::InvalidPriority`]; the queue is left untouched.
    pub fn enqueue(&mut self, priority: P, value: V) -> Result<()> {
        let priority = NotNan::new(priority).map_err(|_| Error::InvalidPriority)?;
        self.entries.try_reserve(1)?;
        self.entries.push(HeapEntry { priority, value });
        self.sift_up(self.entries.len() - 1);
        Ok(())
    }

    /// Removes the most urgent entry
    pub fn dequeue(&mut self) -> Option<(V, P)> {
        let last = self.entries.pop()?;
        let root = if self.entries.is_empty() {
            last
        } else {
            let root = std::mem::replace(&mut self.entries[0], last);
            self.sift_down(0);
            root
        };
        Some((root.value, root.priority.into_inner()))
    }

    /// Returns the most urgent entry without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.entries
            .first()
            .map(|entry| (&entry.value, entry.priority.into_inner()))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Restores the heap invariant upwards from `idx`
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self
                .order
                .is_more_urgent(self.entries[idx].priority, self.entries[parent].priority)
            {
                break;
            }
            self.entries.swap(idx, parent);
            idx = parent;
        }
    }

    /// Restores the heap invariant downwards from `idx`, always following the
    /// more urgent child
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let mut child = left;
            if right < len
                && self
                    .order
                    .is_more_urgent(self.entries[right].priority, self.entries[left].priority)
            {
                child = right;
            }

            if !self
                .order
                .is_more_urgent(self.entries[child].priority, self.entries[idx].priority)
            {
                break;
            }
            self.entries.swap(idx, child);
            idx = child;
        }
    }
}

impl<V, P> PriorityQueue<V, P>
where
    V: PartialEq,
    P: Float,
{
    /// Linear scan; not meant for hot paths
    pub fn contains(&self, value: &V) -> bool {
        self.entries.iter().any(|entry| entry.value == *value)
    }

    /// Priority of some queued entry holding `value`. With duplicates queued,
    /// which one is reported is unspecified. Linear scan.
    pub fn get_priority(&self, value: &V) -> Option<P> {
        self.entries
            .iter()
            .find(|entry| entry.value == *value)
            .map(|entry| entry.priority.into_inner())
    }
}
