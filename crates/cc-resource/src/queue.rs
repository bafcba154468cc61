//! `BoundedQueue`: the call queue callers occupy while they wait.
//!
//! A caller who finds every seat taken is refused (bounced) by the model;
//! the queue itself only reports that it is full.

use std::collections::VecDeque;

/// FIFO store with an optional seat limit.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    items:    VecDeque<T>,
    /// `None` = unbounded.
    capacity: Option<usize>,
    peak:     usize,
    rejected: u64,
}

impl<T> BoundedQueue<T> {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            items: VecDeque::new(),
            capacity,
            peak: 0,
            rejected: 0,
        }
    }

    pub fn unbounded() -> Self {
        Self::new(None)
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.items.len() >= cap)
    }

    /// Longest length ever reached.
    pub fn peak(&self) -> usize {
        self.peak
    }

    /// Pushes refused because the queue was full.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Add `item` at the back.  Hands the item back if the queue is full.
    pub fn try_push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            self.rejected += 1;
            return Err(item);
        }
        self.items.push_back(item);
        self.peak = self.peak.max(self.items.len());
        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: PartialEq> BoundedQueue<T> {
    /// Remove the first occurrence of `item`.  Returns `false` if absent.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.iter().position(|x| x == item) {
            Some(i) => {
                self.items.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}
