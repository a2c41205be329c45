//! FIFO queue of blocked threads.
//!
//! [`WaitQueue`] stores thread identities, never threads. It has no locking
//! of its own: the owning primitive keeps it in a
//! [`SectionCell`](crate::cell::SectionCell) and only touches it under an
//! atomic section.
//!
//! Insertion is always at the tail and removal always from the head, so the
//! longest-waiting thread is the next one woken.

use alloc::collections::VecDeque;

/// Strict-FIFO queue of thread identities.
///
/// Uses `VecDeque` so that [`pop_front`](WaitQueue::pop_front) is O(1) and
/// preserves arrival order.
#[derive(Debug)]
pub struct WaitQueue<T> {
    waiters: VecDeque<T>,
}

impl<T> WaitQueue<T> {
    /// Creates an empty wait queue.
    pub const fn new() -> Self {
        Self {
            waiters: VecDeque::new(),
        }
    }

    /// Appends `thread` at the tail.
    pub fn push_back(&mut self, thread: T) {
        self.waiters.push_back(thread);
    }

    /// Removes the longest-waiting thread, if any.
    pub fn pop_front(&mut self) -> Option<T> {
        self.waiters.pop_front()
    }

    /// Returns the number of queued threads.
    pub fn len(&self) -> usize {
        self.waiters.len()
    }

    /// Returns `true` if no thread is queued.
    pub fn is_empty(&self) -> bool {
        self.waiters.is_empty()
    }

    /// Iterates from head (next to wake) to tail.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.waiters.iter()
    }
}

impl<T> Default for WaitQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
