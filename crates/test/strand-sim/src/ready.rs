//! The simulated processor's ready set.

use std::collections::VecDeque;

use strand_sync::ThreadId;

/// FIFO queue of runnable threads.
///
/// Admission appends at the tail and dispatch pops the head, so threads run
/// in the order they became ready.
#[derive(Debug, Default)]
pub(crate) struct ReadyQueue {
    queue: VecDeque<ThreadId>,
}

impl ReadyQueue {
    /// Creates an empty ready queue.
    pub(crate) fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Appends `id` at the tail.
    pub(crate) fn push(&mut self, id: ThreadId) {
        debug_assert!(!self.queue.contains(&id), "{id} queued twice");
        self.queue.push_back(id);
    }

    /// Pops the next thread to run.
    pub(crate) fn pop(&mut self) -> Option<ThreadId> {
        self.queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_on_creation() {
        let mut rq = ReadyQueue::new();
        assert_eq!(rq.pop(), None);
    }

    #[test]
    fn fifo_dispatch() {
        let mut rq = ReadyQueue::new();
        rq.push(ThreadId::new(1));
        rq.push(ThreadId::new(2));
        rq.push(ThreadId::new(3));

        assert_eq!(rq.pop(), Some(ThreadId::new(1)));
        assert_eq!(rq.pop(), Some(ThreadId::new(2)));
        assert_eq!(rq.pop(), Some(ThreadId::new(3)));
        assert_eq!(rq.pop(), None);
    }

    #[test]
    fn requeued_thread_goes_to_tail() {
        let mut rq = ReadyQueue::new();
        rq.push(ThreadId::new(1));
        rq.push(ThreadId::new(2));

        let head = rq.pop().unwrap();
        rq.push(head);

        assert_eq!(rq.pop(), Some(ThreadId::new(2)));
        assert_eq!(rq.pop(), Some(ThreadId::new(1)));
        assert_eq!(rq.pop(), None);
    }
}
