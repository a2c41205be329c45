//! Mesa-style condition variable.
//!
//! [`Condition`] lets a thread holding a [`Lock`] give it up and sleep until
//! another holder of the same lock signals. A signal only makes a waiter
//! runnable: the waiter still has to win the lock back, and whatever it was
//! waiting for may no longer hold by then. Callers re-check their predicate
//! in a loop.
//!
//! The lock is not stored. It is passed to every call, and each call checks
//! that the caller holds it.
//!
//! ## Lost signals
//!
//! [`wait`](Condition::wait) releases the lock *before* it opens the atomic
//! section that enqueues and suspends the caller. If the caller is preempted
//! in that gap, and another thread takes the lock and signals, the signal
//! finds an empty queue and the waiter sleeps through it. Waiters are only
//! guaranteed to see signals issued after they have enqueued.

use core::fmt;

use log::{debug, trace};

use super::{LOG_TARGET, Lock, WaitQueue};
use crate::cell::SectionCell;
use crate::runtime::{Runtime, Section};

/// A condition variable with Mesa semantics and FIFO wakeup.
///
/// # Example
///
/// ```ignore
/// // Consumer:
/// lock.acquire();
/// while queue_is_empty() {
///     not_empty.wait(&lock);
/// }
/// take_item();
/// lock.release();
///
/// // Producer:
/// lock.acquire();
/// put_item();
/// not_empty.signal(&lock);
/// lock.release();
/// ```
pub struct Condition<R: Runtime> {
    name: &'static str,
    rt: R,
    waiters: SectionCell<WaitQueue<R::ThreadId>>,
}

impl<R: Runtime> Condition<R> {
    /// Creates a condition variable with no waiters.
    pub const fn new(name: &'static str, rt: R) -> Self {
        Self {
            name,
            rt,
            waiters: SectionCell::new(WaitQueue::new()),
        }
    }

    /// Returns the debug label.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Releases `lock`, sleeps until signalled, then reacquires `lock`.
    ///
    /// Returns holding `lock`. The guarded predicate may be false again by
    /// then; see the module documentation for the window in which a signal
    /// can be missed.
    ///
    /// # Panics
    ///
    /// Panics with a contract violation if the caller does not hold `lock`.
    pub fn wait(&self, lock: &Lock<R>) {
        self.check_held(lock, "wait");
        let me = self.rt.current();
        debug!(target: LOG_TARGET, "condition {}: {:?} waiting", self.name, me);

        lock.release();
        {
            let mut section = Section::enter(&self.rt);
            self.waiters.get_mut(&mut section).push_back(me);
            section.suspend();
        }

        debug!(
            target: LOG_TARGET,
            "condition {}: {:?} reacquiring lock {}",
            self.name,
            me,
            lock.name()
        );
        lock.acquire();
    }

    /// Wakes the longest-waiting thread, if any.
    ///
    /// The woken thread does not inherit `lock`; it competes for it once it
    /// runs. A no-op when nobody is waiting.
    ///
    /// # Panics
    ///
    /// Panics with a contract violation if the caller does not hold `lock`.
    pub fn signal(&self, lock: &Lock<R>) {
        self.check_held(lock, "signal");
        let mut section = Section::enter(&self.rt);
        if let Some(next) = self.waiters.get_mut(&mut section).pop_front() {
            trace!(target: LOG_TARGET, "condition {}: waking {:?}", self.name, next);
            section.admit(next);
        }
    }

    /// Wakes every thread currently waiting.
    ///
    /// The queue is empty when this returns. Each woken thread still has to
    /// reacquire `lock` on its own.
    ///
    /// # Panics
    ///
    /// Panics with a contract violation if the caller does not hold `lock`.
    pub fn broadcast(&self, lock: &Lock<R>) {
        self.check_held(lock, "broadcast");
        let mut section = Section::enter(&self.rt);
        while let Some(next) = self.waiters.get_mut(&mut section).pop_front() {
            trace!(target: LOG_TARGET, "condition {}: waking {:?}", self.name, next);
            section.admit(next);
        }
    }

    /// Returns the number of threads queued in [`wait`](Condition::wait).
    pub fn waiting(&self) -> usize {
        let mut section = Section::enter(&self.rt);
        self.waiters.get_mut(&mut section).len()
    }

    fn check_held(&self, lock: &Lock<R>, op: &str) {
        crate::contract!(
            lock.is_held_by_current_thread(),
            "condition {}: {} without holding lock {}",
            self.name,
            op,
            lock.name()
        );
    }
}

impl<R: Runtime> fmt::Debug for Condition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
