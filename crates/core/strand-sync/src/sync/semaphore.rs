//! Counting semaphore.
//!
//! [`Semaphore`] is the atomic building block every other primitive here is
//! layered on. It pairs a counter of available units with a FIFO
//! [`WaitQueue`] of threads blocked in [`p`](Semaphore::p).

use core::fmt;

use log::trace;

use super::{LOG_TARGET, WaitQueue};
use crate::cell::SectionCell;
use crate::runtime::{Runtime, Section};

struct State<T> {
    value: usize,
    waiters: WaitQueue<T>,
}

/// A counting semaphore.
///
/// [`p`](Semaphore::p) waits for the counter to become positive and then
/// decrements it; [`v`](Semaphore::v) increments it and makes the
/// longest-waiting blocked thread runnable.
///
/// `v` never hands a unit directly to a particular thread. A woken thread
/// re-checks the counter when it runs and blocks again if another thread
/// took the unit first.
///
/// Dropping a semaphore while threads are queued on it leaves those threads
/// suspended forever; callers must not do that.
///
/// # Example
///
/// ```ignore
/// let done = Semaphore::new("done", 0, rt);
///
/// // Worker:
/// do_work();
/// done.v();
///
/// // Parent:
/// done.p(); // blocks until the worker finishes
/// ```
pub struct Semaphore<R: Runtime> {
    name: &'static str,
    rt: R,
    state: SectionCell<State<R::ThreadId>>,
}

impl<R: Runtime> Semaphore<R> {
    /// Creates a semaphore with `initial` available units.
    ///
    /// `name` is a debug label with no semantic effect.
    pub const fn new(name: &'static str, initial: usize, rt: R) -> Self {
        Self {
            name,
            rt,
            state: SectionCell::new(State {
                value: initial,
                waiters: WaitQueue::new(),
            }),
        }
    }

    /// Returns the debug label.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the runtime this semaphore synchronizes on.
    pub fn runtime(&self) -> &R {
        &self.rt
    }

    /// Waits until the counter is positive, then decrements it.
    ///
    /// The check and the decrement happen in one atomic section. The calling
    /// thread is suspended while that section is held, and on every resume
    /// the counter is checked again.
    pub fn p(&self) {
        self.p_then(|_| {});
    }

    /// Like [`p`](Semaphore::p), then runs `f` before leaving the section.
    pub(crate) fn p_then(&self, f: impl FnOnce(&mut Section<'_, R>)) {
        let mut section = Section::enter(&self.rt);
        let me = section.current();
        loop {
            let state = self.state.get_mut(&mut section);
            if state.value > 0 {
                state.value -= 1;
                break;
            }
            state.waiters.push_back(me);
            trace!(target: LOG_TARGET, "semaphore {}: {:?} blocks", self.name, me);
            section.suspend();
        }
        f(&mut section);
    }

    /// Increments the counter and admits the longest-waiting thread, if any.
    ///
    /// The counter is incremented whether or not a waiter was found. Never
    /// blocks and never fails.
    pub fn v(&self) {
        self.v_then(|_| {});
    }

    /// Like [`v`](Semaphore::v), but runs `f` first inside the same section.
    pub(crate) fn v_then(&self, f: impl FnOnce(&mut Section<'_, R>)) {
        let mut section = Section::enter(&self.rt);
        f(&mut section);
        if let Some(next) = self.state.get_mut(&mut section).waiters.pop_front() {
            trace!(target: LOG_TARGET, "semaphore {}: admitting {:?}", self.name, next);
            section.admit(next);
        }
        self.state.get_mut(&mut section).value += 1;
    }

    /// Returns the current counter value.
    pub fn value(&self) -> usize {
        let mut section = Section::enter(&self.rt);
        self.state.get_mut(&mut section).value
    }

    /// Returns the number of threads queued in [`p`](Semaphore::p).
    ///
    /// A thread that was admitted but has not run yet is no longer counted.
    pub fn waiting(&self) -> usize {
        let mut section = Section::enter(&self.rt);
        self.state.get_mut(&mut section).waiters.len()
    }
}

impl<R: Runtime> fmt::Debug for Semaphore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Semaphore")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
