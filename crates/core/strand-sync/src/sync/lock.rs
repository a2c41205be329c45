//! Owner-tracked mutual exclusion lock.
//!
//! [`Lock`] is a [`Semaphore`] with one unit plus a record of which thread
//! holds it. The owner record is what lets [`Condition`](super::Condition)
//! check that its caller holds the associated lock.

use core::fmt;

use log::debug;

use super::{LOG_TARGET, Semaphore};
use crate::cell::SectionCell;
use crate::runtime::{Runtime, Section};

/// A non-reentrant mutual exclusion lock that knows its owner.
///
/// Unlike a guard-based mutex, acquisition and release are explicit calls
/// made by the same thread, so that a [`Condition`](super::Condition) can
/// release and reacquire the lock on the caller's behalf.
///
/// A thread that calls [`acquire`](Lock::acquire) while already holding the
/// lock blocks on itself forever. Releasing a lock the caller does not hold
/// is a fatal contract violation.
///
/// # Example
///
/// ```ignore
/// let lock = Lock::new("table", rt);
///
/// lock.acquire();
/// update_shared_table();
/// lock.release();
/// ```
pub struct Lock<R: Runtime> {
    sem: Semaphore<R>,
    owner: SectionCell<Option<R::ThreadId>>,
}

impl<R: Runtime> Lock<R> {
    /// Creates an unlocked lock.
    pub const fn new(name: &'static str, rt: R) -> Self {
        Self {
            sem: Semaphore::new(name, 1, rt),
            owner: SectionCell::new(None),
        }
    }

    /// Returns the debug label.
    pub fn name(&self) -> &'static str {
        self.sem.name()
    }

    /// Returns the runtime this lock synchronizes on.
    pub fn runtime(&self) -> &R {
        self.sem.runtime()
    }

    /// Blocks until the lock is free, then takes it.
    ///
    /// The owner is recorded in the same atomic section that takes the
    /// semaphore unit.
    pub fn acquire(&self) {
        let me = self.runtime().current();
        debug!(target: LOG_TARGET, "lock {}: {:?} acquiring", self.name(), me);
        self.sem.p_then(|section| {
            *self.owner.get_mut(section) = Some(me);
        });
        debug!(target: LOG_TARGET, "lock {}: acquired by {:?}", self.name(), me);
    }

    /// Releases the lock and admits the longest-waiting contender, if any.
    ///
    /// # Panics
    ///
    /// Panics with a contract violation if the caller is not the owner.
    pub fn release(&self) {
        let me = self.runtime().current();
        self.sem.v_then(|section| {
            let owner = self.owner.get_mut(section);
            crate::contract!(
                *owner == Some(me),
                "lock {} released by {:?}, owner is {:?}",
                self.name(),
                me,
                owner
            );
            // Cleared before the unit is returned, so no admitted thread can
            // observe a stale owner.
            *owner = None;
        });
        debug!(target: LOG_TARGET, "lock {}: released by {:?}", self.name(), me);
    }

    /// Returns `true` if the calling thread holds this lock.
    pub fn is_held_by_current_thread(&self) -> bool {
        let mut section = Section::enter(self.sem.runtime());
        let me = section.current();
        *self.owner.get_mut(&mut section) == Some(me)
    }
}

impl<R: Runtime> fmt::Debug for Lock<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lock")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}
