//! State that is only reachable inside an atomic section.
//!
//! Primitives keep their counters, owners and wait queues in a
//! [`SectionCell`]. The cell has no lock of its own: exclusive access comes
//! from the host's preemption masking, and the borrow checker is used to prove
//! it by demanding a `&mut` [`Section`] for every access.

use core::cell::UnsafeCell;

use crate::runtime::{Runtime, Section};

/// An `UnsafeCell` whose contents are guarded by preemption masking.
///
/// The returned reference borrows the section mutably, so it must be dropped
/// before [`Section::suspend`] can be called; no reference into shared state
/// survives a context switch.
#[repr(transparent)]
pub struct SectionCell<T>(UnsafeCell<T>);

// SAFETY: Contents are only reachable through `get_mut`, which requires a live
// `Section`. The `Interrupts` contract guarantees no other logical thread runs
// while a section is held, so accesses never overlap. `T: Send` is required
// because the data is touched from whichever thread holds the section.
unsafe impl<T: Send> Send for SectionCell<T> {}
// SAFETY: Same as above.
unsafe impl<T: Send> Sync for SectionCell<T> {}

impl<T> SectionCell<T> {
    /// Creates a new `SectionCell` wrapping `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(UnsafeCell::new(value))
    }

    /// Returns a mutable reference to the contents for the duration of the
    /// section borrow.
    #[inline]
    pub fn get_mut<'s, R: Runtime + ?Sized>(&'s self, _section: &'s mut Section<'_, R>) -> &'s mut T {
        // SAFETY: The section masks preemption and is mutably borrowed for
        // `'s`, so this is the only live reference to the contents.
        unsafe { &mut *self.0.get() }
    }

    /// Returns a mutable reference without a section, given unique access.
    #[inline]
    pub fn get_mut_unshared(&mut self) -> &mut T {
        self.0.get_mut()
    }

    /// Consumes the cell, returning the contents.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0.into_inner()
    }
}
