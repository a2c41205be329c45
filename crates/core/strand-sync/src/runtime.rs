//! The host boundary: preemption masking and thread scheduling.
//!
//! Every primitive in [`sync`](crate::sync) is parameterised over a
//! [`Runtime`], which bundles two capabilities the host must provide:
//!
//! - [`Interrupts`]: masks preemption so a block of code runs without
//!   interleaving from other threads. [`enter`](Interrupts::enter) returns the
//!   level that was in effect before and [`exit`](Interrupts::exit) restores
//!   exactly that level, so nested sections compose.
//! - [`Scheduler`]: identifies the running thread, suspends it, and admits a
//!   thread identity back onto the ready set.
//!
//! [`Section`] ties the two together. It is the only way primitives reach
//! [`Scheduler::suspend`] and [`Scheduler::admit`], so both are statically
//! confined to code that holds the masking.

use alloc::sync::Arc;
use core::fmt;
use core::marker::PhantomData;

/// Preemption masking.
///
/// # Safety
///
/// Implementors guarantee that between [`enter`](Interrupts::enter) and the
/// matching [`exit`](Interrupts::exit), no other logical thread executes
/// unless the masked thread calls [`Scheduler::suspend`]. Primitives rely on
/// this to touch their [`SectionCell`](crate::cell::SectionCell) state
/// without any further synchronization.
pub unsafe trait Interrupts {
    /// The masking level saved by [`enter`](Interrupts::enter).
    type Level: Copy;

    /// Masks preemption and returns the previously effective level.
    fn enter(&self) -> Self::Level;

    /// Restores the level returned by the matching [`enter`](Interrupts::enter).
    ///
    /// This restores, it does not unconditionally unmask: a section opened
    /// inside another section leaves the outer one masked.
    ///
    /// # Safety
    ///
    /// `level` must come from the most recent unmatched `enter` on this
    /// logical thread.
    unsafe fn exit(&self, level: Self::Level);
}

/// Thread identification, suspension and readmission.
///
/// # Safety
///
/// [`suspend`](Scheduler::suspend) must take the calling thread off the ready
/// set before any other logical thread runs, and must leave masking held when
/// the thread resumes. A thread must not resume from `suspend` until some
/// thread has [`admit`](Scheduler::admit)ted it after it suspended; hosts
/// built on a park primitive that can wake spuriously must loop until the
/// admission is observed. Primitives dequeue a waiter before admitting it
/// and never dequeue themselves, so a resume without an admit would leave a
/// stale queue entry behind that later steals a wakeup.
pub unsafe trait Scheduler {
    /// Comparison-only identity of a thread.
    type ThreadId: Copy + Eq + fmt::Debug;

    /// Returns the identity of the calling thread.
    fn current(&self) -> Self::ThreadId;

    /// Deschedules the calling thread until it is admitted again.
    ///
    /// # Safety
    ///
    /// Must be called with masking held.
    unsafe fn suspend(&self);

    /// Makes `thread` eligible to run again.
    ///
    /// # Safety
    ///
    /// Must be called with masking held.
    unsafe fn admit(&self, thread: Self::ThreadId);
}

/// A host runtime: masking plus scheduling.
pub trait Runtime: Interrupts + Scheduler {}

impl<T: Interrupts + Scheduler + ?Sized> Runtime for T {}

// SAFETY: Forwards to `T`, which upholds the contract.
unsafe impl<T: Interrupts + ?Sized> Interrupts for &T {
    type Level = T::Level;

    fn enter(&self) -> Self::Level {
        (**self).enter()
    }

    unsafe fn exit(&self, level: Self::Level) {
        // SAFETY: Caller upholds the pairing contract.
        unsafe { (**self).exit(level) }
    }
}

// SAFETY: Forwards to `T`, which upholds the contract.
unsafe impl<T: Scheduler + ?Sized> Scheduler for &T {
    type ThreadId = T::ThreadId;

    fn current(&self) -> Self::ThreadId {
        (**self).current()
    }

    unsafe fn suspend(&self) {
        // SAFETY: Caller holds masking.
        unsafe { (**self).suspend() }
    }

    unsafe fn admit(&self, thread: Self::ThreadId) {
        // SAFETY: Caller holds masking.
        unsafe { (**self).admit(thread) }
    }
}

// SAFETY: Forwards to `T`, which upholds the contract.
unsafe impl<T: Interrupts + ?Sized> Interrupts for Arc<T> {
    type Level = T::Level;

    fn enter(&self) -> Self::Level {
        (**self).enter()
    }

    unsafe fn exit(&self, level: Self::Level) {
        // SAFETY: Caller upholds the pairing contract.
        unsafe { (**self).exit(level) }
    }
}

// SAFETY: Forwards to `T`, which upholds the contract.
unsafe impl<T: Scheduler + ?Sized> Scheduler for Arc<T> {
    type ThreadId = T::ThreadId;

    fn current(&self) -> Self::ThreadId {
        (**self).current()
    }

    unsafe fn suspend(&self) {
        // SAFETY: Caller holds masking.
        unsafe { (**self).suspend() }
    }

    unsafe fn admit(&self, thread: Self::ThreadId) {
        // SAFETY: Caller holds masking.
        unsafe { (**self).admit(thread) }
    }
}

/// An atomic section: preemption is masked for the guard's lifetime.
///
/// Created by [`Section::enter`]; the saved level is restored on drop, which
/// covers every exit path including unwinding and paths that resumed after a
/// [`suspend`](Section::suspend).
pub struct Section<'a, R: Runtime + ?Sized> {
    rt: &'a R,
    level: R::Level,
    /// Masking state belongs to the logical thread that entered.
    _not_send: PhantomData<*mut ()>,
}

impl<'a, R: Runtime + ?Sized> Section<'a, R> {
    /// Masks preemption on `rt` until the returned guard is dropped.
    pub fn enter(rt: &'a R) -> Self {
        let level = rt.enter();
        Self {
            rt,
            level,
            _not_send: PhantomData,
        }
    }

    /// Returns the identity of the calling thread.
    pub fn current(&self) -> R::ThreadId {
        self.rt.current()
    }

    /// Suspends the calling thread; masking is held again on return.
    ///
    /// Takes `&mut self` so no [`SectionCell`](crate::cell::SectionCell)
    /// borrow can be live across the suspension.
    pub fn suspend(&mut self) {
        // SAFETY: This guard proves masking is held.
        unsafe { self.rt.suspend() }
    }

    /// Admits `thread` to the ready set.
    pub fn admit(&mut self, thread: R::ThreadId) {
        // SAFETY: This guard proves masking is held.
        unsafe { self.rt.admit(thread) }
    }
}

impl<R: Runtime + ?Sized> Drop for Section<'_, R> {
    fn drop(&mut self) {
        // SAFETY: `level` came from the `enter` in `Section::enter`, and
        // sections nest lexically because the guard is `!Send` and borrowed.
        unsafe { self.rt.exit(self.level) }
    }
}
