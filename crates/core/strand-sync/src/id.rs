//! Thread identities.
//!
//! A [`ThreadId`] names a thread for comparison and for handing back to the
//! scheduler. It never owns or borrows the thread it names, so wait queues
//! and lock owners carry no lifetime coupling to thread objects.

use core::fmt;

/// Opaque, copyable thread identity.
///
/// Hosts whose scheduler already has an identity type can use that instead
/// (see [`Scheduler::ThreadId`](crate::runtime::Scheduler::ThreadId)); this
/// newtype is for hosts that identify threads by a plain index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ThreadId(u32);

impl ThreadId {
    /// Creates a new `ThreadId`.
    pub const fn new(val: u32) -> Self {
        Self(val)
    }

    /// Returns the raw `u32` value.
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the value as `usize` (convenience for indexing).
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}
