//! Blocking synchronization primitives.
//!
//! Provides [`Semaphore`], [`Lock`] and [`Condition`], layered strictly on
//! top of [`WaitQueue`] and the host [`Runtime`](crate::Runtime). None of
//! them masks preemption on its own; every atomic step goes through a
//! [`Section`](crate::Section) on the runtime it was constructed with.
//!
//! Dependency order, leaves first:
//!
//! ```text
//! WaitQueue ─┬─> Semaphore ──> Lock
//!            └─> Condition ──(per call)──> Lock
//! ```

mod condition;
mod lock;
mod semaphore;
pub mod waitqueue;


pub use condition::Condition;
pub use lock::Lock;
pub use semaphore::Semaphore;
pub use waitqueue::WaitQueue;

/// Log target shared by all primitives.
pub(crate) const LOG_TARGET: &str = "strand::sync";
