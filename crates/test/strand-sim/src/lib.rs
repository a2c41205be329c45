//! A deterministic, cooperative, single-processor thread simulator.
//!
//! [`Sim`] implements [`strand_sync::Runtime`] on the host so the
//! synchronization primitives can be exercised without a kernel. Each
//! logical thread is backed by a host thread, but a baton guarantees that
//! exactly one logical thread executes at any moment, exactly as on a
//! uniprocessor.
//!
//! The simulated processor has one global masking [`Level`]. Every context
//! switch happens while masked, and leaving the outermost atomic section is
//! a preemption point governed by the configured [`Preemption`] policy,
//! standing in for a timer interrupt that was held pending while masked.
//!
//! ```ignore
//! let sim = Sim::new(SimConfig::default());
//! let lock = Arc::new(Lock::new("l", sim.clone()));
//!
//! let l = Arc::clone(&lock);
//! sim.spawn("a", move || {
//!     l.acquire();
//!     strand_sim::yield_now();
//!     l.release();
//! })?;
//!
//! let report = sim.run()?;
//! assert!(report.sections_balanced());
//! ```

mod ready;
mod rng;

pub use config::{DEFAULT_MAX_SWITCHES, PreemptPoint, Preemption, SimConfig};
pub use error::SimError;
pub use event::{Event, Level, Report, ThreadState, ThreadSummary};
pub use sim::{Sim, current_name, current_thread, yield_now};

/// Identity used for calls made from the host thread while no logical
/// thread is running.
pub const HOST_THREAD: strand_sync::ThreadId = strand_sync::ThreadId::new(u32::MAX);

/// Log target for simulator records.
pub(crate) const LOG_TARGET: &str = "strand::sim";
