//! Synchronization primitives for cooperatively scheduled, uniprocessor
//! thread runtimes.
//!
//! This crate provides a counting [`Semaphore`](sync::Semaphore), an
//! owner-tracked [`Lock`](sync::Lock) built on it, and a Mesa-style
//! [`Condition`](sync::Condition) variable built on a FIFO
//! [`WaitQueue`](sync::WaitQueue).
//!
//! The only source of atomicity is the host's preemption masking, reached
//! through the [`Runtime`](runtime::Runtime) capability that every primitive
//! is constructed with. There are no spin loops and no hardware atomics in
//! the blocking paths: a primitive enters an atomic
//! [`Section`](runtime::Section), inspects its state, and either proceeds or
//! suspends the calling thread while still masked.
//!
//! Because the runtime is an explicit parameter rather than ambient global
//! state, everything here can be tested on the host (see `strand-sim`).

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod cell;
pub mod contract;
pub mod id;
pub mod runtime;
pub mod sync;

pub use id::ThreadId;
pub use runtime::{Interrupts, Runtime, Scheduler, Section};
pub use sync::{Condition, Lock, Semaphore, WaitQueue};
