//! Fatal checks for caller contracts.
//!
//! The [`contract!`] macro guards conditions whose violation is a
//! programming error in the caller: releasing a lock the caller does not
//! own, or using a condition variable without holding its lock. There is no
//! recoverable path for these.
//!
//! # Behavior
//!
//! | Build configuration | Result |
//! |---------------------|--------|
//! | Debug | Panics on failure |
//! | Release | Panics on failure |
//!
//! Unlike `debug_assert!`, the check is never compiled away. Kernel hosts
//! build with `panic = "abort"`, which turns the panic into an abort.

/// Panics with a `contract violated:` message when `$cond` is false.
///
/// # Examples
///
/// ```ignore
/// contract!(lock.is_held_by_current_thread());
/// contract!(owner == Some(me), "lock {} released by {:?}", name, me);
/// ```
#[macro_export]
macro_rules! contract {
    ($cond:expr $(,)?) => {
        if !$cond {
            panic!("contract violated: {}", stringify!($cond));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            panic!("contract violated: {}", format_args!($($arg)+));
        }
    };
}
