//! Lumen timing primitives (host-agnostic)
//!
//! Rate limiters driven by caller-supplied timestamps instead of owned
//! timers: the host feeds a monotonic "now" in milliseconds (typically
//! `performance.now()`) and schedules its own wakeups from the exposed
//! deadlines. This keeps the primitives pure and directly testable.

pub mod debounce;
pub mod throttle;

pub use debounce::Debouncer;
pub use throttle::Throttler;
