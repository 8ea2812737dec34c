//! Time subsystem.
//!
//! Provides the fixed-tick pacer that gives the loop its cadence. One
//! `TickClock` per loop; call `wait()` once per tick to block until the next
//! boundary and obtain the elapsed time.

mod tick_clock;

pub use tick_clock::{DEFAULT_UPS, TickClock};
