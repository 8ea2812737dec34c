//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, paces ticks with [`crate::time::TickClock`],
//! and dispatches the hook sequence each tick.

mod runtime;

pub use runtime::{LoopState, Runtime, RuntimeConfig};
