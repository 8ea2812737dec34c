//! Input subsystem.
//!
//! The public API is platform-agnostic and does not expose winit types.
//! The runtime translates platform events into per-tick [`InputFrame`] data.

mod frame;
mod types;

pub use frame::InputFrame;
pub use types::Key;
