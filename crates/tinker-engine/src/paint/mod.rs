//! Paint model shared between scenes and the renderer.
//!
//! Scope is intentionally small: solid colors only. Extend with gradients or
//! patterns if a prototype ever needs them.

mod color;

pub use color::Color;
