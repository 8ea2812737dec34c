//! Tinker engine crate.
//!
//! A small scaffold for prototyping 2D game concepts: a fixed-tick loop with
//! lifecycle hooks (init, input, update, render, stop) and just enough of a
//! GPU/windowing layer to clear a surface and draw filled circles.

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;
