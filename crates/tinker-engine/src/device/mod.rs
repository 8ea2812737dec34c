//! GPU device + surface management.
//!
//! Responsible for:
//! - creating the wgpu Device/Queue for a window surface
//! - configuring the surface (swapchain) and reacting to resizes
//! - acquiring frames and providing encoders/views for rendering

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
