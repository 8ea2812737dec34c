//! Shape renderers, one module per `DrawCmd` variant.

mod circle;
mod common;

pub use circle::CircleRenderer;
