use crate::coords::Vec2;
use crate::paint::Color;

/// Renderer-agnostic draw command stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
}

/// Filled-circle draw payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, color: Color) -> Self {
        Self { center, radius, color }
    }
}
