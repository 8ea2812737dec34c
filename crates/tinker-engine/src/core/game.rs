use crate::input::InputFrame;
use crate::paint::Color;

use super::ctx::{FrameCtx, GameCtx};

/// Lifecycle hooks dispatched by the loop driver.
///
/// Every hook has a skeleton default, so a scene only overrides what it
/// needs. Per tick the runtime calls `input` → `update` → `render`, in that
/// order, each running to completion before the next. A stop request takes
/// effect at the top of the next tick; it never interrupts in-flight hooks.
pub trait Game {
    /// Called once after the display surface is ready.
    fn init(&mut self, ctx: &mut GameCtx) {
        ctx.set_clear_color(Color::BLACK);
    }

    /// Reads input gathered since the previous tick.
    ///
    /// The default honors the host quit event by requesting a stop.
    fn input(&mut self, ctx: &mut GameCtx, input: &InputFrame) {
        if input.quit_requested() {
            ctx.stop();
        }
    }

    /// Advances the scene by `dt_ms` milliseconds of wall-clock time.
    fn update(&mut self, ctx: &mut GameCtx, dt_ms: f32) {
        let _ = (ctx, dt_ms);
    }

    /// Draws the frame. The default clears to the clear color and presents.
    fn render(&mut self, ctx: &mut GameCtx, frame: &mut FrameCtx<'_, '_>) {
        frame.draw(ctx.clear_color(), |_| {});
    }
}
