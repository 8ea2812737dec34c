use tinker_engine::core::{FrameCtx, Game, GameCtx};
use tinker_engine::input::{InputFrame, Key};
use tinker_engine::paint::Color;

use crate::ball::Ball;

/// One red ball bouncing off the window edges.
#[derive(Debug, Default)]
pub struct BounceDemo {
    ball: Ball,
}

impl Game for BounceDemo {
    fn init(&mut self, ctx: &mut GameCtx) {
        ctx.set_clear_color(Color::BLACK);
        self.ball = Ball::new();
        log::info!(
            "bounce demo ready, viewport {}x{}",
            ctx.viewport().width,
            ctx.viewport().height
        );
    }

    fn input(&mut self, ctx: &mut GameCtx, input: &InputFrame) {
        if input.quit_requested() || input.pressed(Key::Escape) {
            ctx.stop();
        }
    }

    fn update(&mut self, ctx: &mut GameCtx, dt_ms: f32) {
        self.ball.advance(dt_ms, ctx.viewport());
    }

    fn render(&mut self, ctx: &mut GameCtx, frame: &mut FrameCtx<'_, '_>) {
        let ball = self.ball;
        frame.draw(ctx.clear_color(), |list| {
            list.push_circle(ball.pos, ball.radius, ball.color);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinker_engine::coords::Viewport;

    fn ctx() -> GameCtx {
        GameCtx::new(Viewport::new(960.0, 720.0))
    }

    #[test]
    fn escape_requests_stop() {
        let mut demo = BounceDemo::default();
        let mut ctx = ctx();
        let mut input = InputFrame::default();
        input.press(Key::Escape);

        demo.input(&mut ctx, &input);
        assert!(ctx.stop_requested());
    }

    #[test]
    fn quit_event_requests_stop() {
        let mut demo = BounceDemo::default();
        let mut ctx = ctx();
        let mut input = InputFrame::default();
        input.request_quit();

        demo.input(&mut ctx, &input);
        assert!(ctx.stop_requested());
    }

    #[test]
    fn other_keys_do_not_stop() {
        let mut demo = BounceDemo::default();
        let mut ctx = ctx();
        let mut input = InputFrame::default();
        input.press(Key::Space);

        demo.input(&mut ctx, &input);
        assert!(!ctx.stop_requested());
    }

    #[test]
    fn update_moves_the_ball() {
        let mut demo = BounceDemo::default();
        let mut ctx = ctx();
        demo.init(&mut ctx);

        let before = demo.ball.pos;
        demo.update(&mut ctx, 16.0);
        assert_ne!(demo.ball.pos, before);
    }
}
