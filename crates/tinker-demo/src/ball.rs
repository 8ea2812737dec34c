use tinker_engine::coords::{Vec2, Viewport};
use tinker_engine::paint::Color;

/// The demo's single moving circle.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    /// Velocity in logical pixels per millisecond.
    const START_VEL: Vec2 = Vec2 { x: 0.5, y: -0.5 };
    const RADIUS: f32 = 8.0;

    pub fn new() -> Self {
        Self {
            pos: Vec2::zero(),
            vel: Self::START_VEL,
            radius: Self::RADIUS,
            color: Color::RED,
        }
    }

    /// Integrates position over `dt_ms`, then reflects off the viewport
    /// edges per axis.
    pub fn advance(&mut self, dt_ms: f32, viewport: Viewport) {
        self.pos += self.vel * dt_ms;
        self.reflect(viewport);
    }

    /// Per-axis elastic reflection against the viewport bounds.
    ///
    /// On a crossing the position is clamped back to the edge and that
    /// axis's velocity component flips sign. Axes are handled independently;
    /// a radius larger than half the extent is not handled.
    fn reflect(&mut self, viewport: Viewport) {
        let (px, fx) = reflect_axis(self.pos.x, self.radius, viewport.width);
        let (py, fy) = reflect_axis(self.pos.y, self.radius, viewport.height);
        self.pos = Vec2::new(px, py);
        if fx {
            self.vel.x = -self.vel.x;
        }
        if fy {
            self.vel.y = -self.vel.y;
        }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// One axis of the reflection rule. Returns the clamped coordinate and
/// whether the velocity component should flip.
fn reflect_axis(pos: f32, radius: f32, extent: f32) -> (f32, bool) {
    if pos - radius <= 0.0 {
        (radius, true)
    } else if pos + radius >= extent {
        (extent - radius, true)
    } else {
        (pos, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport {
        width: 960.0,
        height: 720.0,
    };

    fn in_bounds(ball: &Ball, viewport: Viewport) -> bool {
        ball.pos.x >= ball.radius
            && ball.pos.x <= viewport.width - ball.radius
            && ball.pos.y >= ball.radius
            && ball.pos.y <= viewport.height - ball.radius
    }

    #[test]
    fn first_tick_from_origin_clamps_and_flips_y() {
        let mut ball = Ball::new();
        assert_eq!(ball.pos, Vec2::zero());

        ball.advance(1.0, VIEW);

        // Pre-clamp position is (0.5, -0.5): x also starts behind the left
        // edge (0 < radius), so both axes clamp on the first tick.
        assert_eq!(ball.pos, Vec2::new(8.0, 8.0));
        assert_eq!(ball.vel, Vec2::new(-0.5, 0.5));
    }

    #[test]
    fn integration_is_velocity_times_dt() {
        let mut ball = Ball::new();
        ball.pos = Vec2::new(100.0, 100.0);
        ball.vel = Vec2::new(0.5, -0.5);

        ball.advance(16.0, VIEW);

        assert_eq!(ball.pos, Vec2::new(108.0, 92.0));
        assert_eq!(ball.vel, Vec2::new(0.5, -0.5));
    }

    #[test]
    fn right_edge_reflects_x_only() {
        let mut ball = Ball::new();
        ball.pos = Vec2::new(951.0, 300.0);
        ball.vel = Vec2::new(0.5, -0.5);

        ball.advance(10.0, VIEW);

        assert_eq!(ball.pos.x, VIEW.width - ball.radius);
        assert_eq!(ball.vel.x, -0.5);
        assert_eq!(ball.vel.y, -0.5);
    }

    #[test]
    fn bottom_edge_reflects_y_only() {
        let mut ball = Ball::new();
        ball.pos = Vec2::new(300.0, 715.0);
        ball.vel = Vec2::new(0.5, 0.5);

        ball.advance(10.0, VIEW);

        assert_eq!(ball.pos.y, VIEW.height - ball.radius);
        assert_eq!(ball.vel.y, -0.5);
        assert_eq!(ball.vel.x, 0.5);
    }

    #[test]
    fn velocity_flips_at_most_once_per_tick_per_axis() {
        let mut ball = Ball::new();
        // Overshoot the right edge by a lot in one tick.
        ball.pos = Vec2::new(955.0, 300.0);
        ball.vel = Vec2::new(50.0, 0.0);

        ball.advance(10.0, VIEW);

        // One flip, not one per pixel of overshoot.
        assert_eq!(ball.vel.x, -50.0);
        assert_eq!(ball.pos.x, VIEW.width - ball.radius);
    }

    #[test]
    fn position_stays_in_bounds_over_many_ticks() {
        let mut ball = Ball::new();
        for _ in 0..10_000 {
            ball.advance(16.7, VIEW);
            assert!(in_bounds(&ball, VIEW), "escaped bounds at {:?}", ball.pos);
        }
    }

    #[test]
    fn corner_hit_flips_both_axes() {
        let mut ball = Ball::new();
        ball.pos = Vec2::new(955.0, 715.0);
        ball.vel = Vec2::new(1.0, 1.0);

        ball.advance(10.0, VIEW);

        assert_eq!(
            ball.pos,
            Vec2::new(VIEW.width - ball.radius, VIEW.height - ball.radius)
        );
        assert_eq!(ball.vel, Vec2::new(-1.0, -1.0));
    }
}
