use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Rect, Velocity};

/// The ball: a square body moving by a constant velocity each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    rect: Rect,
    velocity: Velocity,
}

impl Ball {
    #[must_use]
    pub const fn new(rect: Rect, velocity: Velocity) -> Self {
        Self { rect, velocity }
    }

    #[must_use]
    pub const fn rect(&self) -> &Rect {
        &self.rect
    }

    #[must_use]
    pub const fn velocity(&self) -> Velocity {
        self.velocity
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.rect.x
    }

    #[must_use]
    pub const fn y(&self) -> i32 {
        self.rect.y
    }

    pub(crate) const fn advance(&mut self) {
        self.rect.translate(self.velocity.dx, self.velocity.dy);
    }

    pub(crate) const fn bounce_vertical(&mut self) {
        self.velocity.dy = -self.velocity.dy;
    }

    pub(crate) const fn bounce_horizontal(&mut self) {
        self.velocity.dx = -self.velocity.dx;
    }

    /// Centers the ball at `(cx, cy)` and flips each velocity component with probability 1/2.
    pub(crate) fn serve<R>(&mut self, cx: i32, cy: i32, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.rect.set_center(cx, cy);
        self.velocity.dx *= random_sign(rng);
        self.velocity.dy *= random_sign(rng);
    }
}

fn random_sign<R>(rng: &mut R) -> i32
where
    R: Rng + ?Sized,
{
    if rng.random_bool(0.5) { 1 } else { -1 }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_advance_and_bounce() {
        let mut ball = Ball::new(Rect::new(100, 100, 30, 30), Velocity::new(7, -7));
        ball.advance();
        assert_eq!((ball.x(), ball.y()), (107, 93));

        ball.bounce_vertical();
        ball.bounce_horizontal();
        assert_eq!(ball.velocity(), Velocity::new(-7, 7));
    }

    #[test]
    fn test_serve_keeps_speed() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut ball = Ball::new(Rect::new(3, 400, 30, 30), Velocity::new(-7, 7));
        for _ in 0..32 {
            ball.serve(350, 250, &mut rng);
            assert_eq!((ball.x(), ball.y()), (335, 235));
            assert_eq!(ball.velocity().dx.abs(), 7);
            assert_eq!(ball.velocity().dy.abs(), 7);
        }
    }

    #[test]
    fn test_serve_produces_every_direction() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = Ball::new(Rect::new(0, 0, 30, 30), Velocity::new(7, 7));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            ball.serve(350, 250, &mut rng);
            seen.insert(ball.velocity());
        }
        assert_eq!(seen.len(), 4);
    }
}
