use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen coordinates.
///
/// The origin is the top-left corner of the arena, `x` grows to the right and `y` grows
/// downwards. `right()` and `bottom()` are exclusive edges (`x + width`, `y + height`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn left(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    #[must_use]
    pub const fn top(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns `true` if the two rectangles share some interior area.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    ///
    /// ```
    /// use pongevo_engine::Rect;
    ///
    /// let a = Rect::new(0, 0, 10, 10);
    /// assert!(a.overlaps(&Rect::new(9, 9, 10, 10)));
    /// assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
    /// ```
    #[must_use]
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub const fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Moves the rectangle so that its center is at `(cx, cy)`.
    ///
    /// Odd sizes round the top-left corner down, so a 30x30 rect centered at `(350, 250)`
    /// lands at `(335, 235)`.
    pub const fn set_center(&mut self, cx: i32, cy: i32) {
        self.x = cx - self.width / 2;
        self.y = cy - self.height / 2;
    }
}

/// Per-tick displacement of a moving entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.left(), 10);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.top(), 20);
        assert_eq!(rect.bottom(), 60);
    }

    #[test]
    fn test_overlap_is_symmetric_and_strict() {
        let paddle = Rect::new(10, 180, 10, 140);

        let touching_right = Rect::new(20, 200, 30, 30);
        assert!(!paddle.overlaps(&touching_right));
        assert!(!touching_right.overlaps(&paddle));

        let inside = Rect::new(13, 200, 30, 30);
        assert!(paddle.overlaps(&inside));
        assert!(inside.overlaps(&paddle));

        let below = Rect::new(13, 320, 30, 30);
        assert!(!paddle.overlaps(&below));
    }

    #[test]
    fn test_set_center() {
        let mut ball = Rect::new(0, 0, 30, 30);
        ball.set_center(350, 250);
        assert_eq!((ball.x, ball.y), (335, 235));
    }
}
