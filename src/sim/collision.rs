//! Axis-aligned rectangle collision and side detection
//!
//! Rectangles are given as a center plus full width/height. Only x and y
//! take part; any z component is dropped by the caller.

use glam::Vec2;

/// Which edge of the second rectangle was struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    None,
    /// Left or right edge: bounce horizontally
    Side,
    /// Top or bottom edge: bounce vertically
    Top,
}

impl Collision {
    /// Integer tag: 0 = none, 1 = side, 2 = top/bottom
    pub fn tag(self) -> u8 {
        match self {
            Collision::None => 0,
            Collision::Side => 1,
            Collision::Top => 2,
        }
    }

    pub fn is_hit(self) -> bool {
        self != Collision::None
    }
}

/// An axis-aligned rectangle (center + full extents)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// Inclusive overlap test
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.center.x + self.half_width() >= other.center.x - other.half_width()
            && self.center.x - self.half_width() <= other.center.x + other.half_width()
            && self.center.y + self.half_height() >= other.center.y - other.half_height()
            && self.center.y - self.half_height() <= other.center.y + other.half_height()
    }

    /// Classify a hit of `self` against `other`, relative to `other`'s edges
    ///
    /// If our center is outside `other`'s x-extent we came in from the side.
    /// Otherwise, outside the y-extent means top/bottom. A center inside both
    /// extents (deep overlap, exact corner) counts as a side hit.
    pub fn collide(&self, other: &Rect) -> Collision {
        if !self.overlaps(other) {
            return Collision::None;
        }

        let p = self.center;
        let o = other.center;
        if p.x <= o.x - other.half_width() || p.x >= o.x + other.half_width() {
            Collision::Side
        } else if p.y <= o.y - other.half_height() || p.y >= o.y + other.half_height() {
            Collision::Top
        } else {
            Collision::Side
        }
    }
}

/// AABB check between two rectangles given as centers and full extents
pub fn aabb(
    pos1: Vec2,
    pos2: Vec2,
    width1: f32,
    width2: f32,
    height1: f32,
    height2: f32,
) -> Collision {
    Rect::new(pos1, width1, height1).collide(&Rect::new(pos2, width2, height2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_side_hit() {
        let hit = aabb(Vec2::ZERO, Vec2::new(1.0, 0.0), 1.0, 1.0, 1.0, 1.0);
        assert_eq!(hit, Collision::Side);
        assert_eq!(hit.tag(), 1);
    }

    #[test]
    fn test_top_hit() {
        let hit = aabb(Vec2::ZERO, Vec2::new(0.0, 1.0), 1.0, 1.0, 1.0, 1.0);
        assert_eq!(hit, Collision::Top);
        assert_eq!(hit.tag(), 2);
    }

    #[test]
    fn test_far_apart_is_none() {
        let hit = aabb(Vec2::ZERO, Vec2::new(10.0, 10.0), 1.0, 1.0, 1.0, 1.0);
        assert_eq!(hit, Collision::None);
        assert_eq!(hit.tag(), 0);
        assert!(!hit.is_hit());
    }

    #[test]
    fn test_touching_edges_count_as_overlap() {
        // Right edge of the first exactly meets left edge of the second
        let hit = aabb(Vec2::ZERO, Vec2::new(2.0, 0.0), 2.0, 2.0, 2.0, 2.0);
        assert_eq!(hit, Collision::Side);
    }

    #[test]
    fn test_exact_corner_defaults_to_side() {
        // Center sits exactly on the second rectangle's corner
        let hit = aabb(Vec2::new(0.5, 0.5), Vec2::ZERO, 0.2, 1.0, 0.2, 1.0);
        assert_eq!(hit, Collision::Side);
    }

    #[test]
    fn test_deep_overlap_defaults_to_side() {
        let hit = aabb(Vec2::ZERO, Vec2::ZERO, 0.1, 1.0, 0.1, 1.0);
        assert_eq!(hit, Collision::Side);
    }

    #[test]
    fn test_ball_landing_on_paddle() {
        // Ball (extent 0.1) just above a 1.0 x 0.1 paddle
        let hit = aabb(
            Vec2::new(-0.8, -1.92),
            Vec2::new(-1.0, -2.0),
            0.1,
            1.0,
            0.1,
            0.1,
        );
        assert_eq!(hit, Collision::Top);
    }

    #[test]
    fn test_tag_is_relative_to_second_rect() {
        let wide = Rect::new(Vec2::new(0.0, 0.6), 4.0, 0.4);
        let post = Rect::new(Vec2::new(1.5, 0.0), 0.2, 1.0);
        assert_eq!(wide.collide(&post), Collision::Side);
        assert_eq!(post.collide(&wide), Collision::Top);
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            x1 in -5.0f32..5.0, y1 in -5.0f32..5.0,
            x2 in -5.0f32..5.0, y2 in -5.0f32..5.0,
            w1 in 0.01f32..3.0, h1 in 0.01f32..3.0,
            w2 in 0.01f32..3.0, h2 in 0.01f32..3.0,
        ) {
            let a = Rect::new(Vec2::new(x1, y1), w1, h1);
            let b = Rect::new(Vec2::new(x2, y2), w2, h2);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            prop_assert_eq!(a.collide(&b).is_hit(), b.collide(&a).is_hit());
        }

        #[test]
        fn far_rectangles_never_hit(
            dx in 3.01f32..100.0, dy in -100.0f32..100.0,
            w1 in 0.01f32..3.0, w2 in 0.01f32..3.0,
        ) {
            let hit = aabb(Vec2::ZERO, Vec2::new(dx, dy), w1, w2, 1.0, 1.0);
            prop_assert_eq!(hit, Collision::None);
        }
    }
}
