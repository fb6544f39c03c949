//! Collision detection
//!
//! Debris is drawn as an irregular polygon but collides as a circle of its
//! nominal size. Contact is strict: touching edges do not count.

use glam::Vec2;

/// Circle-vs-circle overlap (strict inequality)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Whether any circle in `others` overlaps the circle at `center`; stops at the first hit
pub fn any_overlap<I>(center: Vec2, radius: f32, others: I) -> bool
where
    I: IntoIterator<Item = (Vec2, f32)>,
{
    others
        .into_iter()
        .any(|(pos, r)| circles_overlap(center, radius, pos, r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_inside_sum() {
        assert!(circles_overlap(Vec2::ZERO, 8.0, Vec2::new(15.0, 0.0), 10.0));
    }

    #[test]
    fn test_exact_touch_is_miss() {
        // distance 18 == 8 + 10
        assert!(!circles_overlap(Vec2::ZERO, 8.0, Vec2::new(18.0, 0.0), 10.0));
        // 3-4-5 triangle keeps the distance exact in floating point
        assert!(!circles_overlap(Vec2::ZERO, 2.0, Vec2::new(3.0, 4.0), 3.0));
    }

    #[test]
    fn test_clear_miss() {
        assert!(!circles_overlap(Vec2::new(100.0, 100.0), 8.0, Vec2::ZERO, 14.0));
    }

    #[test]
    fn test_any_overlap() {
        let others = [
            (Vec2::new(100.0, 0.0), 5.0),
            (Vec2::new(10.0, 0.0), 5.0),
            (Vec2::new(5.0, 0.0), 5.0),
        ];
        assert!(any_overlap(Vec2::ZERO, 8.0, others));
        assert!(!any_overlap(Vec2::new(-500.0, 0.0), 8.0, others));
        assert!(!any_overlap(Vec2::ZERO, 8.0, std::iter::empty()));
    }
}
