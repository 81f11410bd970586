//! Collision detection and response for border segments
//!
//! Borders are straight line segments derived from closed course loops. The
//! hit test solves the standard circle-vs-line quadratic in the segment's
//! parametric coordinate; the response is a lossless reflection off the
//! segment normal. Energy loss comes only from friction decay, never from
//! the bounce itself.

use glam::Vec2;

use super::course::Segment;

/// True if the circle at `center` overlaps the segment within its
/// parametric bounds `[0, 1]`.
///
/// With `d = p2 - p1` and `f = p1 - center`, the intersection points of the
/// segment's carrier line with the circle are the roots of
/// `(d.d)u^2 + 2(f.d)u + (f.f - r^2) = 0`. A negative discriminant means the
/// line misses the circle entirely; otherwise the segment is hit iff either
/// root lies in `[0, 1]`.
pub fn circle_segment_hit(center: Vec2, radius: f32, seg: Segment) -> bool {
    let d = seg.direction();
    let f = seg.p1 - center;

    let a = d.length_squared();
    if a <= f32::EPSILON {
        // Degenerate segment
        return false;
    }

    let b = 2.0 * f.dot(d);
    let c = f.length_squared() - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return false;
    }

    let sqrt_disc = discriminant.sqrt();
    let u1 = (-b - sqrt_disc) / (2.0 * a);
    let u2 = (-b + sqrt_disc) / (2.0 * a);

    (0.0..=1.0).contains(&u1) || (0.0..=1.0).contains(&u2)
}

/// Unit normal of a segment: `(p2.y - p1.y, p1.x - p2.x)` normalized
#[inline]
pub fn segment_normal(seg: Segment) -> Vec2 {
    Vec2::new(seg.p2.y - seg.p1.y, seg.p1.x - seg.p2.x).normalize()
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v.n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Bounce a ball's velocity off a segment it currently overlaps.
///
/// Returns `None` when the velocity already points off the side of the line
/// the ball center sits on - a ball still overlapping after a reflection
/// must not be reflected back into the wall, so one crossing produces
/// exactly one bounce.
pub fn bounce_off_segment(center: Vec2, velocity: Vec2, seg: Segment) -> Option<Vec2> {
    let n = segment_normal(seg);
    let side = (center - seg.p1).dot(n);
    if side * velocity.dot(n) >= 0.0 {
        return None;
    }
    Some(reflect_velocity(velocity, n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn vertical_wall() -> Segment {
        Segment::new(Vec2::new(100.0, 0.0), Vec2::new(100.0, 200.0))
    }

    #[test]
    fn test_circle_segment_hit_overlapping() {
        // Ball center 8 units from the wall line, radius 10
        assert!(circle_segment_hit(Vec2::new(92.0, 50.0), 10.0, vertical_wall()));
        // Touching exactly counts (root at tangency)
        assert!(circle_segment_hit(Vec2::new(90.0, 50.0), 10.0, vertical_wall()));
    }

    #[test]
    fn test_circle_segment_miss_negative_discriminant() {
        // Well clear of the carrier line
        assert!(!circle_segment_hit(Vec2::new(50.0, 50.0), 10.0, vertical_wall()));
    }

    #[test]
    fn test_circle_segment_miss_outside_parametric_bounds() {
        // On the carrier line's extension, past the segment's far end
        assert!(!circle_segment_hit(Vec2::new(100.0, 250.0), 10.0, vertical_wall()));
        assert!(!circle_segment_hit(Vec2::new(100.0, -40.0), 10.0, vertical_wall()));
    }

    #[test]
    fn test_segment_normal_is_unit_perpendicular() {
        let n = segment_normal(vertical_wall());
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!(n.dot(vertical_wall().direction()).abs() < 1e-4);
    }

    #[test]
    fn test_reflect_velocity_axis() {
        // Ball moving right, vertical wall
        let reflected = reflect_velocity(Vec2::new(100.0, 0.0), Vec2::new(-1.0, 0.0));
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn test_reflect_velocity_preserves_tangent_component() {
        let reflected = reflect_velocity(Vec2::new(3.0, 4.0), Vec2::new(-1.0, 0.0));
        assert!((reflected.x - (-3.0)).abs() < 1e-5);
        assert!((reflected.y - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_bounce_only_when_approaching() {
        let wall = vertical_wall();
        let center = Vec2::new(92.0, 50.0);

        // Moving into the wall: reflected
        let bounced = bounce_off_segment(center, Vec2::new(50.0, 0.0), wall);
        assert_eq!(bounced, Some(Vec2::new(-50.0, 0.0)));

        // Already moving away while still overlapping: left alone
        assert_eq!(bounce_off_segment(center, Vec2::new(-50.0, 0.0), wall), None);
    }

    proptest! {
        #[test]
        fn prop_reflection_preserves_speed(
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            theta in 0.0f32..std::f32::consts::TAU,
        ) {
            let v = Vec2::new(vx, vy);
            let n = Vec2::new(theta.cos(), theta.sin());
            let reflected = reflect_velocity(v, n);
            prop_assert!((reflected.length() - v.length()).abs() <= v.length() * 1e-5 + 1e-4);
        }

        #[test]
        fn prop_reflection_is_involutive(
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            theta in 0.0f32..std::f32::consts::TAU,
        ) {
            let v = Vec2::new(vx, vy);
            let n = Vec2::new(theta.cos(), theta.sin());
            let twice = reflect_velocity(reflect_velocity(v, n), n);
            prop_assert!((twice - v).length() <= v.length() * 1e-5 + 1e-4);
        }
    }
}
