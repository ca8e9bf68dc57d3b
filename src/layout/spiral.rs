// Archimedean spiral of candidate anchors.
//
// r = spacing * angle. Each call advances the angle by `step` before sampling,
// so the first point is already off the origin angle. Coordinates truncate
// toward zero. The cursor only moves forward; start over with a new Spiral.

use crate::geometry::Point;

#[derive(Debug, Clone)]
pub struct Spiral {
    center: Point,
    angle: f64,
    step: f64,
    spacing: f64,
}

impl Spiral {
    pub fn new(center: Point, step: f64, spacing: f64) -> Self {
        Self { center, angle: 0.0, step, spacing }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Total angle travelled so far, in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn next_point(&mut self) -> Point {
        self.angle += self.step;
        let radius = self.spacing * self.angle;
        Point {
            x: self.center.x + (radius * self.angle.cos()) as i32,
            y: self.center.y + (radius * self.angle.sin()) as i32,
        }
    }
}

impl Iterator for Spiral {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        Some(self.next_point())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_point_is_center() {
        let mut spiral = Spiral::new(Point::new(100, 50), 0.5, 1.0);
        // r = 0.5 at the first step, truncates to zero offset
        assert_eq!(spiral.next_point(), Point::new(100, 50));
    }

    #[test]
    fn test_angle_is_monotonic() {
        let mut spiral = Spiral::new(Point::new(0, 0), 0.5, 1.0);
        let mut last = spiral.angle();
        for _ in 0..100 {
            spiral.next_point();
            assert!(spiral.angle() > last);
            last = spiral.angle();
        }
        assert!((last - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_radius_grows() {
        let center = Point::new(0, 0);
        let spiral = Spiral::new(center, 0.5, 1.0);
        let points: Vec<Point> = spiral.take(400).collect();

        // Compare the farthest point of each full turn against the previous turn.
        let per_turn = (2.0 * std::f64::consts::PI / 0.5).ceil() as usize;
        let max_dist = |chunk: &[Point]| {
            chunk.iter().map(|p| p.distance_squared(center)).max().unwrap_or(0)
        };
        let maxima: Vec<i64> = points.chunks(per_turn).map(max_dist).collect();
        for pair in maxima.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_independent_instances_do_not_share_cursor() {
        let mut a = Spiral::new(Point::new(0, 0), 0.5, 1.0);
        let mut b = Spiral::new(Point::new(0, 0), 0.5, 1.0);
        for _ in 0..10 {
            a.next_point();
        }
        assert_eq!(b.next_point(), Point::new(0, 0));
        assert!(a.angle() > b.angle());
    }
}
