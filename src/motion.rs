use crate::basic::Point;

/// Move `pos` by `vel`, the board has no edges: leaving on one side
/// re-enters on the opposite side, independently for each axis
pub fn advance(pos: Point, vel: Point, bounds: Point) -> Point {
    Point {
        x: wrap(pos.x + vel.x, bounds.x),
        y: wrap(pos.y + vel.y, bounds.y),
    }
}

fn wrap(value: f32, bound: f32) -> f32 {
    if value >= bound {
        0.
    } else if value < 0. {
        bound - 1.
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Point = Point::new(800., 440.);

    #[test]
    fn test_advance_inside() {
        let pos = advance(Point::new(40., 40.), Point::new(20., 0.), BOUNDS);
        assert_eq!(pos, Point::new(60., 40.));

        let pos = advance(Point::new(40., 40.), Point::new(0., -2.5), BOUNDS);
        assert_eq!(pos, Point::new(40., 37.5));
    }

    #[test]
    fn test_wrap_at_upper_bound() {
        // reaching the bound exactly already wraps
        assert_eq!(advance(Point::new(798., 10.), Point::new(2., 0.), BOUNDS), Point::new(0., 10.));
        assert_eq!(advance(Point::new(10., 439.), Point::new(0., 5.), BOUNDS), Point::new(10., 0.));
    }

    #[test]
    fn test_wrap_below_zero() {
        assert_eq!(advance(Point::new(0., 10.), Point::new(-2., 0.), BOUNDS), Point::new(799., 10.));
        assert_eq!(advance(Point::new(10., 0.), Point::new(0., -2.), BOUNDS), Point::new(10., 439.));
    }

    #[test]
    fn test_axes_wrap_independently() {
        let pos = advance(Point::new(799., 0.), Point::new(1., -1.), BOUNDS);
        assert_eq!(pos, Point::new(0., 439.));

        let pos = advance(Point::new(799., 200.), Point::new(1., 0.), BOUNDS);
        assert_eq!(pos.y, 200.);
    }
}
