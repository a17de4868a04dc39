use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};

use crate::basic::Point;

/// Returned by [`Body::grow`] when every cell of the board
/// is already covered by the snake
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BoardFull {
    pub capacity: usize,
}

impl Display for BoardFull {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "snake already covers all {} cells", self.capacity)
    }
}

impl std::error::Error for BoardFull {}

#[derive(Clone, Debug)]
pub struct Body {
    /// Grid-aligned and pairwise distinct, the head is at index 0,
    /// never empty
    segments: VecDeque<Point>,

    /// Number of cells on the board, the snake can never be longer
    /// than this. Storage for this many segments is reserved up
    /// front so neither growing nor stepping allocates
    capacity: usize,
}

impl Body {
    pub fn new(head: Point, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut segments = VecDeque::with_capacity(capacity);
        segments.push_back(head);
        Self { segments, capacity }
    }

    pub fn head(&self) -> Point {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.segments.len() >= self.capacity
    }

    pub fn contains(&self, pos: Point) -> bool {
        self.segments.contains(&pos)
    }

    /// Head to tail
    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().copied()
    }

    /// Every segment paired with the size it is drawn at, recomputed
    /// from the current state on each call
    pub fn cells(&self, cell: Point) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.segments().map(move |pos| (pos, cell))
    }

    /// Make `new_head` the head, every existing segment is kept
    /// (the old head becomes the second segment)
    pub fn grow(&mut self, new_head: Point) -> Result<(), BoardFull> {
        if self.is_full() {
            return Err(BoardFull { capacity: self.capacity });
        }
        self.segments.push_front(new_head);
        Ok(())
    }

    /// Move the snake so that its head ends up at `new_head`, every
    /// other segment takes the place of the one in front of it.
    ///
    /// Returns `true` if `new_head` is already covered by the body, in
    /// which case nothing is changed. Landing on the current head is
    /// not a collision, the snake just hasn't crossed into a new cell
    /// yet, and is also a no-op.
    pub fn step_advance_or_collide(&mut self, new_head: Point) -> bool {
        if new_head == self.head() {
            return false;
        }

        if self.segments.iter().skip(1).any(|&seg| seg == new_head) {
            return true;
        }

        self.segments.pop_back();
        self.segments.push_front(new_head);
        false
    }
}

#[cfg(test)]
impl Body {
    pub fn from_segments(segments: &[Point], capacity: usize) -> Self {
        let mut body = Self::new(segments[0], capacity);
        body.segments.extend(segments[1..].iter().copied());
        body
    }

    pub fn to_vec(&self) -> Vec<Point> {
        self.segments().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_new_body() {
        let body = Body::new(p(40., 40.), 880);
        assert_eq!(body.len(), 1);
        assert_eq!(body.head(), p(40., 40.));
        assert_eq!(body.capacity(), 880);
        assert!(!body.is_full());
    }

    #[test]
    fn test_grow_keeps_segments() {
        let mut body = Body::from_segments(&[p(60., 40.), p(40., 40.), p(20., 40.)], 100);
        body.grow(p(80., 40.)).unwrap();
        assert_eq!(body.len(), 4);
        assert_eq!(body.to_vec(), vec![p(80., 40.), p(60., 40.), p(40., 40.), p(20., 40.)]);
    }

    #[test]
    fn test_grow_refused_at_capacity() {
        let mut body = Body::from_segments(&[p(20., 0.), p(0., 0.)], 2);
        assert!(body.is_full());
        assert_eq!(body.grow(p(40., 0.)), Err(BoardFull { capacity: 2 }));
        assert_eq!(body.to_vec(), vec![p(20., 0.), p(0., 0.)]);
    }

    #[test]
    fn test_step_same_cell_is_noop() {
        let mut body = Body::from_segments(&[p(60., 40.), p(40., 40.)], 100);
        for _ in 0..3 {
            assert!(!body.step_advance_or_collide(p(60., 40.)));
        }
        assert_eq!(body.to_vec(), vec![p(60., 40.), p(40., 40.)]);
    }

    #[test]
    fn test_step_shifts_towards_head() {
        let mut body = Body::from_segments(&[p(60., 40.), p(40., 40.), p(20., 40.)], 100);
        assert!(!body.step_advance_or_collide(p(80., 40.)));
        assert_eq!(body.to_vec(), vec![p(80., 40.), p(60., 40.), p(40., 40.)]);

        assert!(!body.step_advance_or_collide(p(80., 60.)));
        assert_eq!(body.to_vec(), vec![p(80., 60.), p(80., 40.), p(60., 40.)]);
    }

    #[test]
    fn test_step_single_segment() {
        let mut body = Body::new(p(40., 40.), 100);
        assert!(!body.step_advance_or_collide(p(60., 40.)));
        assert_eq!(body.to_vec(), vec![p(60., 40.)]);
    }

    #[test]
    fn test_collision_leaves_body_untouched() {
        let segments = [p(60., 40.), p(40., 40.), p(20., 40.)];
        for hit in [p(40., 40.), p(20., 40.)] {
            let mut body = Body::from_segments(&segments, 100);
            assert!(body.step_advance_or_collide(hit));
            assert_eq!(body.to_vec(), segments.to_vec());
        }
    }

    #[test]
    fn test_collides_iff_on_body() {
        let segments = [p(40., 40.), p(40., 60.), p(20., 60.), p(20., 40.)];
        for candidate in [p(40., 20.), p(60., 40.), p(20., 40.), p(40., 60.), p(20., 60.)] {
            let mut body = Body::from_segments(&segments, 100);
            let expected = segments[1..].contains(&candidate);
            assert_eq!(body.step_advance_or_collide(candidate), expected, "{:?}", candidate);
        }
    }

    #[test]
    fn test_cells_restartable() {
        let body = Body::from_segments(&[p(60., 40.), p(40., 40.)], 100);
        let cell = Point::square(20.);
        let first: Vec<_> = body.cells(cell).collect();
        let second: Vec<_> = body.cells(cell).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![(p(60., 40.), cell), (p(40., 40.), cell)]);
    }
}
