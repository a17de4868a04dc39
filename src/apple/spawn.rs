use itertools::iproduct;
use rand::Rng;

use crate::basic::{quantize, Board, Point};
use crate::snake::Body;

/// Uniform pixel position in `[0, bounds)`, snapped to the grid.
/// Makes no attempt to avoid the snake.
pub fn random_cell(bounds: Point, cell: Point, rng: &mut impl Rng) -> Point {
    let pos = Point {
        x: rng.gen_range(0..bounds.x as u32) as f32,
        y: rng.gen_range(0..bounds.y as u32) as f32,
    };
    quantize(pos, cell)
}

/// Uniform choice among the cells not covered by `body`,
/// None if there are no such cells left
pub fn random_free_cell(board: Board, body: &Body, rng: &mut impl Rng) -> Option<Point> {
    let columns = board.columns();
    let mut occupied = vec![false; board.max_cells()];
    let mut occupied_count = 0;
    for seg in body.segments() {
        let column = (seg.x / board.cell.x) as usize;
        let row = (seg.y / board.cell.y) as usize;
        if let Some(slot) = occupied.get_mut(row * columns + column) {
            if !*slot {
                *slot = true;
                occupied_count += 1;
            }
        }
    }

    let free_cells = board.max_cells() - occupied_count;
    if free_cells == 0 {
        return None;
    }

    let nth = rng.gen_range(0..free_cells);
    iproduct!(0..board.rows(), 0..columns)
        .filter(|&(row, column)| !occupied[row * columns + column])
        .nth(nth)
        .map(|(row, column)| board.cell_origin(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::grid::is_aligned;
    use rand::{rngs::StdRng, SeedableRng};

    const CELL: Point = Point::square(20.);

    #[test]
    fn test_random_cell_aligned_and_in_bounds() {
        let bounds = Point::new(800., 440.);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let pos = random_cell(bounds, CELL, &mut rng);
            assert!(is_aligned(pos, CELL), "{:?}", pos);
            assert!(pos.x >= 0. && pos.x < bounds.x);
            assert!(pos.y >= 0. && pos.y < bounds.y);
        }
    }

    #[test]
    fn test_random_free_cell_avoids_body() {
        let board = Board { dim: Point::new(60., 40.), cell: CELL };
        let body = Body::from_segments(
            &[
                Point::new(0., 0.),
                Point::new(20., 0.),
                Point::new(40., 0.),
                Point::new(40., 20.),
            ],
            board.max_cells(),
        );
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let pos = random_free_cell(board, &body, &mut rng).unwrap();
            assert!(pos == Point::new(0., 20.) || pos == Point::new(20., 20.), "{:?}", pos);
        }
    }

    #[test]
    fn test_random_free_cell_last_cell() {
        let board = Board { dim: Point::new(40., 20.), cell: CELL };
        let body = Body::new(Point::new(20., 0.), board.max_cells());
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_free_cell(board, &body, &mut rng), Some(Point::new(0., 0.)));
    }

    #[test]
    fn test_random_free_cell_full_board() {
        let board = Board { dim: Point::new(40., 20.), cell: CELL };
        let body = Body::from_segments(&[Point::new(20., 0.), Point::new(0., 0.)], board.max_cells());
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_free_cell(board, &body, &mut rng), None);
    }
}
