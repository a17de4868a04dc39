use rand::Rng;

use crate::basic::{Board, Point};
use crate::snake::Body;

pub mod spawn;

/// Where a new apple may appear
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Placement {
    /// Any free cell, never under the snake
    AvoidSnake,
    /// Any cell at all, the apple can end up under the snake
    Anywhere,
}

impl Placement {
    /// None means there is no cell left to put the apple in
    pub fn place(self, board: Board, body: &Body, rng: &mut impl Rng) -> Option<Point> {
        match self {
            Placement::AvoidSnake => spawn::random_free_cell(board, body, rng),
            Placement::Anywhere => Some(spawn::random_cell(board.dim, board.cell, rng)),
        }
    }
}
