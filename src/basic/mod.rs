pub use grid::{quantize, Board};
pub use heading::Heading;
pub use point::Point;

pub mod grid;
mod heading;
mod point;

/// Number of game ticks
pub type Ticks = usize;
