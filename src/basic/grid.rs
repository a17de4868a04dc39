use crate::basic::Point;

/// Top-left corner of the cell containing `pos`
pub fn quantize(pos: Point, cell: Point) -> Point {
    Point {
        x: (pos.x / cell.x).trunc() * cell.x,
        y: (pos.y / cell.y).trunc() * cell.y,
    }
}

#[cfg(test)]
pub fn is_aligned(pos: Point, cell: Point) -> bool {
    quantize(pos, cell) == pos
}

/// Pixel dimensions of the playing field and of a single cell,
/// `dim` is expected to be a whole multiple of `cell` (see `Prefs::validate`)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Board {
    pub dim: Point,
    pub cell: Point,
}

impl Board {
    pub fn columns(self) -> usize {
        (self.dim.x / self.cell.x) as usize
    }

    pub fn rows(self) -> usize {
        (self.dim.y / self.cell.y) as usize
    }

    /// The maximum number of non-overlapping cells the board can hold
    pub fn max_cells(self) -> usize {
        self.columns() * self.rows()
    }

    pub fn cell_origin(self, column: usize, row: usize) -> Point {
        Point {
            x: column as f32 * self.cell.x,
            y: row as f32 * self.cell.y,
        }
    }

    /// The cell under the middle of the board
    pub fn center_cell(self) -> Point {
        quantize(self.dim / 2. - self.cell / 2., self.cell)
    }
}
