//! Grid module - the matrix of locked cells
//!
//! The grid is 10 columns by 20 rows, stored as an array of rows, top row
//! first. Its dimensions never change: clearing a row removes it and inserts
//! an empty row at the top. Coordinates are `(x, y)` with `x` in `0..10`
//! (left to right) and `y` in `0..20` (top to bottom).

use crate::piece::{Matrix, Piece};
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// One row of the grid.
pub type Row = [Cell; WIDTH];

const EMPTY_ROW: Row = [None; WIDTH];

/// Locked cells of the playfield.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: [Row; HEIGHT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            rows: [EMPTY_ROW; HEIGHT],
        }
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    #[inline]
    fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && (x as usize) < WIDTH && y >= 0 && (y as usize) < HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::in_bounds(x, y).then(|| self.rows[y as usize][x as usize])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = cell;
        true
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    pub fn row(&self, y: usize) -> Option<&Row> {
        self.rows.get(y)
    }

    /// All rows, top to bottom. Always `BOARD_HEIGHT` long.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|cell| cell.is_none())
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Would `piece`, shifted by `(offset_x, offset_y)`, collide?
    pub fn collides(&self, piece: &Piece, offset_x: i8, offset_y: i8) -> bool {
        self.collides_with(piece, offset_x, offset_y, &piece.matrix)
    }

    /// Would `matrix`, placed at the piece position shifted by
    /// `(offset_x, offset_y)`, collide?
    ///
    /// A cell collides when it is outside the side walls, at or below the
    /// floor, or on top of a locked cell. Cells above row 0 are allowed so
    /// pieces can hang off the top of the board.
    pub fn collides_with(&self, piece: &Piece, offset_x: i8, offset_y: i8, matrix: &Matrix) -> bool {
        matrix.occupied().any(|(dx, dy)| {
            let x = piece.x as i16 + dx as i16 + offset_x as i16;
            let y = piece.y as i16 + dy as i16 + offset_y as i16;
            if x < 0 || x >= WIDTH as i16 || y >= HEIGHT as i16 {
                return true;
            }
            y >= 0 && self.rows[y as usize][x as usize].is_some()
        })
    }

    /// Write the piece's kind into every cell it covers.
    ///
    /// Cells above the board (or otherwise out of bounds) are dropped.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }
    }

    /// Remove every full row, inserting an empty row at the top for each.
    ///
    /// Scans from the bottom. After a removal the same index is tested
    /// again, because the row above has just shifted into it.
    /// Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = HEIGHT;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.rows[..=row].rotate_right(1);
                self.rows[0] = EMPTY_ROW;
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.rows = [EMPTY_ROW; HEIGHT];
    }

    /// Copy the grid into compact codes (`0` empty, `PieceKind::code` otherwise).
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows.iter()) {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d = s.map_or(0, |kind| kind.code());
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
