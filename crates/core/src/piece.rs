//! Piece module - tetromino shapes, rotation and spawning
//!
//! A piece is an occupancy matrix, a kind (which fixes its color) and the
//! board position of the matrix's top-left corner. Rotation is a plain
//! clockwise transpose of the matrix; whether the rotated matrix fits is the
//! engine's business, not the piece's.

use crate::rng::RandomSource;
use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

/// Largest side length of any matrix handled here.
pub const MAX_MATRIX_SIZE: usize = 4;

/// Rectangular occupancy matrix of at most 4x4 cells.
///
/// Cells outside `width` x `height` are always `false`, so two matrices
/// compare equal exactly when their shape and occupancy agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    cells: [[bool; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE],
    width: u8,
    height: u8,
}

impl Matrix {
    /// Build a matrix from rows of occupancy.
    ///
    /// Returns `None` for empty, ragged or oversized input.
    pub fn from_rows(rows: &[&[bool]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_MATRIX_SIZE || width == 0 || width > MAX_MATRIX_SIZE {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut cells = [[false; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE];
        for (y, row) in rows.iter().enumerate() {
            cells[y][..width].copy_from_slice(row);
        }
        Some(Self {
            cells,
            width: width as u8,
            height: height as u8,
        })
    }

    const fn from_bits(rows: [[u8; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE], width: u8, height: u8) -> Self {
        let mut cells = [[false; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE];
        let mut y = 0;
        while y < MAX_MATRIX_SIZE {
            let mut x = 0;
            while x < MAX_MATRIX_SIZE {
                cells[y][x] = rows[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Occupancy at `(x, y)`; anything outside the matrix reads as empty.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.cells[y][x]
    }

    /// Offsets `(dx, dy)` of every occupied cell, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height as usize).flat_map(move |y| {
            (0..self.width as usize)
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Rotate 90° clockwise: an H x W matrix becomes W x H with
    /// `out[x][H - 1 - y] = in[y][x]`.
    pub fn rotate_cw(&self) -> Self {
        let h = self.height as usize;
        let w = self.width as usize;
        let mut cells = [[false; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE];
        for y in 0..h {
            for x in 0..w {
                cells[x][h - 1 - y] = self.cells[y][x];
            }
        }
        Self {
            cells,
            width: self.height,
            height: self.width,
        }
    }
}

/// Free-function form of [`Matrix::rotate_cw`].
pub fn rotate(matrix: &Matrix) -> Matrix {
    matrix.rotate_cw()
}

const I_MATRIX: Matrix = Matrix::from_bits([[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]], 4, 1);
const J_MATRIX: Matrix = Matrix::from_bits([[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]], 3, 2);
const L_MATRIX: Matrix = Matrix::from_bits([[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]], 3, 2);
const O_MATRIX: Matrix = Matrix::from_bits([[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]], 2, 2);
const S_MATRIX: Matrix = Matrix::from_bits([[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]], 3, 2);
const T_MATRIX: Matrix = Matrix::from_bits([[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]], 3, 2);
const Z_MATRIX: Matrix = Matrix::from_bits([[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]], 3, 2);

/// Spawn orientation of a kind.
pub fn spawn_matrix(kind: PieceKind) -> Matrix {
    match kind {
        PieceKind::I => I_MATRIX,
        PieceKind::J => J_MATRIX,
        PieceKind::L => L_MATRIX,
        PieceKind::O => O_MATRIX,
        PieceKind::S => S_MATRIX,
        PieceKind::T => T_MATRIX,
        PieceKind::Z => Z_MATRIX,
    }
}

/// The active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: Matrix,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A piece of `kind` in spawn orientation at the spawn position.
    ///
    /// The spawn column does not depend on the shape's width, so narrow
    /// shapes sit left of center.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            matrix: spawn_matrix(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Absolute board coordinates of every occupied cell.
    ///
    /// Cells whose coordinates would leave the `i8` range are skipped.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix
            .occupied()
            .filter_map(move |(dx, dy)| {
                Some((self.x.checked_add(dx)?, self.y.checked_add(dy)?))
            })
    }
}

/// Draw a kind uniformly from the seven shapes and spawn it.
pub fn pick_piece<R: RandomSource + ?Sized>(rng: &mut R) -> Piece {
    let index = rng.next_index(PieceKind::ALL.len());
    let kind = PieceKind::from_index(index).unwrap_or(PieceKind::I);
    Piece::spawn(kind)
}
