//! Lookup grid derived from a [`PieceSet`].
//!
//! The grid is a snapshot: it is rebuilt from the piece set whenever the
//! position changes and is never cached across mutations.

use crate::PieceSet;
use std::fmt;
use xiangqi_core::{Piece, PieceKind, Side, Square, BOARD_HEIGHT, BOARD_WIDTH};

/// A 10x9 grid holding a copy of the live piece on each cell.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Piece>; Square::COUNT],
}

impl Grid {
    /// An empty grid.
    pub const EMPTY: Grid = Grid {
        cells: [None; Square::COUNT],
    };

    /// Projects every live piece of `pieces` into its cell.
    pub fn build(pieces: &PieceSet) -> Self {
        let mut grid = Grid::EMPTY;
        for piece in pieces.alive() {
            debug_assert!(
                grid.cells[piece.square.index()].is_none(),
                "two live pieces on {}",
                piece.square
            );
            grid.cells[piece.square.index()] = Some(*piece);
        }
        grid
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.cells[sq.index()].as_ref()
    }

    /// Returns true if `sq` is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Counts the pieces strictly between two squares on a shared rank or file.
    ///
    /// Returns 0 for squares that are not aligned.
    pub fn count_between(&self, a: Square, b: Square) -> usize {
        let (ax, ay, bx, by) = (a.x() as i32, a.y() as i32, b.x() as i32, b.y() as i32);
        if ax != bx && ay != by {
            return 0;
        }
        let (dx, dy) = ((bx - ax).signum(), (by - ay).signum());
        let steps = (bx - ax).abs().max((by - ay).abs());
        (1..steps)
            .filter_map(|i| a.offset(dx * i, dy * i))
            .filter(|sq| self.is_occupied(*sq))
            .count()
    }

    /// Returns the square of `side`'s general, if it is on the grid.
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.cells
            .iter()
            .flatten()
            .find(|p| p.kind == PieceKind::General && p.side == side)
            .map(|p| p.square)
    }

    /// Iterates over the pieces on the grid in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().flatten()
    }

    /// Returns a copy of this grid with the piece on `from` moved to `to`.
    ///
    /// Whatever stood on `to` is dropped from the copy. The receiver is
    /// untouched, which is what the legality filter relies on.
    pub fn with_move(&self, from: Square, to: Square) -> Grid {
        let mut grid = *self;
        if let Some(mut piece) = grid.cells[from.index()].take() {
            piece.square = to;
            grid.cells[to.index()] = Some(piece);
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::EMPTY
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(\n{})", self)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let c = Square::new(x as i32, y as i32)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |p| p.to_char());
                write!(f, "{}", c)?;
                if x + 1 < BOARD_WIDTH {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
            if y == 4 {
                writeln!(f, "~ ~ ~ ~ ~ ~ ~ ~ ~")?;
            }
        }
        Ok(())
    }
}
