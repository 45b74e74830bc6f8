//! Board square representation.

use crate::Side;
use std::fmt;

/// Number of files (columns) on the board.
pub const BOARD_WIDTH: u8 = 9;

/// Number of ranks (rows) on the board.
pub const BOARD_HEIGHT: u8 = 10;

/// A point on the 9x10 Xiangqi board.
///
/// `x` is the file (0-8) and `y` the rank (0-9), with Black's back rank at
/// `y = 0`. A `Square` can only be constructed on the board, so every value
/// in circulation is in bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    // Field order gives row-major `Ord`.
    y: u8,
    x: u8,
}

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;

    /// Creates a square, returning `None` off the board.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Option<Self> {
        if x >= 0 && x < BOARD_WIDTH as i32 && y >= 0 && y < BOARD_HEIGHT as i32 {
            Some(Square {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Creates a square from a row-major index (0-89).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Square {
                x: (index % BOARD_WIDTH as usize) as u8,
                y: (index / BOARD_WIDTH as usize) as u8,
            })
        } else {
            None
        }
    }

    /// Returns the file (0-8).
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the rank (0-9).
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index (0-89).
    #[inline]
    pub const fn index(self) -> usize {
        self.y as usize * BOARD_WIDTH as usize + self.x as usize
    }

    /// Returns the square shifted by `(dx, dy)`, or `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Square::new(self.x as i32 + dx, self.y as i32 + dy)
    }

    /// Returns true if this square lies inside the given side's palace.
    #[inline]
    pub const fn in_palace(self, side: Side) -> bool {
        let (lo, hi) = side.palace_ranks();
        self.x >= 3 && self.x <= 5 && self.y >= lo && self.y <= hi
    }

    /// Returns true if a piece of `side` standing here has crossed the river.
    #[inline]
    pub const fn across_river(self, side: Side) -> bool {
        !side.owns_rank(self.y)
    }

    /// Iterates over every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT).filter_map(Square::from_index)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
