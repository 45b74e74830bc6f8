//! Player side representation.

/// The two sides in Xiangqi.
///
/// Black sets up on ranks 0-3 and Red on ranks 6-9, so Red advances toward
/// rank 0 and Black toward rank 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Red = 0,
    Black = 1,
}

impl Side {
    /// Both sides, Red first.
    pub const ALL: [Side; 2] = [Side::Red, Side::Black];

    /// Returns the opposite side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Returns the index (0 for Red, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the rank delta of one forward step (-1 for Red, +1 for Black).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    /// Returns the back rank for this side (9 for Red, 0 for Black).
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Side::Red => 9,
            Side::Black => 0,
        }
    }

    /// Returns true if rank `y` lies on this side's half of the river.
    #[inline]
    pub const fn owns_rank(self, y: u8) -> bool {
        match self {
            Side::Red => y >= 5,
            Side::Black => y <= 4,
        }
    }

    /// Returns the inclusive rank range of this side's palace.
    #[inline]
    pub const fn palace_ranks(self) -> (u8, u8) {
        match self {
            Side::Red => (7, 9),
            Side::Black => (0, 2),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Black => write!(f, "Black"),
        }
    }
}
