//! Move representation.

use crate::{Piece, PieceId, Square};
use std::fmt;

/// A Xiangqi move.
///
/// Holds value snapshots of the mover and of the captured piece (if any), so a
/// move stays meaningful after the live piece set has been mutated. The
/// executor only uses the snapshots' ids to find the live pieces again.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The moving piece as it was when the move was created.
    pub piece: Piece,
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// The piece standing on `to` when the move was created, if any.
    pub captured: Option<Piece>,
}

impl Move {
    /// Creates a move of `piece` to `to`, capturing `captured`.
    #[inline]
    pub const fn new(piece: Piece, to: Square, captured: Option<Piece>) -> Self {
        Move {
            piece,
            from: piece.square,
            to,
            captured,
        }
    }

    /// Returns the mover's id.
    #[inline]
    pub const fn piece_id(&self) -> PieceId {
        self.piece.id
    }

    /// Returns the captured piece's id, if any.
    #[inline]
    pub fn captured_id(&self) -> Option<PieceId> {
        self.captured.map(|p| p.id)
    }

    /// Returns true if this move captures.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}-{}",
            self.piece.to_char(),
            self.from,
            self.to
        )?;
        if let Some(captured) = self.captured {
            write!(f, "x{}", captured.to_char())?;
        }
        Ok(())
    }
}
