//! The piece arena.

use thiserror::Error;
use xiangqi_core::{Piece, PieceId, PieceKind, Side, Square};

/// Errors that can occur when building a custom position.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("too many pieces: {0} (at most {max})", max = PieceSet::MAX_PIECES)]
    TooManyPieces(usize),

    #[error("square {0} is occupied twice")]
    SquareOccupied(Square),

    #[error("{0} has more than one general")]
    DuplicateGeneral(Side),
}

/// Back-rank layout from file 0 to file 8.
const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Chariot,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Advisor,
    PieceKind::General,
    PieceKind::Advisor,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Chariot,
];

/// The full collection of pieces in a game, live and captured.
///
/// Pieces live in a fixed arena indexed by [`PieceId`]. The arena never grows
/// or shrinks after construction: a capture only clears the `alive` flag, so
/// every [`Move`](xiangqi_core::Move) can be undone without reallocating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSet {
    pieces: Vec<Piece>,
}

impl PieceSet {
    /// Arena capacity: the 32 pieces of a full game.
    pub const MAX_PIECES: usize = 32;

    /// Creates an empty set.
    pub fn empty() -> Self {
        PieceSet { pieces: Vec::new() }
    }

    /// Creates the traditional starting layout.
    ///
    /// Black's pieces get ids 0-15, Red's 16-31. Within a side the order is
    /// back rank (file 0 to 8), the two cannons, then the five soldiers.
    pub fn initial() -> Self {
        let mut pieces = Vec::with_capacity(Self::MAX_PIECES);
        for side in [Side::Black, Side::Red] {
            let back = side.back_rank() as i32;
            let forward = side.forward() as i32;
            let mut place = |kind: PieceKind, x: i32, y: i32| {
                if let Some(square) = Square::new(x, y) {
                    let id = PieceId(pieces.len() as u8);
                    pieces.push(Piece::new(id, kind, side, square));
                }
            };

            for (x, kind) in BACK_RANK.iter().enumerate() {
                place(*kind, x as i32, back);
            }
            for x in [1, 7] {
                place(PieceKind::Cannon, x, back + 2 * forward);
            }
            for x in (0..9).step_by(2) {
                place(PieceKind::Soldier, x, back + 3 * forward);
            }
        }
        PieceSet { pieces }
    }

    /// Builds a position from `(kind, side, square)` placements.
    ///
    /// Ids are assigned in input order.
    pub fn from_placements<I>(placements: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = (PieceKind, Side, Square)>,
    {
        let placements: Vec<_> = placements.into_iter().collect();
        if placements.len() > Self::MAX_PIECES {
            return Err(SetupError::TooManyPieces(placements.len()));
        }

        let mut pieces: Vec<Piece> = Vec::with_capacity(placements.len());
        for (kind, side, square) in placements {
            if pieces.iter().any(|p| p.square == square) {
                return Err(SetupError::SquareOccupied(square));
            }
            if kind == PieceKind::General
                && pieces
                    .iter()
                    .any(|p| p.kind == PieceKind::General && p.side == side)
            {
                return Err(SetupError::DuplicateGeneral(side));
            }
            let id = PieceId(pieces.len() as u8);
            pieces.push(Piece::new(id, kind, side, square));
        }
        Ok(PieceSet { pieces })
    }

    /// Returns the number of pieces in the arena, captured ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns true if the arena holds no pieces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Returns the piece with the given id.
    #[inline]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Returns the piece with the given id, mutably.
    #[inline]
    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.index())
    }

    /// Iterates over every piece, captured ones included, in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Iterates over the live pieces in id order.
    pub fn alive(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.alive)
    }

    /// Iterates over the live pieces of one side in id order.
    pub fn side(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.alive().filter(move |p| p.side == side)
    }

    /// Returns the live piece standing on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.alive().find(|p| p.square == square)
    }

    /// Returns the live general of `side`, or `None` once it has been captured.
    pub fn find_king(&self, side: Side) -> Option<&Piece> {
        self.side(side).find(|p| p.kind == PieceKind::General)
    }

    /// Returns an independent copy of the whole collection.
    ///
    /// The search does not use this; it mutates one set in place.
    pub fn snapshot(&self) -> PieceSet {
        self.clone()
    }
}

impl Default for PieceSet {
    fn default() -> Self {
        Self::initial()
    }
}
