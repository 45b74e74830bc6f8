//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait. Callers that drive a game
//! (the self-play binary, tests) go through it instead of calling the move
//! generator directly, so the game-ending logic lives in one place.

mod standard;

pub use standard::StandardXiangqi;

use crate::PieceSet;
use std::fmt;
use xiangqi_core::{Move, Side};

/// Result of a finished game.
///
/// Xiangqi has no draw by stalemate: a side with no legal move loses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// One side won.
    Win { winner: Side, reason: WinReason },
}

impl GameResult {
    /// Returns the winning side.
    pub const fn winner(&self) -> Side {
        match self {
            GameResult::Win { winner, .. } => *winner,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win { winner, reason } => write!(f, "{} wins by {}", winner, reason),
        }
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The loser is in check and has no legal move.
    Checkmate,
    /// The loser is not in check but has no legal move.
    Stalemate,
    /// The loser's general was taken.
    GeneralCaptured,
}

impl fmt::Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            WinReason::Checkmate => "checkmate",
            WinReason::Stalemate => "stalemate",
            WinReason::GeneralCaptured => "general capture",
        };
        write!(f, "{}", text)
    }
}

/// Trait for implementing Xiangqi rule sets.
///
/// Positions are [`PieceSet`]s mutated in place; the side to move is passed
/// alongside since the set does not track it.
///
/// # Example
///
/// ```
/// use xiangqi_core::Side;
/// use xiangqi_engine::rules::RuleSet;
/// use xiangqi_engine::StandardXiangqi;
///
/// let pieces = StandardXiangqi.initial_position();
/// let moves = StandardXiangqi.generate_moves(&pieces, Side::Red);
/// assert_eq!(moves.len(), 44);
/// ```
pub trait RuleSet {
    /// Returns the initial position for this rule set.
    fn initial_position(&self) -> PieceSet;

    /// Generates all legal moves for `side`.
    fn generate_moves(&self, pieces: &PieceSet, side: Side) -> Vec<Move>;

    /// Returns true if the given move is legal in the position.
    fn is_legal(&self, pieces: &PieceSet, m: &Move) -> bool;

    /// Plays a move in place.
    ///
    /// The move is not checked. Use [`is_legal`](RuleSet::is_legal) first, or
    /// use [`try_make_move`](RuleSet::try_make_move).
    fn make_move(&self, pieces: &mut PieceSet, m: &Move);

    /// Takes back the last move played with [`make_move`](RuleSet::make_move).
    fn unmake_move(&self, pieces: &mut PieceSet, m: &Move);

    /// Plays the move if it is legal. Returns whether it was played.
    fn try_make_move(&self, pieces: &mut PieceSet, m: &Move) -> bool {
        if self.is_legal(pieces, m) {
            self.make_move(pieces, m);
            true
        } else {
            false
        }
    }

    /// Returns true if `side`'s general is in check.
    fn is_check(&self, pieces: &PieceSet, side: Side) -> bool;

    /// Returns the game result if the game is over, otherwise `None`.
    fn game_result(&self, pieces: &PieceSet, side_to_move: Side) -> Option<GameResult>;

    /// Returns true if the game is over.
    fn is_game_over(&self, pieces: &PieceSet, side_to_move: Side) -> bool {
        self.game_result(pieces, side_to_move).is_some()
    }
}
