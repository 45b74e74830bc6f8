//! Xiangqi rules engine.
//!
//! This crate provides:
//! - [`PieceSet`] - the arena of all pieces in a game, live and captured
//! - [`Grid`] - a 10x9 lookup grid rebuilt from a piece set on demand
//! - [`RuleSet`] - trait for game-level queries, with [`StandardXiangqi`]
//! - Move validation, legal move generation, and in-place execute/undo
//!
//! # Architecture
//!
//! Pieces have stable identities ([`PieceId`](xiangqi_core::PieceId)) and are
//! never removed from the arena: a capture clears the `alive` flag. That lets
//! the search play and take back moves on one `&mut PieceSet` without cloning.
//! Legality checks only read the set and try each move on a copied [`Grid`].
//!
//! # Example
//!
//! ```
//! use xiangqi_core::Side;
//! use xiangqi_engine::{execute_move, generate_legal_moves, undo_move, PieceSet};
//!
//! let mut pieces = PieceSet::initial();
//! let moves = generate_legal_moves(&pieces, Side::Red);
//! println!("Legal moves from starting position: {}", moves.len());
//!
//! execute_move(&mut pieces, &moves[0]);
//! undo_move(&mut pieces, &moves[0]);
//! assert_eq!(pieces, PieceSet::initial());
//! ```

mod board;
pub mod movegen;
mod pieces;
pub mod rules;

pub use board::Grid;
pub use movegen::{
    execute_move, general_captured, generate_legal_moves, is_checkmate, is_in_check,
    is_legal_move, is_valid_move, kings_facing, legal_destinations, pseudo_legal_destinations,
    undo_move,
};
pub use pieces::{PieceSet, SetupError};
pub use rules::{GameResult, RuleSet, StandardXiangqi, WinReason};
