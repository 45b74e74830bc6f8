//! Core types for Xiangqi.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`PieceKind`], [`Piece`] and [`PieceId`] for piece representation
//! - [`Side`] for the two players
//! - [`Square`] for board coordinates
//! - [`Move`] for move representation

mod mov;
mod piece;
mod side;
mod square;

pub use mov::Move;
pub use piece::{Piece, PieceId, PieceKind};
pub use side::Side;
pub use square::{Square, BOARD_HEIGHT, BOARD_WIDTH};
