//! Move generation.
//!
//! Pseudo-legal moves come from [`validate`]. This module adds the legality
//! filter (own general not left in check, generals not facing) and the
//! in-place execute/undo pair the search uses.

pub mod perft;
mod validate;

use crate::{Grid, PieceSet};
use xiangqi_core::{Move, Piece, PieceId, PieceKind, Side, Square};

pub use validate::{is_valid_move, pseudo_legal_destinations};

/// Returns true if `side`'s general is attacked on `grid`.
///
/// A side whose general is missing from the grid counts as in check.
pub fn is_in_check(grid: &Grid, side: Side) -> bool {
    let Some(king) = grid.king_square(side) else {
        return true;
    };
    grid.pieces()
        .filter(|p| p.side != side)
        .any(|p| is_valid_move(p, king, grid))
}

/// Returns true if both generals stand on one file with nothing between them.
pub fn kings_facing(grid: &Grid) -> bool {
    match (grid.king_square(Side::Red), grid.king_square(Side::Black)) {
        (Some(red), Some(black)) => red.x() == black.x() && grid.count_between(red, black) == 0,
        _ => false,
    }
}

/// Applies the move on a copy of `grid` and checks the mover's safety.
fn survives(grid: &Grid, piece: &Piece, to: Square) -> bool {
    let trial = grid.with_move(piece.square, to);
    !is_in_check(&trial, piece.side) && !kings_facing(&trial)
}

/// Returns true if the piece `id` may legally move to `to`.
pub fn is_legal_move(pieces: &PieceSet, id: PieceId, to: Square) -> bool {
    let Some(piece) = pieces.get(id).filter(|p| p.alive) else {
        return false;
    };
    let grid = Grid::build(pieces);
    is_valid_move(piece, to, &grid) && survives(&grid, piece, to)
}

fn legal_targets(piece: &Piece, grid: &Grid) -> Vec<Square> {
    let mut targets = pseudo_legal_destinations(piece, grid);
    targets.retain(|to| survives(grid, piece, *to));
    targets
}

/// Lists the legal destinations of piece `id` in row-major order.
///
/// Empty for a captured piece or an unknown id.
pub fn legal_destinations(pieces: &PieceSet, id: PieceId) -> Vec<Square> {
    match pieces.get(id).filter(|p| p.alive) {
        Some(piece) => legal_targets(piece, &Grid::build(pieces)),
        None => Vec::new(),
    }
}

/// Generates all legal moves for `side`.
///
/// Pieces are visited in id order and each piece's destinations in
/// row-major order; callers that break ties by position rely on this.
pub fn generate_legal_moves(pieces: &PieceSet, side: Side) -> Vec<Move> {
    let grid = Grid::build(pieces);
    let mut moves = Vec::new();
    for piece in pieces.side(side) {
        for to in legal_targets(piece, &grid) {
            moves.push(Move::new(*piece, to, grid.piece_at(to).copied()));
        }
    }
    moves
}

/// Returns true if `side` has no legal move.
///
/// This is true for stalemate as well as checkmate; use
/// [`RuleSet::game_result`](crate::rules::RuleSet::game_result) to tell
/// them apart.
pub fn is_checkmate(pieces: &PieceSet, side: Side) -> bool {
    let grid = Grid::build(pieces);
    pieces
        .side(side)
        .all(|piece| legal_targets(piece, &grid).is_empty())
}

/// Plays `mv` on `pieces` in place.
///
/// If the mover is not in the set the whole move is skipped. A victim that
/// is not in the set is skipped on its own.
pub fn execute_move(pieces: &mut PieceSet, mv: &Move) {
    let Some(mover) = pieces.get_mut(mv.piece_id()) else {
        tracing::trace!(id = %mv.piece_id(), "execute: moving piece not in set");
        return;
    };
    mover.square = mv.to;

    if let Some(id) = mv.captured_id() {
        match pieces.get_mut(id) {
            Some(victim) => victim.alive = false,
            None => tracing::trace!(%id, "execute: captured piece not in set"),
        }
    }
}

/// Takes back `mv`, which must be the last move executed on `pieces`.
///
/// Skipped entirely if the mover is not in the set.
pub fn undo_move(pieces: &mut PieceSet, mv: &Move) {
    let Some(mover) = pieces.get_mut(mv.piece_id()) else {
        tracing::trace!(id = %mv.piece_id(), "undo: moving piece not in set");
        return;
    };
    mover.square = mv.from;

    if let Some(captured) = mv.captured {
        match pieces.get_mut(captured.id) {
            Some(victim) => {
                victim.alive = true;
                victim.square = mv.to;
            }
            None => tracing::trace!(id = %captured.id, "undo: captured piece not in set"),
        }
    }
}

/// Returns the side whose general has been captured, if any.
pub fn general_captured(pieces: &PieceSet) -> Option<Side> {
    Side::ALL.into_iter().find(|side| {
        pieces
            .iter()
            .any(|p| p.kind == PieceKind::General && p.side == *side && !p.alive)
    })
}
