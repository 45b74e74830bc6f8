//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.

use super::{execute_move, generate_legal_moves, undo_move};
use crate::PieceSet;
use xiangqi_core::Side;

/// Counts the number of leaf nodes at the given depth with `side` to move.
///
/// The set is mutated in place and restored before returning.
pub fn perft(pieces: &mut PieceSet, side: Side, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(pieces, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        execute_move(pieces, m);
        nodes += perft(pieces, side.opposite(), depth - 1);
        undo_move(pieces, m);
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(pieces: &mut PieceSet, side: Side, depth: u32) -> Vec<(String, u64)> {
    let moves = generate_legal_moves(pieces, side);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        execute_move(pieces, m);
        let nodes = if depth > 1 {
            perft(pieces, side.opposite(), depth - 1)
        } else {
            1
        };
        undo_move(pieces, m);
        results.push((m.to_string(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
