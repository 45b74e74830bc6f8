//! Standard Xiangqi rules implementation.

use super::{GameResult, RuleSet, WinReason};
use crate::movegen::{
    execute_move, general_captured, generate_legal_moves, is_in_check, is_legal_move, undo_move,
};
use crate::{Grid, PieceSet};
use xiangqi_core::{Move, Side};

/// Standard Xiangqi rules.
///
/// - Palace, river, eye and leg restrictions
/// - Cannon screens
/// - Generals may never face each other on an open file
/// - A side with no legal move loses, in check or not
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardXiangqi;

impl RuleSet for StandardXiangqi {
    fn initial_position(&self) -> PieceSet {
        PieceSet::initial()
    }

    fn generate_moves(&self, pieces: &PieceSet, side: Side) -> Vec<Move> {
        generate_legal_moves(pieces, side)
    }

    fn is_legal(&self, pieces: &PieceSet, m: &Move) -> bool {
        let Some(mover) = pieces.get(m.piece_id()) else {
            return false;
        };
        if mover.square != m.from || mover.side != m.piece.side {
            return false;
        }
        // The recorded capture must match what actually stands on `to`.
        let captured = pieces.piece_at(m.to).map(|p| p.id);
        captured == m.captured_id() && is_legal_move(pieces, m.piece_id(), m.to)
    }

    fn make_move(&self, pieces: &mut PieceSet, m: &Move) {
        execute_move(pieces, m);
    }

    fn unmake_move(&self, pieces: &mut PieceSet, m: &Move) {
        undo_move(pieces, m);
    }

    fn is_check(&self, pieces: &PieceSet, side: Side) -> bool {
        is_in_check(&Grid::build(pieces), side)
    }

    fn game_result(&self, pieces: &PieceSet, side_to_move: Side) -> Option<GameResult> {
        if let Some(loser) = general_captured(pieces) {
            return Some(GameResult::Win {
                winner: loser.opposite(),
                reason: WinReason::GeneralCaptured,
            });
        }

        if !generate_legal_moves(pieces, side_to_move).is_empty() {
            return None;
        }

        let reason = if self.is_check(pieces, side_to_move) {
            WinReason::Checkmate
        } else {
            WinReason::Stalemate
        };
        Some(GameResult::Win {
            winner: side_to_move.opposite(),
            reason,
        })
    }
}
