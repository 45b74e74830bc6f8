//! Minimax search with alpha-beta pruning.
//!
//! The search plays and takes back moves on a single `&mut PieceSet`. Scores
//! are always from the root side's (the "AI side's") point of view: it
//! maximizes on its own plies and minimizes on the opponent's.

use crate::{evaluate, material_value, Score, SearchConfig};
use std::cmp::Reverse;
use xiangqi_core::{Move, Side};
use xiangqi_engine::{execute_move, generate_legal_moves, is_in_check, undo_move, Grid, PieceSet};

/// Orders moves by captured material, highest first.
///
/// The sort is stable, so equal captures keep generation order.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|m| Reverse(m.captured.map_or(0, |c| material_value(c.kind))));
}

/// Search state
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    nodes: u64,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Searcher { config, nodes: 0 }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn depth(&self) -> u32 {
        self.config.depth.max(1)
    }

    /// Scores every legal root move for `side`, in search order.
    ///
    /// Each move gets a full window, so every score is exact.
    pub fn score_root_moves(&mut self, pieces: &mut PieceSet, side: Side) -> Vec<(Move, Score)> {
        self.nodes = 0;
        let depth = self.depth();

        let mut moves = generate_legal_moves(pieces, side);
        order_moves(&mut moves);

        let mut scored = Vec::with_capacity(moves.len());
        for mv in moves {
            execute_move(pieces, &mv);
            let score = self.minimax(pieces, side, depth - 1, 1, false, None, None);
            undo_move(pieces, &mv);
            tracing::debug!(%mv, %score, "root move");
            scored.push((mv, score));
        }
        scored
    }

    /// Finds the best move for `side` and its score.
    ///
    /// Returns `None` if `side` has no legal move. Ties go to the move
    /// searched first.
    pub fn search_root(&mut self, pieces: &mut PieceSet, side: Side) -> Option<(Move, Score)> {
        let mut best: Option<(Move, Score)> = None;
        for (mv, score) in self.score_root_moves(pieces, side) {
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((mv, score));
            }
        }

        if let Some((mv, score)) = best {
            tracing::info!(
                %mv,
                %score,
                depth = self.depth(),
                nodes = self.nodes,
                "search complete"
            );
        }
        best
    }

    /// Alpha-beta search
    ///
    /// `None` bounds stand for minus and plus infinity.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        pieces: &mut PieceSet,
        ai_side: Side,
        depth: u32,
        ply: u32,
        maximizing: bool,
        mut alpha: Option<Score>,
        mut beta: Option<Score>,
    ) -> Score {
        self.nodes += 1;

        if depth == 0 {
            return Score::Centipawns(evaluate(pieces, ai_side));
        }

        let to_move = if maximizing { ai_side } else { ai_side.opposite() };
        let mut moves = generate_legal_moves(pieces, to_move);

        // No legal move: mate if in check, stalemate otherwise. Either way the
        // side to move loses.
        if moves.is_empty() {
            let in_check = is_in_check(&Grid::build(pieces), to_move);
            return match (in_check, maximizing) {
                (true, true) => Score::Loss(ply),
                (true, false) => Score::Win(ply),
                (false, true) => Score::StalemateLoss,
                (false, false) => Score::StalemateWin,
            };
        }

        order_moves(&mut moves);

        let mut best: Option<Score> = None;
        for mv in &moves {
            execute_move(pieces, mv);
            let score = self.minimax(
                pieces,
                ai_side,
                depth - 1,
                ply + 1,
                !maximizing,
                alpha,
                beta,
            );
            undo_move(pieces, mv);

            if maximizing {
                best = Some(best.map_or(score, |b| b.max(score)));
                alpha = Some(alpha.map_or(score, |a| a.max(score)));
            } else {
                best = Some(best.map_or(score, |b| b.min(score)));
                beta = Some(beta.map_or(score, |b| b.min(score)));
            }

            if self.config.pruning && matches!((alpha, beta), (Some(a), Some(b)) if b <= a) {
                break;
            }
        }

        // `moves` is not empty, so `best` is set.
        best.unwrap_or(Score::Centipawns(0))
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Finds the best move for `side` with a pruned search to `depth` plies.
///
/// A depth below 1 is treated as 1. The piece set is restored before
/// returning.
pub fn find_best_move(pieces: &mut PieceSet, side: Side, depth: u32) -> Option<Move> {
    Searcher::new(SearchConfig::with_depth(depth))
        .search_root(pieces, side)
        .map(|(mv, _)| mv)
}
