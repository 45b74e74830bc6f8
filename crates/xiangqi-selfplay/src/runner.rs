//! Game loop for self-play.
//!
//! [`SelfPlayRunner`] plays one game from the initial position, asking the
//! rule set after every ply whether the game is over.

use crate::config::SelfPlayConfig;
use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;
use xiangqi_core::{Move, Side};
use xiangqi_engine::{GameResult, PieceSet, RuleSet, StandardXiangqi};
use xiangqi_minimax::{Score, Searcher};

/// Errors that can occur while playing a game.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// The side to move had no move even though the game was not over.
    #[error("{0} has no move but the game is not over")]
    NoMove(Side),
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The rules ended the game.
    Finished(GameResult),
    /// The ply limit was reached first.
    MoveLimit,
}

/// A ply as played, with the search score if the move was searched.
#[derive(Debug, Clone, Copy)]
pub struct PlyRecord {
    pub mv: Move,
    pub score: Option<Score>,
}

/// A completed self-play game.
#[derive(Debug, Clone)]
pub struct SelfPlayGame {
    /// The final position.
    pub pieces: PieceSet,
    /// Every ply in order.
    pub history: Vec<PlyRecord>,
    pub outcome: Outcome,
}

impl SelfPlayGame {
    /// Takes back every move and returns true if that restores the initial
    /// layout exactly.
    pub fn unwind(&mut self) -> bool {
        for record in self.history.iter().rev() {
            StandardXiangqi.unmake_move(&mut self.pieces, &record.mv);
        }
        self.history.clear();
        self.pieces == StandardXiangqi.initial_position()
    }
}

/// Plays the minimax search against itself.
pub struct SelfPlayRunner<R> {
    config: SelfPlayConfig,
    red: Searcher,
    black: Searcher,
    rng: R,
}

impl<R: Rng> SelfPlayRunner<R> {
    pub fn new(config: SelfPlayConfig, rng: R) -> Self {
        SelfPlayRunner {
            red: Searcher::new(config.red),
            black: Searcher::new(config.black),
            config,
            rng,
        }
    }

    /// Plays one game to the end or to the ply limit.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::NoMove`] if move generation and the game result
    /// disagree about whether the side to move can move.
    pub fn play_game(&mut self) -> Result<SelfPlayGame, RunnerError> {
        let mut pieces = StandardXiangqi.initial_position();
        let mut history: Vec<PlyRecord> = Vec::new();
        let mut side = Side::Red;

        let outcome = loop {
            if let Some(result) = StandardXiangqi.game_result(&pieces, side) {
                break Outcome::Finished(result);
            }
            let ply = history.len() as u32;
            if ply >= self.config.max_plies {
                break Outcome::MoveLimit;
            }

            let next = if ply < self.config.random_opening_plies {
                self.random_move(&pieces, side)
            } else {
                self.searched_move(&mut pieces, side)
            };
            let record = next.ok_or(RunnerError::NoMove(side))?;

            match record.score {
                Some(score) => tracing::info!(ply, %side, mv = %record.mv, %score, "move played"),
                None => tracing::info!(ply, %side, mv = %record.mv, "random move played"),
            }

            StandardXiangqi.make_move(&mut pieces, &record.mv);
            history.push(record);
            side = side.opposite();
        };

        match outcome {
            Outcome::Finished(result) => tracing::info!(plies = history.len(), %result, "game over"),
            Outcome::MoveLimit => tracing::info!(plies = history.len(), "ply limit reached"),
        }

        Ok(SelfPlayGame {
            pieces,
            history,
            outcome,
        })
    }

    fn random_move(&mut self, pieces: &PieceSet, side: Side) -> Option<PlyRecord> {
        let moves = StandardXiangqi.generate_moves(pieces, side);
        moves
            .choose(&mut self.rng)
            .map(|&mv| PlyRecord { mv, score: None })
    }

    fn searched_move(&mut self, pieces: &mut PieceSet, side: Side) -> Option<PlyRecord> {
        let searcher = match side {
            Side::Red => &mut self.red,
            Side::Black => &mut self.black,
        };
        searcher.search_root(pieces, side).map(|(mv, score)| PlyRecord {
            mv,
            score: Some(score),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use xiangqi_minimax::SearchConfig;

    fn config(max_plies: u32, random_opening_plies: u32) -> SelfPlayConfig {
        SelfPlayConfig {
            red: SearchConfig::with_depth(1),
            black: SearchConfig::with_depth(1),
            max_plies,
            random_opening_plies,
        }
    }

    #[test]
    fn stops_at_ply_limit() {
        let mut runner = SelfPlayRunner::new(config(6, 0), StdRng::seed_from_u64(1));
        let game = runner.play_game().unwrap();
        assert_eq!(game.outcome, Outcome::MoveLimit);
        assert_eq!(game.history.len(), 6);
        assert!(game.history.iter().all(|r| r.score.is_some()));
    }

    #[test]
    fn zero_ply_limit_plays_nothing() {
        let mut runner = SelfPlayRunner::new(config(0, 0), StdRng::seed_from_u64(1));
        let game = runner.play_game().unwrap();
        assert_eq!(game.outcome, Outcome::MoveLimit);
        assert!(game.history.is_empty());
        assert_eq!(game.pieces, PieceSet::initial());
    }

    #[test]
    fn random_opening_is_reproducible() {
        let play = |seed| {
            let mut runner = SelfPlayRunner::new(config(8, 8), StdRng::seed_from_u64(seed));
            runner.play_game().unwrap()
        };
        let a = play(7);
        let b = play(7);
        let moves = |g: &SelfPlayGame| g.history.iter().map(|r| r.mv).collect::<Vec<_>>();
        assert_eq!(moves(&a), moves(&b));
        assert!(a.history.iter().all(|r| r.score.is_none()));
    }

    #[test]
    fn alternates_sides_starting_with_red() {
        let mut runner = SelfPlayRunner::new(config(4, 2), StdRng::seed_from_u64(3));
        let game = runner.play_game().unwrap();
        let sides: Vec<Side> = game.history.iter().map(|r| r.mv.piece.side).collect();
        assert_eq!(sides, vec![Side::Red, Side::Black, Side::Red, Side::Black]);
    }

    #[test]
    fn unwind_restores_initial_layout() {
        let mut runner = SelfPlayRunner::new(config(20, 10), StdRng::seed_from_u64(42));
        let mut game = runner.play_game().unwrap();
        assert!(game.unwind());
        assert!(game.history.is_empty());
    }
}
