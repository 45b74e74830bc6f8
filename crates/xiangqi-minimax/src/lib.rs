//! Minimax search with alpha-beta pruning for Xiangqi.
//!
//! The search scores positions with a material + piece-square evaluation and
//! recurses to a fixed depth, playing moves in place on one
//! [`PieceSet`](xiangqi_engine::PieceSet).
//!
//! # Example
//!
//! ```
//! use xiangqi_core::Side;
//! use xiangqi_engine::PieceSet;
//! use xiangqi_minimax::find_best_move;
//!
//! let mut pieces = PieceSet::initial();
//! let mv = find_best_move(&mut pieces, Side::Red, 2);
//! assert!(mv.is_some());
//! ```

mod config;
mod evaluation;
mod score;
mod search;

pub use config::SearchConfig;
pub use evaluation::{evaluate, material_value};
pub use score::Score;
pub use search::{find_best_move, order_moves, Searcher};
