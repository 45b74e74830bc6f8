//! Search configuration.

use serde::{Deserialize, Serialize};

/// Settings for one [`Searcher`](crate::Searcher).
///
/// Every field has a default, so a partial TOML table is enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search depth in plies. Values below 1 are treated as 1.
    pub depth: u32,
    /// Use alpha-beta cutoffs. Turning this off gives a plain minimax with
    /// the same result, only slower.
    pub pruning: bool,
}

impl SearchConfig {
    /// The default search depth.
    pub const DEFAULT_DEPTH: u32 = 3;

    /// A pruned search to the given depth.
    pub const fn with_depth(depth: u32) -> Self {
        SearchConfig {
            depth,
            pruning: true,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::with_depth(Self::DEFAULT_DEPTH)
    }
}
