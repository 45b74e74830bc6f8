//! Search scores.

use std::cmp::Ordering;
use std::fmt;

/// The value of a searched position from the searching side's point of view.
///
/// Scores order the way the classic sentinel numbers do: a forced win is
/// worth `MATE` minus the plies it takes, a stalemate `STALEMATE`, and
/// everything else its centipawn evaluation. Faster wins and slower losses
/// are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Score {
    /// The searching side is mated this many plies from the root.
    Loss(u32),
    /// The searching side is left without a move while not in check.
    StalemateLoss,
    /// Static evaluation.
    Centipawns(i32),
    /// The opponent is left without a move while not in check.
    StalemateWin,
    /// The opponent is mated this many plies from the root.
    Win(u32),
}

impl Score {
    /// Magnitude of a mate score before the ply adjustment.
    pub const MATE: i32 = 99_999;

    /// Magnitude of a stalemate score.
    pub const STALEMATE: i32 = 50_000;

    /// Returns the numeric value this score sorts by.
    pub const fn value(self) -> i32 {
        match self {
            Score::Loss(plies) => -Self::MATE + plies as i32,
            Score::StalemateLoss => -Self::STALEMATE,
            Score::Centipawns(cp) => cp,
            Score::StalemateWin => Self::STALEMATE,
            Score::Win(plies) => Self::MATE - plies as i32,
        }
    }

    /// Returns true for a forced mate either way.
    pub const fn is_mate(self) -> bool {
        matches!(self, Score::Win(_) | Score::Loss(_))
    }

    const fn rank(self) -> u8 {
        match self {
            Score::Loss(_) => 0,
            Score::StalemateLoss => 1,
            Score::Centipawns(_) => 2,
            Score::StalemateWin => 3,
            Score::Win(_) => 4,
        }
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value()
            .cmp(&other.value())
            .then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Loss(plies) => write!(f, "mated in {}", plies),
            Score::StalemateLoss => write!(f, "stalemated"),
            Score::Centipawns(cp) => write!(f, "cp {}", cp),
            Score::StalemateWin => write!(f, "stalemates"),
            Score::Win(plies) => write!(f, "mates in {}", plies),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_sentinels() {
        let mut scores = vec![
            Score::Win(3),
            Score::Centipawns(-400),
            Score::StalemateLoss,
            Score::Loss(2),
            Score::Win(1),
            Score::StalemateWin,
            Score::Loss(4),
            Score::Centipawns(12000),
        ];
        scores.sort();
        assert_eq!(
            scores,
            vec![
                Score::Loss(2),
                Score::Loss(4),
                Score::StalemateLoss,
                Score::Centipawns(-400),
                Score::Centipawns(12000),
                Score::StalemateWin,
                Score::Win(3),
                Score::Win(1),
            ]
        );
    }

    #[test]
    fn values() {
        assert_eq!(Score::Win(1).value(), 99_998);
        assert_eq!(Score::Loss(2).value(), -99_997);
        assert_eq!(Score::StalemateWin.value(), 50_000);
        assert_eq!(Score::Centipawns(-7).value(), -7);
        assert!(Score::Loss(0).is_mate());
        assert!(!Score::StalemateWin.is_mate());
    }

    #[test]
    fn display() {
        assert_eq!(Score::Win(1).to_string(), "mates in 1");
        assert_eq!(Score::Centipawns(35).to_string(), "cp 35");
    }
}
