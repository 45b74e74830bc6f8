use proptest::prelude::*;
use xiangqi_core::{PieceKind, Side, Square};
use xiangqi_engine::{
    execute_move, generate_legal_moves, is_checkmate, is_in_check, Grid, PieceSet,
};
use xiangqi_minimax::{find_best_move, Score, SearchConfig, Searcher};

fn sq(x: i32, y: i32) -> Square {
    Square::new(x, y).unwrap()
}

fn position(placements: &[(PieceKind, Side, (i32, i32))]) -> PieceSet {
    PieceSet::from_placements(
        placements
            .iter()
            .map(|&(kind, side, (x, y))| (kind, side, sq(x, y))),
    )
    .unwrap()
}

/// Red to move; chariot (0, 5) to (0, 0) is the only mate.
fn mate_in_one() -> PieceSet {
    position(&[
        (PieceKind::General, Side::Black, (4, 0)),
        (PieceKind::General, Side::Red, (3, 9)),
        (PieceKind::Chariot, Side::Red, (0, 5)),
        (PieceKind::Chariot, Side::Red, (8, 1)),
    ])
}

/// Red to move; chariot (5, 6) to (5, 5) leaves Black without a move.
fn stalemate_in_one() -> PieceSet {
    position(&[
        (PieceKind::General, Side::Black, (4, 0)),
        (PieceKind::General, Side::Red, (3, 9)),
        (PieceKind::Chariot, Side::Red, (0, 1)),
        (PieceKind::Chariot, Side::Red, (5, 6)),
    ])
}

/// Black to move; after general (3, 1) to (3, 0), Red's chariot (8, 5) to
/// (8, 1) leaves Black without a move. The soldier keeps the chariot off
/// file 3, so Red has no mate.
fn stalemated_after_one() -> PieceSet {
    position(&[
        (PieceKind::General, Side::Black, (3, 1)),
        (PieceKind::General, Side::Red, (4, 9)),
        (PieceKind::Chariot, Side::Red, (8, 5)),
        (PieceKind::Soldier, Side::Red, (7, 5)),
    ])
}

fn searcher(depth: u32, pruning: bool) -> Searcher {
    Searcher::new(SearchConfig { depth, pruning })
}

#[test]
fn plays_mate_in_one() {
    for depth in [2, 3] {
        let mut pieces = mate_in_one();
        let mv = find_best_move(&mut pieces, Side::Red, depth).unwrap();
        assert_eq!((mv.from, mv.to), (sq(0, 5), sq(0, 0)), "depth {depth}");
    }
}

#[test]
fn mating_move_outscores_every_other_move() {
    let mut pieces = mate_in_one();
    let scored = searcher(2, true).score_root_moves(&mut pieces, Side::Red);
    let (mate, others): (Vec<_>, Vec<_>) = scored
        .into_iter()
        .partition(|(mv, _)| mv.from == sq(0, 5) && mv.to == sq(0, 0));

    assert_eq!(mate.len(), 1);
    assert_eq!(mate[0].1, Score::Win(1));
    assert!(!others.is_empty());
    for (mv, score) in others {
        assert!(score < Score::Win(1), "{mv} scored {score}");
    }
}

#[test]
fn mated_side_has_no_move() {
    let mut pieces = mate_in_one();
    let mv = find_best_move(&mut pieces, Side::Red, 2).unwrap();
    execute_move(&mut pieces, &mv);

    assert!(is_checkmate(&pieces, Side::Black));
    assert_eq!(find_best_move(&mut pieces, Side::Black, 3), None);
    assert_eq!(searcher(3, true).search_root(&mut pieces, Side::Black), None);
}

#[test]
fn stalemate_score_does_not_depend_on_depth() {
    for depth in [2, 3, 4] {
        let mut pieces = stalemate_in_one();
        let scored = searcher(depth, true).score_root_moves(&mut pieces, Side::Red);
        let score = scored
            .iter()
            .find(|(mv, _)| mv.from == sq(5, 6) && mv.to == sq(5, 5))
            .map(|(_, score)| *score);
        assert_eq!(score, Some(Score::StalemateWin), "depth {depth}");
    }
}

#[test]
fn stalemated_side_sees_a_loss() {
    let mut pieces = stalemate_in_one();
    let mv = generate_legal_moves(&pieces, Side::Red)
        .into_iter()
        .find(|mv| mv.from == sq(5, 6) && mv.to == sq(5, 5))
        .unwrap();
    execute_move(&mut pieces, &mv);

    assert!(is_checkmate(&pieces, Side::Black));
    assert_eq!(find_best_move(&mut pieces, Side::Black, 3), None);
}

#[test]
fn walking_into_stalemate_scores_a_loss() {
    for depth in [2, 3] {
        for pruning in [true, false] {
            let mut pieces = stalemated_after_one();
            let scored = searcher(depth, pruning).score_root_moves(&mut pieces, Side::Black);
            let score = scored
                .iter()
                .find(|(mv, _)| mv.from == sq(3, 1) && mv.to == sq(3, 0))
                .map(|(_, score)| *score);
            assert_eq!(score, Some(Score::StalemateLoss), "depth {depth} pruning {pruning}");
        }
    }
}

#[test]
fn stalemating_reply_leaves_black_without_check() {
    let mut pieces = stalemated_after_one();
    for (side, from, to) in [(Side::Black, sq(3, 1), sq(3, 0)), (Side::Red, sq(8, 5), sq(8, 1))] {
        let mv = generate_legal_moves(&pieces, side)
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
            .unwrap();
        execute_move(&mut pieces, &mv);
    }

    assert!(generate_legal_moves(&pieces, Side::Black).is_empty());
    assert!(!is_in_check(&Grid::build(&pieces), Side::Black));
    assert_eq!(searcher(2, true).search_root(&mut pieces, Side::Black), None);
}

#[test]
fn pruning_agrees_with_full_minimax() {
    let cases = [
        (mate_in_one(), Side::Red, 3),
        (stalemate_in_one(), Side::Red, 3),
        (stalemated_after_one(), Side::Black, 3),
        (PieceSet::initial(), Side::Red, 2),
        (PieceSet::initial(), Side::Black, 2),
    ];
    for (pieces, side, depth) in cases {
        let mut a = pieces.snapshot();
        let mut b = pieces.snapshot();
        let mut pruned = searcher(depth, true);
        let mut full = searcher(depth, false);

        assert_eq!(
            pruned.score_root_moves(&mut a, side),
            full.score_root_moves(&mut b, side)
        );
        assert_eq!(
            pruned.search_root(&mut a, side),
            full.search_root(&mut b, side)
        );
        assert!(pruned.nodes() <= full.nodes());
        assert_eq!(a, pieces);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn pruning_agrees_after_random_openings(picks in prop::collection::vec(any::<usize>(), 0..12)) {
        let mut pieces = PieceSet::initial();
        let mut side = Side::Red;
        for pick in picks {
            let moves = generate_legal_moves(&pieces, side);
            if moves.is_empty() {
                break;
            }
            execute_move(&mut pieces, &moves[pick % moves.len()]);
            side = side.opposite();
        }

        let mut a = pieces.snapshot();
        let mut b = pieces.snapshot();
        prop_assert_eq!(
            searcher(2, true).search_root(&mut a, side),
            searcher(2, false).search_root(&mut b, side)
        );
        prop_assert_eq!(a, pieces);
    }
}
