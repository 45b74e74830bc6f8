//! Static position evaluation: material plus piece-square bonuses.

use xiangqi_core::{Piece, PieceKind, Side};
use xiangqi_engine::PieceSet;

/// Piece values in centipawns
const GENERAL_VALUE: i32 = 10000;
const CHARIOT_VALUE: i32 = 900;
const CANNON_VALUE: i32 = 450;
const HORSE_VALUE: i32 = 400;
const ELEPHANT_VALUE: i32 = 200;
const ADVISOR_VALUE: i32 = 200;
const SOLDIER_VALUE: i32 = 100;

/// Red soldier bonus, indexed `[y][x]`. Only crossed soldiers score.
const SOLDIER_PST_RED: [[i32; 9]; 10] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [90, 90, 110, 120, 120, 120, 110, 90, 90],
    [90, 90, 110, 120, 120, 120, 110, 90, 90],
    [70, 90, 110, 110, 110, 110, 110, 90, 70],
    [70, 70, 70, 70, 70, 70, 70, 70, 70],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// Horse bonus, indexed `[y][x]`, shared by both sides.
const HORSE_PST: [[i32; 9]; 10] = [
    [40, 50, 60, 60, 60, 60, 60, 50, 40],
    [50, 60, 70, 70, 70, 70, 70, 60, 50],
    [60, 70, 80, 80, 80, 80, 80, 70, 60],
    [60, 70, 80, 90, 90, 90, 80, 70, 60],
    [60, 70, 80, 90, 90, 90, 80, 70, 60],
    [60, 70, 80, 90, 90, 90, 80, 70, 60],
    [60, 70, 80, 80, 80, 80, 80, 70, 60],
    [50, 60, 70, 70, 70, 70, 70, 60, 50],
    [40, 50, 60, 60, 60, 60, 60, 50, 40],
    [40, 40, 50, 50, 50, 50, 50, 40, 40],
];

/// Returns the material value of a piece kind in centipawns.
pub const fn material_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::General => GENERAL_VALUE,
        PieceKind::Chariot => CHARIOT_VALUE,
        PieceKind::Cannon => CANNON_VALUE,
        PieceKind::Horse => HORSE_VALUE,
        PieceKind::Elephant => ELEPHANT_VALUE,
        PieceKind::Advisor => ADVISOR_VALUE,
        PieceKind::Soldier => SOLDIER_VALUE,
    }
}

/// Piece-square bonus for soldiers and horses; zero for everything else.
fn positional_bonus(piece: &Piece) -> i32 {
    let (x, y) = (piece.square.x() as usize, piece.square.y() as usize);
    match (piece.kind, piece.side) {
        (PieceKind::Soldier, Side::Red) => SOLDIER_PST_RED[y][x],
        // Black's table is Red's turned half a circle.
        (PieceKind::Soldier, Side::Black) => SOLDIER_PST_RED[9 - y][8 - x],
        (PieceKind::Horse, _) => HORSE_PST[y][x],
        _ => 0,
    }
}

/// Evaluates the position from `perspective`'s point of view.
///
/// Sums material plus positional bonus over the live pieces, positive for
/// `perspective` and negative for the opponent.
pub fn evaluate(pieces: &PieceSet, perspective: Side) -> i32 {
    pieces
        .alive()
        .map(|p| {
            let value = material_value(p.kind) + positional_bonus(p);
            if p.side == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use xiangqi_core::{PieceId, Square};

    fn sq(x: i32, y: i32) -> Square {
        Square::new(x, y).unwrap()
    }

    #[test]
    fn initial_position_is_balanced() {
        let pieces = PieceSet::initial();
        assert_eq!(evaluate(&pieces, Side::Red), 0);
        assert_eq!(evaluate(&pieces, Side::Black), 0);
    }

    #[test]
    fn evaluation_is_antisymmetric() {
        let mut pieces = PieceSet::initial();
        let id = pieces.piece_at(sq(0, 0)).map(|p| p.id).unwrap();
        pieces.get_mut(id).unwrap().alive = false;
        let red = evaluate(&pieces, Side::Red);
        assert_eq!(red, CHARIOT_VALUE);
        assert_eq!(evaluate(&pieces, Side::Black), -red);
    }

    #[test]
    fn crossed_soldier_scores_bonus() {
        let pieces = PieceSet::from_placements([
            (PieceKind::Soldier, Side::Red, sq(4, 3)),
            (PieceKind::Soldier, Side::Black, sq(4, 6)),
        ])
        .unwrap();
        assert_eq!(evaluate(&pieces, Side::Red), 0);

        let pieces = PieceSet::from_placements([
            (PieceKind::Soldier, Side::Red, sq(4, 3)),
            (PieceKind::Soldier, Side::Black, sq(4, 2)),
        ])
        .unwrap();
        // Red gets 110 for (4, 3); Black's soldier has not crossed.
        assert_eq!(evaluate(&pieces, Side::Red), 110);
    }

    #[test]
    fn black_soldier_table_is_red_rotated() {
        for y in 0..10usize {
            for x in 0..9usize {
                let red = Piece::new(
                    PieceId(0),
                    PieceKind::Soldier,
                    Side::Red,
                    sq(x as i32, y as i32),
                );
                let black = Piece::new(
                    PieceId(1),
                    PieceKind::Soldier,
                    Side::Black,
                    sq(8 - x as i32, 9 - y as i32),
                );
                assert_eq!(positional_bonus(&red), positional_bonus(&black));
            }
        }
    }

    #[test]
    fn horse_prefers_the_centre() {
        let centre = Piece::new(PieceId(0), PieceKind::Horse, Side::Red, sq(4, 4));
        let corner = Piece::new(PieceId(0), PieceKind::Horse, Side::Red, sq(0, 9));
        assert_eq!(positional_bonus(&centre), 90);
        assert_eq!(positional_bonus(&corner), 40);
    }

    #[test]
    fn material_values() {
        assert_eq!(material_value(PieceKind::General), 10000);
        assert_eq!(material_value(PieceKind::Cannon), 450);
        assert_eq!(material_value(PieceKind::Soldier), 100);
    }
}
