//! Pseudo-legal move rules for every piece kind.
//!
//! A move is pseudo-legal when the piece's movement pattern allows it on the
//! current grid. Whether it leaves the mover's own general exposed is checked
//! separately by the legality filter in [`super`].

use crate::Grid;
use xiangqi_core::{Piece, PieceKind, Square};

/// Orthogonal unit steps.
const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Diagonal unit steps.
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Horse jumps.
const HORSE_JUMPS: [(i32, i32); 8] = [
    (-1, -2),
    (1, -2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
    (-1, 2),
    (1, 2),
];

/// Returns true if `piece` may move to `to` by its movement rules alone.
///
/// Rejects no-op moves and moves onto a piece of the same side. Dead pieces
/// never move.
pub fn is_valid_move(piece: &Piece, to: Square, grid: &Grid) -> bool {
    if !piece.alive || piece.square == to {
        return false;
    }
    let target = grid.piece_at(to);
    if target.is_some_and(|t| t.side == piece.side) {
        return false;
    }

    let from = piece.square;
    let dx = to.x() as i32 - from.x() as i32;
    let dy = to.y() as i32 - from.y() as i32;

    match piece.kind {
        PieceKind::General => general_move(piece, to, dx, dy),
        PieceKind::Advisor => advisor_move(piece, to, dx, dy),
        PieceKind::Elephant => elephant_move(piece, to, dx, dy, grid),
        PieceKind::Horse => horse_move(from, dx, dy, grid),
        PieceKind::Chariot => chariot_move(from, to, grid),
        PieceKind::Cannon => cannon_move(from, to, target.is_some(), grid),
        PieceKind::Soldier => soldier_move(piece, dx, dy),
    }
}

fn general_move(piece: &Piece, to: Square, dx: i32, dy: i32) -> bool {
    dx.abs() + dy.abs() == 1 && to.in_palace(piece.side)
}

fn advisor_move(piece: &Piece, to: Square, dx: i32, dy: i32) -> bool {
    dx.abs() == 1 && dy.abs() == 1 && to.in_palace(piece.side)
}

fn elephant_move(piece: &Piece, to: Square, dx: i32, dy: i32, grid: &Grid) -> bool {
    if dx.abs() != 2 || dy.abs() != 2 {
        return false;
    }
    if !piece.side.owns_rank(to.y()) {
        return false;
    }
    // The elephant's "eye" must be empty.
    piece
        .square
        .offset(dx / 2, dy / 2)
        .is_some_and(|eye| !grid.is_occupied(eye))
}

fn horse_move(from: Square, dx: i32, dy: i32, grid: &Grid) -> bool {
    let leg = match (dx.abs(), dy.abs()) {
        (2, 1) => from.offset(dx / 2, 0),
        (1, 2) => from.offset(0, dy / 2),
        _ => return false,
    };
    leg.is_some_and(|leg| !grid.is_occupied(leg))
}

fn chariot_move(from: Square, to: Square, grid: &Grid) -> bool {
    aligned(from, to) && grid.count_between(from, to) == 0
}

fn cannon_move(from: Square, to: Square, captures: bool, grid: &Grid) -> bool {
    if !aligned(from, to) {
        return false;
    }
    let screens = grid.count_between(from, to);
    if captures {
        screens == 1
    } else {
        screens == 0
    }
}

fn soldier_move(piece: &Piece, dx: i32, dy: i32) -> bool {
    if dx.abs() + dy.abs() != 1 {
        return false;
    }
    let forward = piece.side.forward() as i32;
    if piece.square.across_river(piece.side) {
        dy == forward || dy == 0
    } else {
        dy == forward && dx == 0
    }
}

#[inline]
fn aligned(a: Square, b: Square) -> bool {
    a.x() == b.x() || a.y() == b.y()
}

/// Lists the squares `piece` may move to by its movement rules alone, in
/// row-major order.
pub fn pseudo_legal_destinations(piece: &Piece, grid: &Grid) -> Vec<Square> {
    if !piece.alive {
        return Vec::new();
    }
    let from = piece.square;
    let mut candidates: Vec<Square> = match piece.kind {
        PieceKind::General | PieceKind::Soldier => steps(from, &ORTHOGONAL, 1),
        PieceKind::Advisor => steps(from, &DIAGONAL, 1),
        PieceKind::Elephant => steps(from, &DIAGONAL, 2),
        PieceKind::Horse => steps(from, &HORSE_JUMPS, 1),
        PieceKind::Chariot | PieceKind::Cannon => rays(from),
    };
    candidates.retain(|to| is_valid_move(piece, *to, grid));
    candidates.sort_unstable();
    candidates
}

fn steps(from: Square, deltas: &[(i32, i32)], scale: i32) -> Vec<Square> {
    deltas
        .iter()
        .filter_map(|&(dx, dy)| from.offset(dx * scale, dy * scale))
        .collect()
}

fn rays(from: Square) -> Vec<Square> {
    ORTHOGONAL
        .iter()
        .flat_map(|&(dx, dy)| (1..).map_while(move |i| from.offset(dx * i, dy * i)))
        .collect()
}
