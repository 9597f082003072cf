//! Move generation.
//!
//! Lists every move a player could submit successfully from a position.
//! Turn order and game-over state are the caller's concern.

use crate::{Board, Player};
use focus_core::{Coord, Move};

/// Up, down, left, right.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Generates all moves available to `mover` on `board`.
///
/// Stack moves come first, grouped by source square in row-major order,
/// followed by one reserve move per square if the mover has a reserve.
pub fn generate_moves(board: &Board, mover: &Player) -> Vec<Move> {
    let mut moves = Vec::new();

    for from in board.occupied() {
        if board.top(from) != Some(mover.color()) {
            continue;
        }
        for count in 1..=board.height(from) {
            for (d_row, d_col) in DIRECTIONS {
                if let Some(to) = from.offset(d_row, d_col, count) {
                    moves.push(Move::stack(from, to, count));
                }
            }
        }
    }

    if mover.reserve_count() > 0 {
        moves.extend(Coord::all().map(Move::reserve));
    }

    moves
}
