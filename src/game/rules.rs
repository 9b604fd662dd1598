//! Movement legality for the four piece kinds.
//!
//! These predicates are pure geometry plus path checking: they do not know
//! about turns or capture rules. Whether the destination may be entered at
//! all (own piece, opposing piece) is the game state's concern.
//!
//! One rule is shared by every kind except the Bike: a one-square step that
//! is not a perfect diagonal is always legal. A perfect-diagonal step is
//! instead governed by the kind's own diagonal rule, so a Helicopter, whose
//! diagonal jump must cover exactly two squares, cannot make a one-square
//! diagonal move.

use super::board::Board;
use super::piece::{Piece, PieceKind};
use super::square::Square;

/// Can `piece` legally travel from `origin` to `destination` on this board?
pub fn can_move(piece: Piece, board: &Board, origin: Square, destination: Square) -> bool {
    let col_delta = origin.col().abs_diff(destination.col());
    let row_delta = origin.row().abs_diff(destination.row());
    // Chebyshev distance: the larger of the two deltas.
    let distance = col_delta.max(row_delta);

    if distance == 0 {
        return false;
    }

    let max = piece.kind.max_distance();

    match piece.kind {
        PieceKind::Helicopter => {
            if col_delta != row_delta {
                // Not a diagonal: only the universal one-square step.
                distance == 1
            } else {
                // A diagonal jump must cover exactly the maximum distance.
                distance == max
            }
        }
        PieceKind::Train => {
            if col_delta != row_delta {
                distance == 1
            } else {
                distance <= max && path_clear(board, origin, destination)
            }
        }
        PieceKind::Bike => distance == 1,
        PieceKind::Car => {
            if col_delta == row_delta {
                // Diagonals only as a one-square step.
                distance == 1
            } else if col_delta != 0 && row_delta != 0 {
                // Imperfect diagonal.
                false
            } else {
                distance <= max && path_clear(board, origin, destination)
            }
        }
    }
}

/// True if every square strictly between `origin` and `destination` is
/// unoccupied. The endpoints themselves are not inspected. Assumes the two
/// squares lie on a common line or diagonal.
fn path_clear(board: &Board, origin: Square, destination: Square) -> bool {
    let dcol = (destination.col() as i8 - origin.col() as i8).signum();
    let drow = (destination.row() as i8 - origin.row() as i8).signum();

    let mut square = origin;
    loop {
        // Stepping along a shared line between two on-board squares cannot
        // leave the board.
        square = match square.offset(dcol, drow) {
            Some(next) => next,
            None => return false,
        };
        if square == destination {
            return true;
        }
        if board.is_occupied(square) {
            return false;
        }
    }
}
