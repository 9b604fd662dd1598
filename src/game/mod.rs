//! Core game logic: squares, pieces, movement rules, board representation,
//! and the turn/state manager. No I/O and no presentation concerns.

mod board;
mod piece;
pub mod rules;
mod square;
mod state;

pub use board::Board;
pub use piece::{Axis, Color, Locomotion, Piece, PieceKind};
pub use square::{Square, COLS, ROWS, SQUARES};
pub use state::{Game, Status};
