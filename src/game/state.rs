use super::board::Board;
use super::piece::{Color, Piece, PieceKind};
use super::rules;
use super::square::Square;

/// Game status: either still going, or won by the side that captured the
/// opposing Bike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    Won(Color),
}

/// A full game: board, whose turn it is, and whether anyone has won.
///
/// All mutation goes through [`Game::attempt_move`], which either applies a
/// move completely or rejects it with no state change. Every failure mode
/// (unknown square, wrong turn, blocked path, unreachable destination,
/// finished game) collapses into the same `false`; callers wanting detail
/// re-derive it through the accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    status: Status,
}

impl Game {
    /// Create a game in the starting position. Blue moves first.
    pub fn new() -> Self {
        Game {
            board: Board::initial(),
            turn: Color::Blue,
            status: Status::Ongoing,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the side to move
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Get current game status
    pub fn status(&self) -> Status {
        self.status
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.status != Status::Ongoing
    }

    /// Piece at a square given in string notation. Malformed or out-of-range
    /// notation is an empty square, not an error.
    pub fn get_piece(&self, square: &str) -> Option<Piece> {
        self.board.get(Square::parse(square)?)
    }

    /// Piece at a square.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    /// Would a move from `origin` to `destination` be accepted right now?
    ///
    /// The full legality check behind [`Game::attempt_move`], without the
    /// commit: game still ongoing, origin holds a piece of the side to move,
    /// destination does not hold a friendly piece, and the piece's movement
    /// rule allows the travel. Probing this across [`Square::all`] is how the
    /// UI highlights legal destinations.
    pub fn move_allowed(&self, origin: Square, destination: Square) -> bool {
        if self.status != Status::Ongoing {
            return false;
        }

        let piece = match self.board.get(origin) {
            Some(piece) if piece.color == self.turn => piece,
            _ => return false,
        };

        if let Some(occupant) = self.board.get(destination) {
            if occupant.color == self.turn {
                return false;
            }
        }

        rules::can_move(piece, &self.board, origin, destination)
    }

    /// Attempt the move given in string notation, e.g. `("d1", "d2")`.
    ///
    /// On success the piece relocates (capturing whatever stood on the
    /// destination), the win condition is checked, the turn switches, and
    /// `true` comes back. On any failure the state is untouched and the
    /// result is `false`.
    pub fn attempt_move(&mut self, origin: &str, destination: &str) -> bool {
        let (origin, destination) = match (Square::parse(origin), Square::parse(destination)) {
            (Some(o), Some(d)) => (o, d),
            _ => return false,
        };

        if !self.move_allowed(origin, destination) {
            return false;
        }

        self.commit(origin, destination);
        self.turn = self.turn.other();
        true
    }

    /// Relocate the origin piece, discarding any capture. Capturing a Bike
    /// ends the game in favor of the side to move.
    fn commit(&mut self, origin: Square, destination: Square) {
        if let Some(captured) = self.board.get(destination) {
            if captured.kind == PieceKind::Bike {
                self.status = Status::Won(self.turn);
            }
        }

        let piece = self.board.take(origin);
        self.board.set(destination, piece);
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
