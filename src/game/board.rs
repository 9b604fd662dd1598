use std::fmt;

use super::piece::{Color, Piece, PieceKind};
use super::square::{Square, COLS, SQUARES};

/// The 7×7 board: a fixed arena of 49 optional pieces indexed by [`Square`].
/// At most one piece per square, by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    slots: [Option<Piece>; SQUARES],
}

/// Back-row layout shared by both sides, columns a through g.
const BACK_ROW: [PieceKind; COLS as usize] = [
    PieceKind::Helicopter,
    PieceKind::Train,
    PieceKind::Car,
    PieceKind::Bike,
    PieceKind::Car,
    PieceKind::Train,
    PieceKind::Helicopter,
];

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            slots: [None; SQUARES],
        }
    }

    /// Create the starting position: Blue's pieces on row 1, Orange's on
    /// row 7, the five interior rows empty.
    pub fn initial() -> Self {
        let mut board = Board::new();
        for (col, &kind) in BACK_ROW.iter().enumerate() {
            let col = col as u8;
            board.set(
                Square::from_col_row(col, 0).unwrap(),
                Some(Piece::new(Color::Blue, kind)),
            );
            board.set(
                Square::from_col_row(col, 6).unwrap(),
                Some(Piece::new(Color::Orange, kind)),
            );
        }
        board
    }

    /// Get the piece at a square, if any.
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.slots[square.index()]
    }

    /// Place (or clear) the slot at a square.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.slots[square.index()] = piece;
    }

    /// Remove and return the piece at a square.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.slots[square.index()].take()
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    /// Iterate over every square together with its occupant.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Square::all().map(move |sq| (sq, self.get(sq)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Text rendering: row 7 at the top, columns a-g left to right, each cell a
/// two-character color+kind code or "--" when empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   a  b  c  d  e  f  g")?;
        for row in (0..7u8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..COLS {
                let square = Square::from_col_row(col, row).unwrap();
                match self.get(square) {
                    Some(piece) => write!(f, " {}", piece.code())?,
                    None => write!(f, " --")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert!(Square::all().all(|sq| board.get(sq).is_none()));
    }

    #[test]
    fn test_initial_layout() {
        let board = Board::initial();

        let a1 = board.get(Square::parse("a1").unwrap()).unwrap();
        assert_eq!(a1, Piece::new(Color::Blue, PieceKind::Helicopter));

        let d1 = board.get(Square::parse("d1").unwrap()).unwrap();
        assert_eq!(d1, Piece::new(Color::Blue, PieceKind::Bike));

        let d7 = board.get(Square::parse("d7").unwrap()).unwrap();
        assert_eq!(d7, Piece::new(Color::Orange, PieceKind::Bike));

        let g7 = board.get(Square::parse("g7").unwrap()).unwrap();
        assert_eq!(g7, Piece::new(Color::Orange, PieceKind::Helicopter));

        // Layout is mirror-symmetric across the middle column.
        for col in 0..7 {
            let blue = board.get(Square::from_col_row(col, 0).unwrap()).unwrap();
            let mirrored = board.get(Square::from_col_row(6 - col, 0).unwrap()).unwrap();
            assert_eq!(blue.kind, mirrored.kind);
        }

        // Interior rows empty.
        for row in 1..6 {
            for col in 0..7 {
                assert!(board.get(Square::from_col_row(col, row).unwrap()).is_none());
            }
        }

        let pieces = board.iter().filter(|(_, p)| p.is_some()).count();
        assert_eq!(pieces, 14);
    }

    #[test]
    fn test_set_take() {
        let mut board = Board::new();
        let d4 = Square::parse("d4").unwrap();
        let piece = Piece::new(Color::Blue, PieceKind::Car);

        board.set(d4, Some(piece));
        assert!(board.is_occupied(d4));
        assert_eq!(board.take(d4), Some(piece));
        assert!(!board.is_occupied(d4));
    }

    #[test]
    fn test_display_orientation() {
        let board = Board::initial();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "   a  b  c  d  e  f  g");
        // Row 7 (Orange back row) renders first, row 1 (Blue) last.
        assert!(lines[1].starts_with("7"));
        assert!(lines[1].contains("OH"));
        assert!(lines[7].starts_with("1"));
        assert!(lines[7].contains("BH"));
        // An interior row is all placeholders.
        assert!(lines[4].starts_with("4"));
        assert_eq!(lines[4], "4  -- -- -- -- -- -- --");
    }
}
