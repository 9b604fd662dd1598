use std::fmt;

/// Number of columns ('a' through 'g').
pub const COLS: u8 = 7;
/// Number of rows ('1' through '7').
pub const ROWS: u8 = 7;
/// Total squares on the board.
pub const SQUARES: usize = (COLS as usize) * (ROWS as usize);

/// A board square, stored as a 0..49 index (col + row * 7).
///
/// Column 0 is 'a', row 0 is rank 1. The string notation at the boundary is
/// a lowercase letter followed by a digit, e.g. "d4".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Create a square from column and row indices (both 0..7).
    pub fn from_col_row(col: u8, row: u8) -> Option<Square> {
        if col < COLS && row < ROWS {
            Some(Square(row * COLS + col))
        } else {
            None
        }
    }

    /// Parse two-character notation like "d4". Case-insensitive; anything
    /// malformed (wrong length, out-of-range letter or digit) yields `None`.
    pub fn parse(notation: &str) -> Option<Square> {
        let mut chars = notation.chars();
        let col_char = chars.next()?.to_ascii_lowercase();
        let row_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if !('a'..='g').contains(&col_char) || !('1'..='7').contains(&row_char) {
            return None;
        }
        let col = col_char as u8 - b'a';
        let row = row_char as u8 - b'1';
        Square::from_col_row(col, row)
    }

    /// Column index, 0 ('a') through 6 ('g').
    pub fn col(self) -> u8 {
        self.0 % COLS
    }

    /// Row index, 0 (rank 1) through 6 (rank 7).
    pub fn row(self) -> u8 {
        self.0 / COLS
    }

    /// Index into a 49-slot board array.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all 49 squares, a1 first, g7 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARES as u8).map(Square)
    }

    /// Step by one signed column/row offset. `None` if that leaves the board.
    pub fn offset(self, dcol: i8, drow: i8) -> Option<Square> {
        let col = self.col() as i8 + dcol;
        let row = self.row() as i8 + drow;
        if (0..COLS as i8).contains(&col) && (0..ROWS as i8).contains(&row) {
            Square::from_col_row(col as u8, row as u8)
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col()) as char, self.row() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let sq = Square::parse("d4").unwrap();
        assert_eq!(sq.col(), 3);
        assert_eq!(sq.row(), 3);
        assert_eq!(sq.to_string(), "d4");

        assert_eq!(Square::parse("a1").unwrap().index(), 0);
        assert_eq!(Square::parse("g7").unwrap().index(), 48);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Square::parse("D4"), Square::parse("d4"));
        assert_eq!(Square::parse("G7"), Square::parse("g7"));
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(Square::parse(""), None);
        assert_eq!(Square::parse("d"), None);
        assert_eq!(Square::parse("d44"), None);
        assert_eq!(Square::parse("h4"), None);
        assert_eq!(Square::parse("d8"), None);
        assert_eq!(Square::parse("d0"), None);
        assert_eq!(Square::parse("44"), None);
        assert_eq!(Square::parse("dd"), None);
    }

    #[test]
    fn test_all_enumerates_49() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 49);
        assert_eq!(squares[0].to_string(), "a1");
        assert_eq!(squares[48].to_string(), "g7");
    }

    #[test]
    fn test_offset() {
        let d4 = Square::parse("d4").unwrap();
        assert_eq!(d4.offset(1, 1), Square::parse("e5"));
        assert_eq!(d4.offset(-3, -3), Square::parse("a1"));
        assert_eq!(Square::parse("a1").unwrap().offset(-1, 0), None);
        assert_eq!(Square::parse("g7").unwrap().offset(0, 1), None);
    }
}
