/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Orange,
}

impl Color {
    /// Get the other side
    pub fn other(self) -> Color {
        match self {
            Color::Blue => Color::Orange,
            Color::Orange => Color::Blue,
        }
    }

    /// Get color name for display
    pub fn name(self) -> &'static str {
        match self {
            Color::Blue => "Blue",
            Color::Orange => "Orange",
        }
    }

    /// Single-letter code used in board printouts ('B' / 'O').
    pub fn initial(self) -> char {
        match self {
            Color::Blue => 'B',
            Color::Orange => 'O',
        }
    }
}

/// Declared axis preference of a piece kind. Informational: the actual
/// legality rules live in [`crate::game::rules`], and every non-Bike kind
/// additionally allows a one-square non-diagonal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Orthogonal,
    Diagonal,
}

/// How a piece travels: jumping pieces only care about the endpoints,
/// sliding pieces need every intermediate square clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locomotion {
    Jumping,
    Sliding,
}

/// The four piece kinds of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Helicopter,
    Train,
    Car,
    Bike,
}

impl PieceKind {
    pub fn axis(self) -> Axis {
        match self {
            PieceKind::Helicopter | PieceKind::Train => Axis::Diagonal,
            PieceKind::Car | PieceKind::Bike => Axis::Orthogonal,
        }
    }

    /// Maximum travel distance (Chebyshev) along the kind's preferred axis.
    pub fn max_distance(self) -> u8 {
        match self {
            PieceKind::Helicopter => 2,
            PieceKind::Train => 4,
            PieceKind::Car => 3,
            PieceKind::Bike => 1,
        }
    }

    pub fn locomotion(self) -> Locomotion {
        match self {
            PieceKind::Helicopter | PieceKind::Bike => Locomotion::Jumping,
            PieceKind::Train | PieceKind::Car => Locomotion::Sliding,
        }
    }

    /// Get kind name for display
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Helicopter => "Helicopter",
            PieceKind::Train => "Train",
            PieceKind::Car => "Car",
            PieceKind::Bike => "Bike",
        }
    }

    /// Single-letter code used in board printouts.
    pub fn initial(self) -> char {
        match self {
            PieceKind::Helicopter => 'H',
            PieceKind::Train => 'T',
            PieceKind::Car => 'C',
            PieceKind::Bike => 'B',
        }
    }
}

/// A piece on the board. Attributes never change after creation; only the
/// board position does, and that lives in the board mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    /// Two-character color+kind code, e.g. "BH" for a Blue Helicopter.
    pub fn code(self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.color.initial());
        code.push(self.kind.initial());
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_color() {
        assert_eq!(Color::Blue.other(), Color::Orange);
        assert_eq!(Color::Orange.other(), Color::Blue);
    }

    #[test]
    fn test_kind_attributes() {
        assert_eq!(PieceKind::Helicopter.axis(), Axis::Diagonal);
        assert_eq!(PieceKind::Train.axis(), Axis::Diagonal);
        assert_eq!(PieceKind::Car.axis(), Axis::Orthogonal);
        assert_eq!(PieceKind::Bike.axis(), Axis::Orthogonal);

        assert_eq!(PieceKind::Helicopter.max_distance(), 2);
        assert_eq!(PieceKind::Train.max_distance(), 4);
        assert_eq!(PieceKind::Car.max_distance(), 3);
        assert_eq!(PieceKind::Bike.max_distance(), 1);

        assert_eq!(PieceKind::Helicopter.locomotion(), Locomotion::Jumping);
        assert_eq!(PieceKind::Train.locomotion(), Locomotion::Sliding);
        assert_eq!(PieceKind::Car.locomotion(), Locomotion::Sliding);
        assert_eq!(PieceKind::Bike.locomotion(), Locomotion::Jumping);
    }

    #[test]
    fn test_piece_code() {
        assert_eq!(Piece::new(Color::Blue, PieceKind::Helicopter).code(), "BH");
        assert_eq!(Piece::new(Color::Orange, PieceKind::Bike).code(), "OB");
    }
}
