use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::game;
use crate::game::{Board, Square};

fn side_color(color: game::Color) -> Color {
    match color {
        game::Color::Blue => Color::Blue,
        game::Color::Orange => Color::Yellow,
    }
}

pub struct BoardView<'a> {
    pub board: &'a Board,
    pub cursor: Option<Square>,
    pub selected: Option<Square>,
    pub highlights: &'a [Square],
    pub show_coordinates: bool,
}

/// Render the board with row 7 at the top, one three-character cell per
/// square, cursor and selection inverted, legal destinations tinted.
pub fn render_board(frame: &mut Frame, view: &BoardView, area: Rect) {
    let mut lines = Vec::new();

    if view.show_coordinates {
        lines.push(Line::from("    a  b  c  d  e  f  g"));
    }

    for row in (0..7u8).rev() {
        let mut spans = Vec::new();
        if view.show_coordinates {
            spans.push(Span::raw(format!(" {} ", row + 1)));
        }

        for col in 0..7u8 {
            let square = Square::from_col_row(col, row).unwrap();
            let (text, fg) = match view.board.get(square) {
                Some(piece) => (format!(" {}", piece.code()), side_color(piece.color)),
                None => (" · ".to_string(), Color::DarkGray),
            };

            let mut style = Style::default().fg(fg);
            if view.highlights.contains(&square) {
                style = style.bg(Color::Green);
            }
            if view.selected == Some(square) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            if view.cursor == Some(square) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines);
    frame.render_widget(widget, area);
}
