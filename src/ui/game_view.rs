use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game;
use crate::game::{Game, Square, Status};

use super::board_widget::{self, BoardView};

pub struct ViewState<'a> {
    pub game: &'a Game,
    pub cursor: Square,
    pub selected: Option<Square>,
    pub highlights: Vec<Square>,
    pub message: &'a Option<String>,
    pub show_rules: bool,
    pub show_coordinates: bool,
}

pub fn render(frame: &mut Frame, view: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, view.game, chunks[0]);

    let board_view = BoardView {
        board: view.game.board(),
        cursor: Some(view.cursor),
        selected: view.selected,
        highlights: &view.highlights,
        show_coordinates: view.show_coordinates,
    };
    board_widget::render_board(frame, &board_view, centered_board_area(chunks[1]));

    render_message(frame, view.message, chunks[2]);
    render_controls(frame, chunks[3]);

    if view.show_rules {
        render_rules_popup(frame);
    }
}

fn side_color(color: game::Color) -> Color {
    match color {
        game::Color::Blue => Color::Blue,
        game::Color::Orange => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game: &Game, area: Rect) {
    let (status, color) = match game.status() {
        Status::Won(winner) => (format!("{} won the game!", winner.name()), side_color(winner)),
        Status::Ongoing => {
            let turn = game.turn();
            (format!("Current turn: {}", turn.name()), side_color(turn))
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Transit Chess"));

    frame.render_widget(header, area);
}

/// Keep the board horizontally centered without stretching its cells.
fn centered_board_area(area: Rect) -> Rect {
    let width = 24.min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    Rect::new(x, area.y, width, area.height)
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("Arrows: Cursor  |  Enter: Select/Move  |  Esc: Cancel  |  H: Rules  |  R: Restart  |  Q: Quit");
    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

const RULES_TEXT: &[&str] = &[
    "Capture the other side's Bike to win. Blue moves first.",
    "",
    "  Helicopter (H): jumps exactly 2 squares diagonally, or steps",
    "                  1 square orthogonally.",
    "  Train      (T): slides up to 4 squares diagonally, or steps",
    "                  1 square orthogonally. Blocked by pieces in",
    "                  the way.",
    "  Car        (C): slides up to 3 squares orthogonally, or steps",
    "                  1 square diagonally. Blocked by pieces in the",
    "                  way.",
    "  Bike       (B): moves 1 square in any direction. Lose it and",
    "                  the game is over.",
    "",
    "Press any key to close.",
];

fn render_rules_popup(frame: &mut Frame) {
    let area = centered_rect(64, 18, frame.area());
    let lines: Vec<Line> = RULES_TEXT.iter().map(|&s| Line::from(s)).collect();
    let popup = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Rules"));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
