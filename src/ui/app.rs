use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::config::AppConfig;
use crate::game::{Game, Square, Status};

pub struct App {
    game: Game,
    config: AppConfig,
    cursor: Square,
    selected: Option<Square>,
    show_rules: bool,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            game: Game::new(),
            config,
            // Start on the Blue Bike.
            cursor: Square::parse("d1").unwrap(),
            selected: None,
            show_rules: false,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.config.tick_rate_ms))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if self.show_rules {
            // Any key dismisses the rules popup.
            self.show_rules = false;
            return;
        }

        self.message = None;

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                if self.selected.is_some() {
                    self.selected = None;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Left => self.move_cursor(-1, 0),
            KeyCode::Right => self.move_cursor(1, 0),
            KeyCode::Down => self.move_cursor(0, -1),
            KeyCode::Up => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select_or_move();
            }
            KeyCode::Char('h') => {
                self.show_rules = true;
            }
            KeyCode::Char('r') => {
                self.game = Game::new();
                self.selected = None;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, dcol: i8, drow: i8) {
        if let Some(square) = self.cursor.offset(dcol, drow) {
            self.cursor = square;
        }
    }

    /// Enter on an own piece selects it; Enter elsewhere attempts the move.
    fn select_or_move(&mut self) {
        if self.game.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let Some(origin) = self.selected else {
            match self.game.piece_at(self.cursor) {
                Some(piece) if piece.color == self.game.turn() => {
                    self.selected = Some(self.cursor);
                }
                Some(_) => {
                    self.message = Some(format!("It is {}'s turn.", self.game.turn().name()));
                }
                None => {
                    self.message = Some("No piece on that square.".to_string());
                }
            }
            return;
        };

        if origin == self.cursor {
            self.selected = None;
            return;
        }

        // The core works in string notation at its boundary.
        if self.game.attempt_move(&origin.to_string(), &self.cursor.to_string()) {
            self.selected = None;
            if let Status::Won(color) = self.game.status() {
                self.message = Some(format!("{} wins the game!", color.name()));
            }
        } else {
            self.message = Some("Illegal move.".to_string());
        }
    }

    /// Legal destinations of the selected piece, for highlighting.
    fn highlighted_squares(&self) -> Vec<Square> {
        if !self.config.highlight_moves {
            return Vec::new();
        }
        let Some(origin) = self.selected else {
            return Vec::new();
        };
        Square::all()
            .filter(|&dest| self.game.move_allowed(origin, dest))
            .collect()
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let view = super::game_view::ViewState {
            game: &self.game,
            cursor: self.cursor,
            selected: self.selected,
            highlights: self.highlighted_squares(),
            message: &self.message,
            show_rules: self.show_rules,
            show_coordinates: self.config.show_coordinates,
        };
        super::game_view::render(frame, &view);
    }
}
