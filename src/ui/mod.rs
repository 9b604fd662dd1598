//! Terminal UI: a cursor-driven board view with legal-move highlighting and
//! a rules popup. All game decisions come from [`crate::game`]; nothing here
//! re-implements movement logic.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
