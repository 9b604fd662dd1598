//! # Transit Chess
//!
//! A two-player, transit-themed chesslike game on a 7×7 board, played in the
//! terminal with Ratatui. Four piece kinds (Helicopter, Train, Car, Bike),
//! each with its own movement rule; capture the opposing Bike to win.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: squares, pieces, movement rules, board,
//!   turn/state manager
//! - [`ui`] — Terminal UI: board view, legal-move highlighting, rules popup
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
