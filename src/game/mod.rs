//! Core Connect Four game logic: board representation, move enumeration,
//! player roles, and the caller-side game state.

mod board;
mod moves;
mod player;
mod state;

pub use board::{Board, Direction, Piece, Window, CENTER_COL, COLS, ROWS, WINDOW_LEN};
pub use moves::{valid_locations, LegalMoves};
pub use player::Player;
pub use state::{GameOutcome, GameState};
