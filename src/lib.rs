//! # Minimax Connect Four
//!
//! A Connect Four engine that picks the AI's column with depth-limited
//! minimax search, alpha-beta pruning, and a window-based positional
//! heuristic.
//!
//! ## Modules
//!
//! - [`game`] - Board, move enumeration, player roles, game state
//! - [`ai`] - Heuristic evaluation, minimax search, agents
//! - [`ui`] - Console front end driving a human-vs-AI game
//! - [`config`] - TOML configuration loading and validation
//! - [`error`] - Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
