//! The decision engine: heuristic evaluation, alpha-beta minimax, and the
//! agents that wrap them.

mod agent;
pub mod evaluation;
pub mod minimax;
mod random;

pub use agent::{Agent, Difficulty, MinimaxAgent, SearchConfig, MAX_DEPTH};
pub use evaluation::{evaluate_window, score_position, Score};
pub use minimax::{minimax, SearchResult, SearchStats, Searcher, TerminalScores};
pub use random::RandomAgent;
