use crate::game::{GameState, Player};

use super::minimax::{Searcher, TerminalScores, INFINITY, NEG_INFINITY};

/// Deepest search the configuration accepts.
pub const MAX_DEPTH: u32 = 10;

/// Universal interface for anything that picks columns.
pub trait Agent {
    /// Pick a column for the player to move, or `None` when no legal move
    /// exists.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Named search depths.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Search settings, the `[search]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub difficulty: Difficulty,
    /// Explicit depth; overrides `difficulty` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    /// Score a human win as -1e13 instead of -1e14.
    pub legacy_sentinels: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            difficulty: Difficulty::Easy,
            depth: None,
            legacy_sentinels: false,
        }
    }
}

impl SearchConfig {
    pub fn effective_depth(&self) -> u32 {
        self.depth.unwrap_or_else(|| self.difficulty.depth())
    }

    pub fn terminal_scores(&self) -> TerminalScores {
        if self.legacy_sentinels {
            TerminalScores::LEGACY
        } else {
            TerminalScores::SYMMETRIC
        }
    }
}

/// Alpha-beta minimax player. Maximizes when the AI is to move and minimizes
/// when the human is, so it can play either side.
pub struct MinimaxAgent {
    depth: u32,
    searcher: Searcher,
}

impl MinimaxAgent {
    pub fn new(depth: u32) -> Self {
        MinimaxAgent {
            depth,
            searcher: Searcher::default(),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        MinimaxAgent {
            depth: config.effective_depth(),
            searcher: Searcher::new(config.terminal_scores()),
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        let legal = state.legal_moves();
        let fallback = legal.first().copied()?;

        let maximizing = state.current_player() == Player::Ai;
        self.searcher.reset_stats();
        let result = self
            .searcher
            .minimax(state.board(), self.depth, NEG_INFINITY, INFINITY, maximizing);
        let stats = self.searcher.stats();
        log::debug!(
            "depth {} search chose {:?} (score {}, {} nodes, {} cutoffs)",
            self.depth,
            result.column,
            result.score,
            stats.nodes,
            stats.cutoffs
        );

        // Depth 0 never reports a column.
        Some(result.column.unwrap_or(fallback))
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
