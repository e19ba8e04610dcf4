//! Depth-limited minimax with alpha-beta pruning.
//!
//! The AI is the maximizer and the human the minimizer; scores are always
//! from the AI's point of view. Columns are tried in ascending order and a
//! later column only replaces the current best when it scores strictly
//! better, so the search is fully deterministic.

use crate::game::{valid_locations, Board, Piece};

use super::evaluation::{score_position, Score};

/// Stand-in for +infinity in alpha/beta bounds.
pub const INFINITY: Score = Score::MAX;
/// Stand-in for -infinity in alpha/beta bounds.
pub const NEG_INFINITY: Score = Score::MIN;

/// Magnitude of a decided game, far above any heuristic score.
pub const WIN_SCORE: Score = 100_000_000_000_000;

/// Scores returned for boards where one side already has four in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TerminalScores {
    pub ai_win: Score,
    pub player_win: Score,
}

impl TerminalScores {
    /// `+WIN_SCORE` / `-WIN_SCORE`.
    pub const SYMMETRIC: TerminalScores = TerminalScores {
        ai_win: WIN_SCORE,
        player_win: -WIN_SCORE,
    };

    /// The historical pair, where a human win is worth ten times less than an
    /// AI win (`+1e14` / `-1e13`). Only useful for reproducing old scores.
    pub const LEGACY: TerminalScores = TerminalScores {
        ai_win: 100_000_000_000_000,
        player_win: -10_000_000_000_000,
    };
}

impl Default for TerminalScores {
    fn default() -> Self {
        TerminalScores::SYMMETRIC
    }
}

/// Chosen column (if any move was searched) and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: Score,
}

impl SearchResult {
    fn leaf(score: Score) -> Self {
        SearchResult {
            column: None,
            score,
        }
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct SearchStats {
    /// Positions visited, leaves included.
    pub nodes: u64,
    /// Times the remaining siblings of a node were skipped.
    pub cutoffs: u64,
}

/// Runs minimax searches and keeps statistics across them.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    terminal: TerminalScores,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(terminal: TerminalScores) -> Self {
        Searcher {
            terminal,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Search `depth` plies below `board`.
    ///
    /// Terminal boards and `depth == 0` return no column: a won board gets the
    /// matching terminal score, a full board 0, and an undecided board its
    /// heuristic value for the AI.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;

        let moves = valid_locations(board);
        let ai_won = board.winning_move(Piece::Ai);
        let player_won = board.winning_move(Piece::Player);

        if ai_won {
            return SearchResult::leaf(self.terminal.ai_win);
        }
        if player_won {
            return SearchResult::leaf(self.terminal.player_win);
        }
        if moves.is_empty() {
            return SearchResult::leaf(0);
        }
        if depth == 0 {
            return SearchResult::leaf(score_position(board, Piece::Ai));
        }

        // `moves` is non-empty here, so a column is always reported.
        let mut column = moves.first().copied();

        if maximizing {
            let mut value = NEG_INFINITY;
            for &col in &moves {
                let Some(child) = board.with_piece(col, Piece::Ai) else {
                    continue;
                };
                let score = self.minimax(&child, depth - 1, alpha, beta, false).score;
                if score > value {
                    value = score;
                    column = Some(col);
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            SearchResult { column, score: value }
        } else {
            let mut value = INFINITY;
            for &col in &moves {
                let Some(child) = board.with_piece(col, Piece::Player) else {
                    continue;
                };
                let score = self.minimax(&child, depth - 1, alpha, beta, true).score;
                if score < value {
                    value = score;
                    column = Some(col);
                }
                beta = beta.min(value);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            SearchResult { column, score: value }
        }
    }
}

/// One-shot search with the default (symmetric) terminal scores.
pub fn minimax(board: &Board, depth: u32, alpha: Score, beta: Score, maximizing: bool) -> SearchResult {
    Searcher::default().minimax(board, depth, alpha, beta, maximizing)
}
