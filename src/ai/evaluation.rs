//! Heuristic scoring for positions where the search stops before the game ends.
//!
//! Wins are not scored here; the search detects them and returns its terminal
//! sentinels instead. The heuristic only ranks undecided positions.

use crate::game::{Board, Piece, Window, CENTER_COL};

/// Search and evaluation score. Positive favours the AI.
pub type Score = i64;

/// Bonus per own piece in the center column.
pub const CENTER_WEIGHT: Score = 3;
pub const THREE_WITH_GAP: Score = 5;
pub const TWO_WITH_GAPS: Score = 2;
pub const OPPONENT_THREE_WITH_GAP: Score = -4;

/// Score one window of four from `piece`'s point of view.
///
/// | own | empty | opponent | score |
/// |-----|-------|----------|-------|
/// | 3   | 1     | 0        | +5    |
/// | 2   | 2     | 0        | +2    |
/// | 0   | 1     | 3        | -4    |
///
/// Everything else scores 0.
pub fn evaluate_window(window: &Window, piece: Piece) -> Score {
    let opponent = piece.opponent();
    let count = |target: Piece| window.iter().filter(|&&cell| cell == target).count();
    let own = count(piece);
    let empty = count(Piece::Empty);
    let opp = count(opponent);

    let mut score = 0;
    if own == 3 && empty == 1 {
        score += THREE_WITH_GAP;
    } else if own == 2 && empty == 2 {
        score += TWO_WITH_GAPS;
    }
    if opp == 3 && empty == 1 {
        score += OPPONENT_THREE_WITH_GAP;
    }
    score
}

/// Heuristic value of `board` for `piece`: the center-column bonus plus every
/// horizontal, vertical and diagonal window.
pub fn score_position(board: &Board, piece: Piece) -> Score {
    let center = board.count_in_column(CENTER_COL, piece) as Score * CENTER_WEIGHT;
    let windows: Score = board
        .windows()
        .map(|window| evaluate_window(&window, piece))
        .sum();
    center + windows
}
