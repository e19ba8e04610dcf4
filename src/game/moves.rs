use super::board::{Board, COLS};

/// Legal columns in ascending order.
pub type LegalMoves = Vec<usize>;

/// Every column that can still take a piece, lowest index first.
/// An empty result means the board is full.
pub fn valid_locations(board: &Board) -> LegalMoves {
    (0..COLS)
        .filter(|&col| board.is_valid_location(col))
        .collect()
}
