use super::board::Piece;

/// The two sides of a game. The AI is the maximizer, the human the minimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }

    /// The piece this side drops
    pub fn piece(self) -> Piece {
        match self {
            Player::Human => Piece::Player,
            Player::Ai => Piece::Ai,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Human => "Human",
            Player::Ai => "AI",
        }
    }
}
