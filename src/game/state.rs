use super::{valid_locations, Board, LegalMoves, Player, COLS};
use crate::error::{MoveError, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// The authoritative board plus turn bookkeeping, owned by whoever runs the
/// game loop. The engine only ever sees `&Board` snapshots of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state with `first` to move
    pub fn initial(first: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: first,
            outcome: None,
        }
    }

    /// Rebuild a position from a history of 0-based column digits, human
    /// moving first: `"3342"` means Human 3, AI 3, Human 4, AI 2.
    pub fn from_moves(history: &str) -> Result<Self, ParseError> {
        let mut state = GameState::initial(Player::Human);
        for (position, ch) in history.chars().filter(|c| !c.is_whitespace()).enumerate() {
            let col = ch
                .to_digit(10)
                .ok_or(ParseError::InvalidChar { position, ch })? as usize;
            state
                .play(col)
                .map_err(|source| ParseError::IllegalMove { position, source })?;
        }
        Ok(state)
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_moves(&self) -> LegalMoves {
        if self.is_terminal() {
            return LegalMoves::new();
        }
        valid_locations(&self.board)
    }

    /// Drop the current player's piece into `col`, then record a win or draw
    /// and hand the turn over. Returns the row the piece landed in.
    pub fn play(&mut self, col: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        let row = self
            .board
            .next_open_row(col)
            .ok_or(MoveError::ColumnFull(col))?;

        let mover = self.current_player;
        self.board.drop_piece(row, col, mover.piece());

        if self.board.winning_move(mover.piece()) {
            self.outcome = Some(GameOutcome::Winner(mover));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = mover.other();
        Ok(row)
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, col: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.play(col)?;
        Ok(next)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial(Player::Human)
    }
}
