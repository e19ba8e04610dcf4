use std::fmt;
use std::ops::Range;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WINDOW_LEN: usize = 4;

/// Index of the middle column (integer division, so 3 on a 7-wide board).
pub const CENTER_COL: usize = COLS / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Empty,
    Player,
    Ai,
}

impl Piece {
    /// The piece of the other side. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Piece {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
            Piece::Empty => Piece::Empty,
        }
    }

    fn symbol(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Player => 'X',
            Piece::Ai => 'O',
        }
    }
}

/// Four consecutive cells along one direction.
pub type Window = [Piece; WINDOW_LEN];

/// The four axes a line of four can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right (/)
    DiagonalUp,
    /// Top-left to bottom-right (\)
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// (row, col) step between consecutive cells of a window.
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalUp => (1, 1),
            Direction::DiagonalDown => (-1, 1),
        }
    }

    /// Row and column ranges of every cell a window can start from.
    fn starts(self) -> (Range<usize>, Range<usize>) {
        let span = WINDOW_LEN - 1;
        match self {
            Direction::Horizontal => (0..ROWS, 0..COLS - span),
            Direction::Vertical => (0..ROWS - span, 0..COLS),
            Direction::DiagonalUp => (0..ROWS - span, 0..COLS - span),
            Direction::DiagonalDown => (span..ROWS, 0..COLS - span),
        }
    }
}

/// A 6x7 Connect Four grid. Row 0 is the bottom row; pieces stack upward.
///
/// `Board` is a plain `Copy` value: search branches work on their own copy and
/// never observe each other's drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Piece; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Piece::Empty; COLS]; ROWS],
        }
    }

    /// Get the piece at a specific position (row 0 is the bottom)
    pub fn get(&self, row: usize, col: usize) -> Piece {
        self.cells[row][col]
    }

    /// A column accepts a piece iff its top cell is still empty.
    ///
    /// # Panics
    /// If `col >= COLS`. Range-checking columns is the caller's job.
    pub fn is_valid_location(&self, col: usize) -> bool {
        assert!(col < COLS, "column {col} out of range 0..{COLS}");
        self.cells[ROWS - 1][col] == Piece::Empty
    }

    /// Lowest empty row in `col`, or `None` when the column is full.
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        assert!(col < COLS, "column {col} out of range 0..{COLS}");
        (0..ROWS).find(|&row| self.cells[row][col] == Piece::Empty)
    }

    /// Place `piece` at (row, col).
    ///
    /// `row` must come from [`Board::next_open_row`] for the same column;
    /// anything else would leave a floating piece and is a programming error.
    pub fn drop_piece(&mut self, row: usize, col: usize, piece: Piece) {
        assert!(col < COLS, "column {col} out of range 0..{COLS}");
        debug_assert_eq!(
            self.next_open_row(col),
            Some(row),
            "row {row} is not the next open row of column {col}"
        );
        self.cells[row][col] = piece;
    }

    /// Copy of this board with `piece` dropped into `col`, or `None` if the
    /// column is full.
    pub fn with_piece(&self, col: usize, piece: Piece) -> Option<Board> {
        let row = self.next_open_row(col)?;
        let mut next = *self;
        next.drop_piece(row, col, piece);
        Some(next)
    }

    /// True iff `piece` owns four in a row in any direction.
    pub fn winning_move(&self, piece: Piece) -> bool {
        if piece == Piece::Empty {
            return false;
        }
        self.windows()
            .any(|window| window.iter().all(|&cell| cell == piece))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_valid_location(col))
    }

    /// Either side has won, or nobody can move.
    pub fn is_terminal(&self) -> bool {
        self.winning_move(Piece::Player) || self.winning_move(Piece::Ai) || self.is_full()
    }

    /// The window of four starting at (row, col) and running along `direction`.
    pub fn window(&self, row: usize, col: usize, direction: Direction) -> Window {
        let (dr, dc) = direction.step();
        std::array::from_fn(|i| {
            let r = row as isize + dr * i as isize;
            let c = col as isize + dc * i as isize;
            self.cells[r as usize][c as usize]
        })
    }

    /// Every window of four along `direction`.
    pub fn windows_in(&self, direction: Direction) -> impl Iterator<Item = Window> + '_ {
        let (rows, cols) = direction.starts();
        rows.flat_map(move |row| {
            cols.clone()
                .map(move |col| self.window(row, col, direction))
        })
    }

    /// Every window of four on the board, all directions.
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        Direction::ALL
            .into_iter()
            .flat_map(move |direction| self.windows_in(direction))
    }

    /// Number of `piece` cells in column `col`.
    pub fn count_in_column(&self, col: usize, piece: Piece) -> usize {
        (0..ROWS).filter(|&row| self.cells[row][col] == piece).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the top row first, so the board reads the way it stands.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            let line: Vec<String> = self.cells[row]
                .iter()
                .map(|piece| piece.symbol().to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let labels: Vec<String> = (1..=COLS).map(|col| col.to_string()).collect();
        write!(f, "{}", labels.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop(board: &mut Board, col: usize, piece: Piece) -> usize {
        let row = board.next_open_row(col).expect("column has room");
        board.drop_piece(row, col, piece);
        row
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Piece::Empty);
            }
        }
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_drop_piece_stacks_from_bottom() {
        let mut board = Board::new();

        let row = drop(&mut board, 3, Piece::Player);
        assert_eq!(row, 0);
        assert_eq!(board.get(0, 3), Piece::Player);

        let row = drop(&mut board, 3, Piece::Ai);
        assert_eq!(row, 1);
        assert_eq!(board.get(1, 3), Piece::Ai);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            assert!(board.is_valid_location(0));
            drop(&mut board, 0, Piece::Player);
        }
        assert!(!board.is_valid_location(0));
        assert_eq!(board.next_open_row(0), None);
        assert_eq!(board.with_piece(0, Piece::Ai), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_invalid_column_panics() {
        let board = Board::new();
        board.is_valid_location(COLS);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_drop_out_of_range_panics() {
        let mut board = Board::new();
        board.drop_piece(0, COLS, Piece::Ai);
    }

    #[test]
    fn test_valid_location_matches_open_row() {
        let mut board = Board::new();
        // Uneven fill: column c gets c pieces
        for col in 0..COLS {
            for i in 0..col {
                let piece = if i % 2 == 0 { Piece::Player } else { Piece::Ai };
                if board.is_valid_location(col) {
                    drop(&mut board, col, piece);
                }
            }
        }
        for col in 0..COLS {
            assert_eq!(
                board.is_valid_location(col),
                board.next_open_row(col).is_some(),
                "mismatch in column {col}"
            );
        }
    }

    #[test]
    fn test_drop_keeps_column_contiguous() {
        let mut board = Board::new();
        for (i, col) in [2, 2, 5, 2, 5, 6].into_iter().enumerate() {
            let piece = if i % 2 == 0 { Piece::Player } else { Piece::Ai };
            let row = drop(&mut board, col, piece);
            assert_eq!(board.get(row, col), piece);
        }
        for col in 0..COLS {
            let filled = ROWS - (0..ROWS).filter(|&r| board.get(r, col) == Piece::Empty).count();
            for row in 0..ROWS {
                assert_eq!(board.get(row, col) != Piece::Empty, row < filled);
            }
        }
    }

    #[test]
    fn test_with_piece_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_piece(4, Piece::Ai).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(next.get(0, 4), Piece::Ai);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                drop(&mut board, col, Piece::Player);
            }
        }
        assert!(board.is_full());
        assert!(board.is_terminal());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            drop(&mut board, col, Piece::Player);
        }
        assert!(board.winning_move(Piece::Player));
        assert!(!board.winning_move(Piece::Ai));
        assert!(board.is_terminal());
    }

    #[test]
    fn test_horizontal_win_at_right_edge() {
        let mut board = Board::new();
        for col in 3..COLS {
            drop(&mut board, col, Piece::Ai);
        }
        assert!(board.winning_move(Piece::Ai));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        drop(&mut board, 6, Piece::Player);
        drop(&mut board, 6, Piece::Player);
        for _ in 0..4 {
            drop(&mut board, 6, Piece::Ai);
        }
        assert!(board.winning_move(Piece::Ai));
        assert!(!board.winning_move(Piece::Player));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Create diagonal / pattern
        drop(&mut board, 0, Piece::Player);

        drop(&mut board, 1, Piece::Ai);
        drop(&mut board, 1, Piece::Player);

        drop(&mut board, 2, Piece::Ai);
        drop(&mut board, 2, Piece::Ai);
        drop(&mut board, 2, Piece::Player);

        drop(&mut board, 3, Piece::Ai);
        drop(&mut board, 3, Piece::Ai);
        drop(&mut board, 3, Piece::Ai);
        assert!(!board.winning_move(Piece::Player));
        drop(&mut board, 3, Piece::Player);

        assert!(board.winning_move(Piece::Player));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        drop(&mut board, 6, Piece::Ai);

        drop(&mut board, 5, Piece::Player);
        drop(&mut board, 5, Piece::Ai);

        drop(&mut board, 4, Piece::Player);
        drop(&mut board, 4, Piece::Player);
        drop(&mut board, 4, Piece::Ai);

        drop(&mut board, 3, Piece::Player);
        drop(&mut board, 3, Piece::Player);
        drop(&mut board, 3, Piece::Player);
        drop(&mut board, 3, Piece::Ai);

        assert!(board.winning_move(Piece::Ai));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            drop(&mut board, col, Piece::Player);
        }
        assert!(!board.winning_move(Piece::Player));
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_five_in_a_row_counts() {
        let mut board = Board::new();
        for col in 0..5 {
            drop(&mut board, col, Piece::Ai);
        }
        assert!(board.winning_move(Piece::Ai));
    }

    #[test]
    fn test_empty_never_wins() {
        assert!(!Board::new().winning_move(Piece::Empty));
    }

    #[test]
    fn test_window_counts() {
        let board = Board::new();
        assert_eq!(board.windows_in(Direction::Horizontal).count(), 24);
        assert_eq!(board.windows_in(Direction::Vertical).count(), 21);
        assert_eq!(board.windows_in(Direction::DiagonalUp).count(), 12);
        assert_eq!(board.windows_in(Direction::DiagonalDown).count(), 12);
        assert_eq!(board.windows().count(), 69);
    }

    #[test]
    fn test_diagonal_down_window_cells() {
        let mut board = Board::new();
        drop(&mut board, 1, Piece::Ai);
        let window = board.window(3, 0, Direction::DiagonalDown);
        // cells (3,0) (2,1) (1,2) (0,3)
        assert_eq!(window, [Piece::Empty; 4]);
        let window = board.window(0, 1, Direction::Horizontal);
        assert_eq!(window[0], Piece::Ai);
    }

    #[test]
    fn test_display_puts_bottom_row_last() {
        let mut board = Board::new();
        drop(&mut board, 0, Piece::Player);
        drop(&mut board, 6, Piece::Ai);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS + 1);
        assert_eq!(lines[ROWS - 1], "X . . . . . O");
        assert_eq!(lines[ROWS], "1 2 3 4 5 6 7");
        assert_eq!(lines[0], ". . . . . . .");
    }
}
