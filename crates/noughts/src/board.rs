//! Immutable board state and move application.

use crate::position::Position;
use crate::rules;
use crate::types::{Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 noughts-and-crosses board.
///
/// A board is a plain value: applying a move clones the board and returns
/// the successor, leaving the original untouched. Two boards holding the
/// same squares compare equal regardless of how they were reached, and the
/// side to move is derived from mark counts alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares occupied by the given player.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&square| square == Square::Occupied(player))
            .count()
    }

    /// Checks the mark-count parity that every board reachable by legal
    /// play satisfies: X and O counts are equal, or X leads by exactly one.
    pub fn is_consistent(&self) -> bool {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        x == o || x == o + 1
    }

    /// Returns the player whose turn it is.
    ///
    /// Equal mark counts mean X moves, X ahead by one means O moves. The
    /// turn is derived from counts alone, never from move history.
    ///
    /// # Errors
    ///
    /// [`StateError::InvalidParity`] if the mark counts are impossible for
    /// a legally played game, [`StateError::GameOver`] if the game has
    /// finished.
    #[instrument(skip(self))]
    pub fn to_move(&self) -> Result<Player, StateError> {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        if x != o && x != o + 1 {
            return Err(StateError::InvalidParity { x, o });
        }
        if rules::is_terminal(self) {
            return Err(StateError::GameOver);
        }
        if x == o { Ok(Player::X) } else { Ok(Player::O) }
    }

    /// Returns the empty positions, in board order.
    ///
    /// An empty vector means the board is full.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Applies a move for the player whose turn it is, returning the
    /// successor board. The receiver is unchanged.
    ///
    /// # Errors
    ///
    /// [`MoveError::InconsistentBoard`] if the mark counts are impossible,
    /// [`MoveError::GameOver`] if the game has finished,
    /// [`MoveError::SquareOccupied`] if the target square is not empty.
    #[instrument(skip(self), fields(position = ?pos))]
    pub fn apply(&self, pos: Position) -> Result<Board, MoveError> {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        if x != o && x != o + 1 {
            return Err(MoveError::InconsistentBoard { x, o });
        }
        if rules::is_terminal(self) {
            return Err(MoveError::GameOver);
        }
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        let player = if x == o { Player::X } else { Player::O };
        Ok(self.place(pos, player))
    }

    /// Applies a move given raw (row, column) coordinates.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] if either coordinate falls outside 0-2,
    /// otherwise as [`Board::apply`].
    pub fn apply_at(&self, row: usize, col: usize) -> Result<Board, MoveError> {
        let pos = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.apply(pos)
    }

    /// Successor board with `player`'s mark at `pos`, without validation.
    pub(crate) fn place(&self, pos: Position, player: Player) -> Board {
        let mut next = self.clone();
        next.set(pos, Square::Occupied(player));
        next
    }

    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Returns true if the game is over (win or full board).
    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(self)
    }

    /// Returns the outcome of a finished game.
    ///
    /// # Errors
    ///
    /// [`StateError::GameInProgress`] if the game has not finished.
    #[instrument(skip(self))]
    pub fn outcome(&self) -> Result<Outcome, StateError> {
        if let Some(winner) = rules::check_winner(self) {
            Ok(Outcome::Winner(winner))
        } else if rules::is_full(self) {
            Ok(Outcome::Draw)
        } else {
            Err(StateError::GameInProgress)
        }
    }

    /// Replays a move sequence from the empty board.
    ///
    /// The mover for each step is derived from the board, so the sequence
    /// alternates X, O, X, ... from the first entry.
    ///
    /// # Errors
    ///
    /// As [`Board::apply`] for the first move that fails, including moves
    /// landing after the game has already finished.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Board, MoveError> {
        let mut board = Board::new();
        for &pos in moves {
            board = board.apply(pos)?;
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                write!(f, "{}", symbol)?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Errors raised when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates fall outside the 3x3 grid.
    #[display("No square at row {}, column {}", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
    /// The mark counts are impossible for a legally played game.
    #[display("Board holds {} X marks against {} O marks", x, o)]
    InconsistentBoard {
        /// Number of X marks on the board.
        x: usize,
        /// Number of O marks on the board.
        o: usize,
    },
}

impl std::error::Error for MoveError {}

/// Errors raised when a query's state precondition does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StateError {
    /// Turn and best-move queries require a game still in progress.
    #[display("Game is already over")]
    GameOver,
    /// Outcome queries require a finished game.
    #[display("Game is still in progress")]
    GameInProgress,
    /// The mark counts are impossible for a legally played game.
    #[display("Board holds {} X marks against {} O marks", x, o)]
    InvalidParity {
        /// Number of X marks on the board.
        x: usize,
        /// Number of O marks on the board.
        o: usize,
    },
}

impl std::error::Error for StateError {}
