//! Noughts-and-crosses game logic with an exhaustive minimax solver.
//!
//! The crate is a pure, synchronous computation library: boards are
//! immutable values, applying a move returns a new board, and the solver
//! walks the full game tree to find the move with the best guaranteed
//! outcome. There is no UI and no persisted state; frontends are expected
//! to drive the library through [`Board`] and the [`best_move`] /
//! [`value`] entry points.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Position`], [`Player`], [`Square`],
//!   and [`Outcome`] cover state, legal-move enumeration, and move
//!   application.
//! - **Rules**: [`check_winner`], [`is_full`], and [`is_terminal`] are
//!   pure predicates over a board.
//! - **Search**: [`score`], [`value`], and [`best_move`] implement
//!   minimax with X maximizing and O minimizing.
//!
//! # Example
//!
//! ```
//! use noughts::{best_move, value, Board, StateError};
//!
//! let board = Board::new();
//! // Optimal play from the empty board is a forced draw.
//! assert_eq!(value(&board)?, 0);
//!
//! let opening = best_move(&board)?;
//! let board = board.apply(opening).expect("opening move is legal");
//! assert_eq!(board.legal_moves().len(), 8);
//! # Ok::<(), StateError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod position;
mod rules;
mod search;
mod types;

// Crate-level exports - board model
pub use board::{Board, MoveError, StateError};
pub use position::Position;
pub use types::{Outcome, Player, Square};

// Crate-level exports - rules
pub use rules::{check_winner, is_draw, is_full, is_terminal};

// Crate-level exports - search
pub use search::{best_move, score, value};
