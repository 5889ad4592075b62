//! Exhaustive minimax search over the game tree.
//!
//! X is the maximizing player and O the minimizing player. The search
//! visits every reachable position below the one it is given, with no
//! pruning and no depth limit. The 3x3 board bounds the tree well under
//! 9! nodes, so a full traversal is instant.

use crate::board::{Board, StateError};
use crate::position::Position;
use crate::types::{Outcome, Player};
use tracing::{debug, instrument};

/// Utility of a finished game from X's perspective: +1 if X won, -1 if O
/// won, 0 for a draw.
pub fn score(outcome: Outcome) -> i8 {
    match outcome {
        Outcome::Winner(Player::X) => 1,
        Outcome::Winner(Player::O) => -1,
        Outcome::Draw => 0,
    }
}

/// Guaranteed value of the board under optimal play by both sides.
///
/// A finished game is worth the score of its outcome. Otherwise the value
/// is the maximum (X to move) or minimum (O to move) over the values of
/// every successor board.
///
/// # Errors
///
/// [`StateError::InvalidParity`] if the mark counts are impossible for a
/// legally played game.
pub fn value(board: &Board) -> Result<i8, StateError> {
    if let Ok(outcome) = board.outcome() {
        return Ok(score(outcome));
    }
    let mover = board.to_move()?;
    let mut best = match mover {
        Player::X => i8::MIN,
        Player::O => i8::MAX,
    };
    for pos in board.legal_moves() {
        let child = value(&board.place(pos, mover))?;
        best = match mover {
            Player::X => best.max(child),
            Player::O => best.min(child),
        };
    }
    Ok(best)
}

/// Optimal move for the player whose turn it is.
///
/// Every legal move's successor is evaluated with [`value`]; the move
/// whose successor value is maximal (X to move) or minimal (O to move)
/// wins. When several moves share the optimal value, the earliest square
/// in board order is returned.
///
/// # Errors
///
/// [`StateError::GameOver`] if the game has finished (there is no move to
/// make), [`StateError::InvalidParity`] on a board unreachable by legal
/// play.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Result<Position, StateError> {
    let mover = board.to_move()?;
    let mut choice: Option<(Position, i8)> = None;
    for pos in board.legal_moves() {
        let child = value(&board.place(pos, mover))?;
        let improves = match choice {
            None => true,
            Some((_, best)) => match mover {
                Player::X => child > best,
                Player::O => child < best,
            },
        };
        if improves {
            choice = Some((pos, child));
        }
    }
    match choice {
        Some((pos, best)) => {
            debug!(position = ?pos, value = best, "selected optimal move");
            Ok(pos)
        }
        None => Err(StateError::GameOver),
    }
}
