//! Game history tracking

use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Outcome};

/// A game in progress: the current board plus the moves that led to it.
///
/// The outcome is never stored; it is derived from the current board on
/// demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    moves: Vec<Move>,
}

impl Game {
    /// Start a game from the empty board
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            moves: Vec::new(),
        }
    }

    /// Start a game from an arbitrary position
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            moves: Vec::new(),
        }
    }

    /// Play a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game already ended, or
    /// [`crate::Error::InvalidMove`] if the target cell is occupied.
    pub fn play(&mut self, mv: Move) -> Result<(), crate::Error> {
        if self.board.terminal() {
            return Err(crate::Error::GameOver);
        }

        self.board = self.board.result(mv)?;
        self.moves.push(mv);
        Ok(())
    }

    /// Current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far, in order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Derive the outcome of the game so far
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_play_records_history() {
        let mut game = Game::new();
        game.play(mv(1, 1)).unwrap();
        game.play(mv(0, 0)).unwrap();

        assert_eq!(game.moves(), &[mv(1, 1), mv(0, 0)]);
        assert_eq!(game.board().player(), Player::X);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_play_rejects_occupied_cell() {
        let mut game = Game::new();
        game.play(mv(1, 1)).unwrap();

        let err = game.play(mv(1, 1)).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidMove { row: 1, col: 1 }));
        // The failed move is not recorded
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn test_play_rejects_finished_game() {
        let mut game = Game::new();
        // X wins on the top row
        for &(row, col) in &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(mv(row, col)).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::XWins);

        let err = game.play(mv(2, 2)).unwrap_err();
        assert!(matches!(err, crate::Error::GameOver));
    }
}
