//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub(crate) fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A move targeting one cell, identified by row and column
///
/// Both coordinates are validated at construction, so a `Move` value is
/// always within board bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Create a move, validating both coordinates are within the board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if either coordinate is >= 3.
    pub fn new(row: usize, col: usize) -> Result<Move, crate::Error> {
        if row < 3 && col < 3 {
            Ok(Move { row, col })
        } else {
            Err(crate::Error::InvalidMove { row, col })
        }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    pub(crate) fn index(self) -> usize {
        self.row * 3 + self.col
    }

    pub(crate) fn from_index(index: usize) -> Move {
        Move {
            row: index / 3,
            col: index % 3,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of a game from a board's perspective, derived on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
    InProgress,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::XWins => write!(f, "X wins"),
            Outcome::OWins => write!(f, "O wins"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::InProgress => write!(f, "in progress"),
        }
    }
}

/// The 3x3 board as nine cells in row-major order
///
/// This type implements `Copy` since it's only 9 bytes; every transition
/// produces a fresh value and never mutates its input. The side to move is
/// not stored: it is derived from the mark counts by [`Board::player`],
/// so a board is nothing but its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

/// Count of each mark on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MarkCount {
    x: usize,
    o: usize,
}

impl Board {
    /// Create the starting board with all cells empty
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Build a board directly from rows of cells.
    ///
    /// No reachability validation is performed; this is intended for
    /// analyzing hand-built positions. Boards violating the alternating-play
    /// mark-count invariant give unspecified results from [`Board::player`]
    /// and the search, though line detection still works.
    pub fn from_cells(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (row, row_cells) in rows.iter().enumerate() {
            for (col, &cell) in row_cells.iter().enumerate() {
                cells[row * 3 + col] = cell;
            }
        }
        Board { cells }
    }

    /// Parse a board from nine cell characters in row-major order.
    ///
    /// Whitespace is filtered out first; `.` is an empty cell, `X`/`x` and
    /// `O`/`o`/`0` are marks.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not have exactly 9 non-whitespace
    /// characters, contains an invalid character, or its mark counts cannot
    /// arise from alternating play starting with X.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cleaned.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: cleaned.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in cleaned.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        let count = board.mark_count();
        if !(count.x == count.o || count.x == count.o + 1) {
            return Err(crate::Error::InvalidMarkCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(board)
    }

    /// Player who has the next turn, derived from the mark counts.
    ///
    /// X moves first, so equal counts mean X is to move. The result is
    /// unspecified for boards violating the mark-count invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use tictactoe::{Board, Move, Player};
    ///
    /// let board = Board::new();
    /// assert_eq!(board.player(), Player::X);
    ///
    /// let board = board.result(Move::new(0, 0).unwrap()).unwrap();
    /// assert_eq!(board.player(), Player::O);
    /// ```
    pub fn player(&self) -> Player {
        let count = self.mark_count();
        if count.x == count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// All moves targeting empty cells, in row-major order.
    ///
    /// The order is fixed because the search breaks ties by taking the first
    /// extremal move it scans; row-major enumeration makes move selection
    /// reproducible.
    pub fn actions(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(idx, _)| Move::from_index(idx))
            .collect()
    }

    /// Board resulting from the current player marking the target cell.
    ///
    /// The input board is unchanged; a fresh value is returned.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the target cell is occupied.
    #[must_use = "result returns a new board; the original is unchanged"]
    pub fn result(&self, mv: Move) -> Result<Board, crate::Error> {
        if self.cells[mv.index()] != Cell::Empty {
            return Err(crate::Error::InvalidMove {
                row: mv.row(),
                col: mv.col(),
            });
        }

        let mut next = *self;
        next.cells[mv.index()] = self.player().to_cell();
        Ok(next)
    }

    /// Winner of the first complete line in scan priority order, if any
    pub fn winner(&self) -> Option<Player> {
        lines::winning_mark(&self.cells)
    }

    /// Check if the game is over (a complete line or no empty cell left)
    pub fn terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Score of the board from X's perspective: +1 if X has won, -1 if O
    /// has won, 0 otherwise.
    ///
    /// Meaningful on terminal boards; a live board scores 0 like a draw.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Derive the game outcome for this board
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(Player::X) => Outcome::XWins,
            Some(Player::O) => Outcome::OWins,
            None if self.terminal() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Check whether the position can arise from alternating play starting
    /// with X.
    ///
    /// Catches mark counts out of balance, both players holding complete
    /// lines, and a winner whose mark counts say they did not move last.
    pub fn is_valid(&self) -> bool {
        let count = self.mark_count();
        if !(count.x == count.o || count.x == count.o + 1) {
            return false;
        }

        let x_wins = lines::has_won(&self.cells, Player::X);
        let o_wins = lines::has_won(&self.cells, Player::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner must have moved last
        if x_wins && count.x != count.o + 1 {
            return false;
        }
        if o_wins && count.x != count.o {
            return false;
        }

        true
    }

    /// Nine-character row-major encoding of the cells
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    fn mark_count(&self) -> MarkCount {
        let mut count = MarkCount { x: 0, o: 0 };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
