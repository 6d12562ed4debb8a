//! Array-backed game board with gravity-respecting moves

use anyhow::{anyhow, Result};

use std::fmt;

use crate::{outcome::*, HEIGHT, WIDTH};

/// One of the two sides in a game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the opposing player
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The cell occupied by this player's tiles
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player owning this cell, if any
    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
            Cell::Empty => None,
        }
    }

    fn symbol(&self) -> char {
        match self {
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
            Cell::Empty => '.',
        }
    }
}

/// The number of distinct 4-cell lines on the board
pub const NUM_WINDOWS: usize =
    HEIGHT * (WIDTH - 3) + (HEIGHT - 3) * WIDTH + 2 * (HEIGHT - 3) * (WIDTH - 3);

/// Every set of 4 collinear cells as `(row, column)` pairs: horizontal,
/// vertical and both diagonals, for all valid offsets
pub const WINDOWS: [[(usize, usize); 4]; NUM_WINDOWS] = windows();

const fn windows() -> [[(usize, usize); 4]; NUM_WINDOWS] {
    // (row step, column step)
    const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

    let mut windows = [[(0, 0); 4]; NUM_WINDOWS];
    let mut n = 0;
    let mut row = 0;
    while row < HEIGHT {
        let mut column = 0;
        while column < WIDTH {
            let mut d = 0;
            while d < DIRECTIONS.len() {
                let (dr, dc) = DIRECTIONS[d];
                let end_row = row as isize + 3 * dr;
                let end_column = column as isize + 3 * dc;
                if end_row < HEIGHT as isize && end_column >= 0 && end_column < WIDTH as isize {
                    let mut i = 0;
                    while i < 4 {
                        windows[n][i] = (
                            (row as isize + i as isize * dr) as usize,
                            (column as isize + i as isize * dc) as usize,
                        );
                        i += 1;
                    }
                    n += 1;
                }
                d += 1;
            }
            column += 1;
        }
        row += 1;
    }
    assert!(n == NUM_WINDOWS);
    windows
}

/// A Connect 4 position
///
/// Row 0 is the top of the board. Tiles fall to the lowest empty row of a
/// column, so within a column the occupied cells always form a contiguous
/// run starting from the bottom row.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
    num_moves: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
            num_moves: 0,
        }
    }

    /// Builds a board from a string of one-indexed columns, players alternating
    /// from [`Player::One`]
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    // abort if the position is won at any point
                    if board.outcome().winner().is_some() {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    if !board.apply_move(column - 1, player) {
                        return Err(anyhow!("Invalid move, column {} full", column));
                    }
                    player = player.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Builds a board from its rows, top row first
    ///
    /// `.` is an empty cell, `X` belongs to [`Player::One`] and `O` to [`Player::Two`].
    pub fn from_rows(rows: [&str; HEIGHT]) -> Result<Self> {
        let mut board = Self::new();

        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != WIDTH {
                return Err(anyhow!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    WIDTH
                ));
            }
            for (column, symbol) in line.chars().enumerate() {
                board.cells[row][column] = match symbol {
                    '.' => Cell::Empty,
                    'X' | 'x' => Cell::PlayerOne,
                    'O' | 'o' => Cell::PlayerTwo,
                    _ => return Err(anyhow!("could not parse '{}' as a cell", symbol)),
                };
                if !board.cells[row][column].is_empty() {
                    board.num_moves += 1;
                }
            }
        }

        // no empty cell may sit beneath an occupied one
        for column in 0..WIDTH {
            for row in 1..HEIGHT {
                if !board.cells[row - 1][column].is_empty() && board.cells[row][column].is_empty() {
                    return Err(anyhow!(
                        "Invalid position, floating tile in column {}",
                        column + 1
                    ));
                }
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// The player due to move, assuming [`Player::One`] opened the game
    pub fn side_to_move(&self) -> Player {
        if self.num_moves % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    pub const fn center_column() -> usize {
        WIDTH / 2
    }

    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.playable(column))
    }

    /// Columns that can still take a tile, left to right
    pub fn available_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| self.playable(column)).collect()
    }

    /// Drops a tile for `player` into `column`
    ///
    /// Returns `false` without touching the board if the column is full.
    pub fn apply_move(&mut self, column: usize, player: Player) -> bool {
        if column >= WIDTH {
            return false;
        }
        for row in (0..HEIGHT).rev() {
            if self.cells[row][column].is_empty() {
                self.cells[row][column] = player.cell();
                self.num_moves += 1;
                return true;
            }
        }
        false
    }

    /// Removes the top tile of `column`, reversing [`Board::apply_move`]
    ///
    /// Returns `false` if the column is empty.
    pub fn undo_move(&mut self, column: usize) -> bool {
        if column >= WIDTH {
            return false;
        }
        for row in 0..HEIGHT {
            if !self.cells[row][column].is_empty() {
                self.cells[row][column] = Cell::Empty;
                self.num_moves -= 1;
                return true;
            }
        }
        false
    }

    /// Returns a copy of the board with the move applied, or `None` if the column is full
    pub fn with_move(&self, column: usize, player: Player) -> Option<Self> {
        let mut next = *self;
        if next.apply_move(column, player) {
            Some(next)
        } else {
            None
        }
    }

    pub fn outcome(&self) -> Outcome {
        evaluate_outcome(self)
    }

    // key for transposition table, two bits per cell and one for the side to move
    pub fn key(&self, side_to_move: Player) -> u128 {
        let mut key = 0u128;
        for (idx, cell) in self.cells.iter().flatten().enumerate() {
            let bits: u128 = match cell {
                Cell::Empty => 0,
                Cell::PlayerOne => 1,
                Cell::PlayerTwo => 2,
            };
            key |= bits << (2 * idx);
        }
        if side_to_move == Player::Two {
            key |= 1u128 << (2 * WIDTH * HEIGHT);
        }
        key
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            let line: String = row.iter().map(Cell::symbol).collect();
            writeln!(f, "{}", line)?;
        }
        let columns: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        write!(f, "{}", columns)
    }
}
