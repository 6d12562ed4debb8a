//! The move-selection algorithms, weakest first

use crate::{board::Board, WIDTH};

pub mod random;

pub mod defensive;

pub mod minimax;

pub mod alphabeta;

pub mod negamax;

/// Score of a won position for the fixed-depth minimax searchers
pub const WIN_SCORE: i32 = 1000;

/// Returns the columns ordered from the middle outwards, left before right on
/// equal distance, as the middle columns are often better moves
pub const fn move_order() -> [usize; WIDTH] {
    let mut move_order = [0; WIDTH];
    let center = WIDTH / 2;
    let mut i = 0;
    while i < WIDTH {
        move_order[i] = if i % 2 == 0 {
            center + i / 2
        } else {
            center - (i / 2 + 1)
        };
        i += 1;
    }
    move_order
}

/// The leftmost playable column, used when a search singles out no move
pub fn first_available(board: &Board) -> Option<usize> {
    (0..WIDTH).find(|&column| board.playable(column))
}
