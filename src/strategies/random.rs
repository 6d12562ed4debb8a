use rand::{seq::IndexedRandom, Rng};

use crate::board::Board;

/// Picks a playable column uniformly at random, `None` on a full board
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.available_columns().choose(rng).copied()
}
