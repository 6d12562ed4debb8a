//! Static evaluation of unfinished positions
//!
//! Only used when a search is cut off before reaching a terminal state.

use crate::board::*;

/// Bonus per own tile in the center column
pub const CENTER_WEIGHT: i32 = 3;

/// Scores one 4-cell window from counts of own, opponent and empty cells
///
/// Blocking an opponent's three is weighted above building an own three.
fn score_window(own: usize, opponent: usize, empty: usize) -> i32 {
    let mut score = 0;

    match (own, empty) {
        (4, _) => score += 1000,
        (3, 1) => score += 100,
        (2, 2) => score += 10,
        _ => {}
    }

    match (opponent, empty) {
        (4, _) => score -= 1000,
        (3, 1) => score -= 120,
        (2, 2) => score -= 5,
        _ => {}
    }

    score
}

/// Scores `board` from the point of view of `player`, higher is better
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let own_cell = player.cell();
    let opponent_cell = player.other().cell();

    // center column preference
    let center = Board::center_column();
    let center_count = (0..crate::HEIGHT)
        .filter(|&row| board.get(row, center) == own_cell)
        .count() as i32;
    let mut score = center_count * CENTER_WEIGHT;

    for window in WINDOWS.iter() {
        let (mut own, mut opponent, mut empty) = (0, 0, 0);
        for &(row, column) in window.iter() {
            match board.get(row, column) {
                c if c == own_cell => own += 1,
                c if c == opponent_cell => opponent += 1,
                _ => empty += 1,
            }
        }
        score += score_window(own, opponent, empty);
    }

    score
}
