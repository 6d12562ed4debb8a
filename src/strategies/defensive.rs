use log::trace;

use crate::board::*;

/// Looks one ply ahead for an opponent win and returns the column that blocks it
///
/// Columns are tried left to right. `None` means no single opponent move wins
/// on the spot, so there is nothing to block.
pub fn defensive_move(board: &Board, player: Player) -> Option<usize> {
    let opponent = player.other();
    let block = board.available_columns().into_iter().find(|&column| {
        board
            .with_move(column, opponent)
            .map_or(false, |next| next.outcome().winner() == Some(opponent))
    });
    if let Some(column) = block {
        trace!("blocking {} in column {}", opponent, column);
    }
    block
}
