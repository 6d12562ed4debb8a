//! Plain fixed-depth minimax
//!
//! The depth cutoff scores 0 rather than consulting the heuristic, which
//! makes this the weakest of the searching strategies.

use log::debug;

use super::{first_available, WIN_SCORE};
use crate::board::*;

/// Default search depth in plies
pub const DEFAULT_DEPTH: usize = 4;

/// Exhaustive minimax search for one player
pub struct Minimax {
    board: Board,
    player: Player,

    /// The number of nodes searched by this `Minimax` so far (for diagnostics only)
    pub node_count: usize,
}

impl Minimax {
    /// Creates a searcher choosing moves for `player`
    pub fn new(board: Board, player: Player) -> Self {
        Self {
            board,
            player,
            node_count: 0,
        }
    }

    /// Searches `depth` plies and returns the score and best move
    ///
    /// Returns `(0, None)` when `depth` is 0 or the board has no playable column.
    pub fn search(&mut self, depth: usize) -> (i32, Option<usize>) {
        let board = self.board;
        self.minimax(&board, depth, true)
    }

    fn minimax(&mut self, board: &Board, depth: usize, maximizing: bool) -> (i32, Option<usize>) {
        self.node_count += 1;

        match board.outcome().winner() {
            Some(winner) if winner == self.player => return (WIN_SCORE, None),
            Some(_) => return (-WIN_SCORE, None),
            None => {}
        }
        let columns = board.available_columns();
        if depth == 0 || columns.is_empty() {
            return (0, None);
        }

        let mover = if maximizing {
            self.player
        } else {
            self.player.other()
        };
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for column in columns {
            let next = match board.with_move(column, mover) {
                Some(next) => next,
                None => continue,
            };
            let (score, _) = self.minimax(&next, depth - 1, !maximizing);

            // first column reaching the best score is kept
            if (maximizing && score > best_score) || (!maximizing && score < best_score) {
                best_score = score;
                best_move = Some(column);
            }
        }

        (best_score, best_move)
    }

    /// Picks a move, falling back to the leftmost playable column
    pub fn choose_move(&mut self, depth: usize) -> Option<usize> {
        let (score, best_move) = self.search(depth);
        debug!(
            "minimax depth {}: score {}, move {:?}, {} nodes",
            depth, score, best_move, self.node_count
        );
        best_move.or_else(|| first_available(&self.board))
    }
}
