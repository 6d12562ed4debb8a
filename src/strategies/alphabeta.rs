//! Fixed-depth minimax with alpha-beta pruning
//!
//! Columns are tried left to right, exactly like [`Minimax`], so both pick the
//! same move at the same depth. Pruning only skips branches.
//!
//! [`Minimax`]: super::minimax::Minimax

use log::debug;

use super::{first_available, WIN_SCORE};
use crate::board::*;

/// Default search depth in plies
pub const DEFAULT_DEPTH: usize = 5;

pub struct AlphaBeta {
    board: Board,
    player: Player,

    /// The number of nodes searched by this `AlphaBeta` so far (for diagnostics only)
    pub node_count: usize,
}

impl AlphaBeta {
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
        self.alpha_beta(&board, depth, i32::MIN, i32::MAX, true)
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<usize>) {
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
        let mut best_move = None;

        for column in columns {
            let next = match board.with_move(column, mover) {
                Some(next) => next,
                None => continue,
            };
            let (score, _) = self.alpha_beta(&next, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if score > alpha {
                    alpha = score;
                    best_move = Some(column);
                }
            } else if score < beta {
                beta = score;
                best_move = Some(column);
            }

            // the other player will never allow this branch
            if alpha >= beta {
                break;
            }
        }

        (if maximizing { alpha } else { beta }, best_move)
    }

    /// Picks a move, falling back to the leftmost playable column
    pub fn choose_move(&mut self, depth: usize) -> Option<usize> {
        let (score, best_move) = self.search(depth);
        debug!(
            "alpha-beta depth {}: score {}, move {:?}, {} nodes",
            depth, score, best_move, self.node_count
        );
        best_move.or_else(|| first_available(&self.board))
    }
}
