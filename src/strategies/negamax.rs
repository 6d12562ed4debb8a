//! The strongest strategy: negamax with alpha-beta pruning, memoisation and
//! center-first move ordering

use log::{debug, trace};

use super::{first_available, move_order};
use crate::{board::*, heuristic, outcome::Outcome, transposition_table::*};

/// Default maximum search depth in plies
pub const DEFAULT_DEPTH: usize = 7;

/// Score of a won position before adjusting for the distance to the win
pub const WIN_SCORE: i32 = 100_000;

// symmetric bounds so that negating the window never overflows
const INFINITY: i32 = i32::MAX;

/// A depth-limited negamax search for one player
///
/// # Position Scoring
/// Scores are always from the point of view of the player to move at a node.
/// A win scores `WIN_SCORE - ply` and a loss `-WIN_SCORE + ply`, where `ply`
/// is the distance from the root, so quicker wins and slower losses are
/// preferred. Positions at the depth limit are scored by the heuristic.
pub struct Negamax {
    board: Board,
    player: Player,
    max_depth: usize,

    /// The number of nodes searched by this `Negamax` so far (for diagnostics only)
    pub node_count: usize,
    transposition_table: TranspositionTable,
}

impl Negamax {
    /// Creates a searcher choosing moves for `player` at the default depth
    pub fn new(board: Board, player: Player) -> Self {
        Self {
            board,
            player,
            max_depth: DEFAULT_DEPTH,
            node_count: 0,
            transposition_table: TranspositionTable::new(),
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns a move that wins on the spot, or else one that stops the
    /// opponent from winning on their next move
    pub fn immediate_move(&self) -> Option<usize> {
        let columns = self.board.available_columns();
        let completes_four = |column: usize, player: Player| {
            self.board
                .with_move(column, player)
                .map_or(false, |next| next.outcome().winner() == Some(player))
        };

        if let Some(column) = columns.iter().copied().find(|&c| completes_four(c, self.player)) {
            trace!("{} wins in column {}", self.player, column);
            return Some(column);
        }
        let opponent = self.player.other();
        if let Some(column) = columns.iter().copied().find(|&c| completes_four(c, opponent)) {
            trace!("{} blocks column {}", self.player, column);
            return Some(column);
        }
        None
    }

    /// Positions cached by the latest [`Negamax::search`]
    pub fn table(&self) -> &TranspositionTable {
        &self.transposition_table
    }

    /// Runs the recursive search from the root with a fresh transposition table
    ///
    /// Returns the score of the position and the best move found, if any
    pub fn search(&mut self) -> (i32, Option<usize>) {
        self.transposition_table = TranspositionTable::new();
        let board = self.board;
        self.negamax(&board, 0, -INFINITY, INFINITY, self.player)
    }

    fn negamax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        beta: i32,
        mover: Player,
    ) -> (i32, Option<usize>) {
        self.node_count += 1;

        match board.outcome() {
            Outcome::Ongoing => {}
            Outcome::Draw => return (0, None),
            outcome => {
                let ply = depth as i32;
                return if outcome.winner() == Some(mover) {
                    (WIN_SCORE - ply, None)
                } else {
                    (-WIN_SCORE + ply, None)
                };
            }
        }

        if depth >= self.max_depth {
            return (heuristic::evaluate(board, mover), None);
        }

        let key = board.key(mover);
        if let Some(score) = self.transposition_table.get(key) {
            return (score, None);
        }

        let mut best_score = -INFINITY;
        let mut best_move = None;

        for column in move_order().iter().copied().filter(|&c| board.playable(c)) {
            let next = match board.with_move(column, mover) {
                Some(next) => next,
                None => continue,
            };

            // no sibling can beat a win on this very move
            if next.outcome().winner() == Some(mover) {
                let score = WIN_SCORE - (depth + 1) as i32;
                self.transposition_table.set(key, score);
                return (score, Some(column));
            }

            // the search window is flipped for the other player
            let (child_score, _) = self.negamax(&next, depth + 1, -beta, -alpha, mover.other());
            let score = -child_score;
            if score > best_score {
                best_score = score;
                best_move = Some(column);
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        self.transposition_table.set(key, best_score);
        (best_score, best_move)
    }

    /// Picks a move: immediate tactics first, then the full search, falling
    /// back to the leftmost playable column
    pub fn choose_move(&mut self) -> Option<usize> {
        if let Some(column) = self.immediate_move() {
            return Some(column);
        }
        if self.board.is_full() {
            return None;
        }

        let (score, best_move) = self.search();
        debug!(
            "negamax depth {}: score {}, move {:?}, {} nodes, {} positions cached",
            self.max_depth,
            score,
            best_move,
            self.node_count,
            self.transposition_table.len()
        );
        best_move.or_else(|| first_available(&self.board))
    }
}
