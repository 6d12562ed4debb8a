//! A computer opponent for the board game 'Connect 4'
//!
//! The engine offers a ladder of move-selection strategies, from a uniformly
//! random pick up to a memoised negamax search with alpha-beta pruning.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{board::{Board, Player}, engine::{Engine, Strategy}};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player two threatens to complete the bottom row
//! let board = Board::from_moves("717263")?;
//! let engine = Engine::default();
//! let column = engine.choose_move(&board, Strategy::Negamax, Player::One)?;
//!
//! assert_eq!(column, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod outcome;

pub mod heuristic;

pub mod transposition_table;

pub mod strategies;

pub mod config;

pub mod engine;

pub mod arena;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// a four-in-a-row has to fit in every direction
const_assert!(WIDTH >= 4 && HEIGHT >= 4);
// ensure that two bits per cell plus the side to move fit in a u128 key
const_assert!(2 * WIDTH * HEIGHT < 128);
