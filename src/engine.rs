//! Maps a strategy choice to the search that implements it

use anyhow::{anyhow, Result};
use log::debug;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::{
    board::*,
    config::EngineConfig,
    strategies::{
        alphabeta::AlphaBeta, defensive::defensive_move, minimax::Minimax, negamax::Negamax,
        random::random_move,
    },
};

/// The selectable computer opponents
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Strategy {
    Random,
    Defensive,
    Minimax,
    Negamax,
    AlphaBeta,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Random,
        Strategy::Defensive,
        Strategy::Minimax,
        Strategy::Negamax,
        Strategy::AlphaBeta,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Random => "Random",
            Strategy::Defensive => "Defensive",
            Strategy::Minimax => "Minimax",
            Strategy::Negamax => "Negamax",
            Strategy::AlphaBeta => "Alpha-Beta",
        }
    }

    /// Looks a strategy up by name, case-insensitively
    ///
    /// Unknown names fall back to [`Strategy::Random`].
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(name))
            .unwrap_or_else(|| {
                debug!("unknown strategy '{}', playing randomly", name);
                Strategy::Random
            })
    }
}

impl FromStr for Strategy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Chooses moves with any [`Strategy`] at the configured depths
///
/// Holds no state between calls, so one engine can serve many games at once.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Picks a column for `player` to play on `board`
    ///
    /// Fails if the board has no playable column.
    pub fn choose_move(&self, board: &Board, strategy: Strategy, player: Player) -> Result<usize> {
        if board.is_full() {
            return Err(anyhow!("no legal move, the board is full"));
        }

        let mut rng = rand::rng();
        let column = match strategy {
            Strategy::Random => random_move(board, &mut rng),
            Strategy::Defensive => {
                defensive_move(board, player).or_else(|| random_move(board, &mut rng))
            }
            Strategy::Minimax => {
                Minimax::new(*board, player).choose_move(self.config.minimax_depth)
            }
            Strategy::AlphaBeta => {
                AlphaBeta::new(*board, player).choose_move(self.config.alpha_beta_depth)
            }
            Strategy::Negamax => Negamax::new(*board, player)
                .with_max_depth(self.config.negamax_depth)
                .choose_move(),
        };

        let column = column.ok_or_else(|| anyhow!("{} found no legal move", strategy))?;
        debug!("{} plays column {} for {}", strategy, column, player);
        Ok(column)
    }
}
