//! Engine-versus-engine matches, for comparing the strength of strategies

use anyhow::{anyhow, Result};
use indicatif::*;
use log::info;
use rayon::prelude::*;

use std::fmt;

use crate::{board::*, engine::*, outcome::Outcome, HEIGHT, WIDTH};

/// Tally of a match between two strategies
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MatchResult {
    pub first: Strategy,
    pub second: Strategy,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
}

impl MatchResult {
    pub fn games(&self) -> usize {
        self.first_wins + self.second_wins + self.draws
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {} ({} draws in {} games)",
            self.first,
            self.first_wins,
            self.second_wins,
            self.second,
            self.draws,
            self.games()
        )
    }
}

/// Plays a full game, `player_one` moving first, and returns the final position
pub fn play_game(engine: &Engine, player_one: Strategy, player_two: Strategy) -> Result<Board> {
    let mut board = Board::new();
    let mut player = Player::One;

    while !board.outcome().is_terminal() {
        let strategy = match player {
            Player::One => player_one,
            Player::Two => player_two,
        };
        let column = engine.choose_move(&board, strategy, player)?;
        if !board.apply_move(column, player) {
            return Err(anyhow!("{} chose full column {}", strategy, column + 1));
        }
        // a game cannot outlast the board
        debug_assert!(board.num_moves() <= WIDTH * HEIGHT);
        player = player.other();
    }
    Ok(board)
}

/// Plays `games` games between two strategies in parallel, alternating who
/// moves first
pub fn run_match(
    engine: &Engine,
    first: Strategy,
    second: Strategy,
    games: usize,
    show_progress: bool,
) -> Result<MatchResult> {
    let progress = if show_progress {
        ProgressBar::new(games as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{msg}: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")?
            .progress_chars("█▓▒░  "),
    );
    progress.set_message(format!("{} vs {}", first, second));

    // winner of each game, in terms of the match seats
    let winners = (0..games)
        .into_par_iter()
        .map(|game| -> Result<Option<bool>> {
            let first_moves_first = game % 2 == 0;
            let board = if first_moves_first {
                play_game(engine, first, second)?
            } else {
                play_game(engine, second, first)?
            };
            progress.inc(1);

            Ok(match board.outcome() {
                Outcome::PlayerOneWin => Some(first_moves_first),
                Outcome::PlayerTwoWin => Some(!first_moves_first),
                _ => None,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    progress.finish();

    let mut result = MatchResult {
        first,
        second,
        first_wins: 0,
        second_wins: 0,
        draws: 0,
    };
    for winner in winners {
        match winner {
            Some(true) => result.first_wins += 1,
            Some(false) => result.second_wins += 1,
            None => result.draws += 1,
        }
    }
    info!("{}", result);
    Ok(result)
}
