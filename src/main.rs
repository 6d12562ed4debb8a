use anyhow::Result;
use log::info;

use std::time::Duration;

use connect4_engine::{
    arena::run_match,
    board::{Board, Player},
    config::EngineConfig,
    engine::Engine,
    outcome::Outcome,
    WIDTH,
};

mod terminal;
use terminal::*;

const DEFAULT_ARENA_GAMES: usize = 20;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EngineConfig::load_or_default();
    info!("Search depths: {:?}", config);
    let engine = Engine::new(config);

    println!("Welcome to Connect 4\n");

    loop {
        match prompt("Play a game (p), run an arena match (a) or quit (q): ")?
            .to_lowercase()
            .chars()
            .next()
        {
            Some('p') => play(&engine)?,
            Some('a') => arena(&engine)?,
            Some('q') => break,
            _ => println!("Unknown answer given"),
        }
    }
    Ok(())
}

/// Human against the computer, sides switching after every game
fn play(engine: &Engine) -> Result<()> {
    let strategy = ask_strategy("Choose your opponent: ")?;
    let mut human_first = ask_yes_no("Do you want to move first? y/n: ")?;
    let delay = Duration::from_millis(engine.config().move_delay_ms);

    loop {
        let human = if human_first { Player::One } else { Player::Two };
        let computer = human.other();
        let mut board = Board::new();
        let mut player = Player::One;

        // game loop
        loop {
            display(&board)?;

            match board.outcome() {
                Outcome::Ongoing => {
                    let column = if player == computer {
                        println!("{} is thinking...", strategy);
                        std::thread::sleep(delay);

                        let column = engine.choose_move(&board, strategy, computer)?;
                        println!("Computer plays {}", column + 1);
                        column

                    // human player
                    } else {
                        let input = prompt("Move input > ")?;
                        match input.parse::<usize>() {
                            Ok(column @ 1..=WIDTH) => column - 1,
                            _ => {
                                println!(
                                    "Invalid move '{}', columns must be between 1 and {}",
                                    input, WIDTH
                                );
                                continue;
                            }
                        }
                    };

                    if !board.apply_move(column, player) {
                        println!("Invalid move, column {} full", column + 1);
                        // try the move again
                        continue;
                    }
                    player = player.other();
                }

                // end states
                Outcome::Draw => {
                    println!("Draw!");
                    break;
                }
                outcome => {
                    if outcome.winner() == Some(human) {
                        println!("You win!");
                    } else {
                        println!("{} wins!", strategy);
                    }
                    break;
                }
            }
        }

        if !ask_yes_no("Play again? y/n: ")? {
            return Ok(());
        }
        human_first = !human_first;
        if human_first {
            println!("You move first this time");
        } else {
            println!("The computer moves first this time");
        }
    }
}

fn arena(engine: &Engine) -> Result<()> {
    let first = ask_strategy("First strategy: ")?;
    let second = ask_strategy("Second strategy: ")?;
    let games = prompt(&format!("Number of games [{}]: ", DEFAULT_ARENA_GAMES))?
        .parse::<usize>()
        .unwrap_or(DEFAULT_ARENA_GAMES);

    let result = run_match(engine, first, second, games, true)?;
    println!("{}", result);
    Ok(())
}
