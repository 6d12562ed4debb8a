#[cfg(test)]
pub mod test {
    use anyhow::Result;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        arena::*,
        board::*,
        config::EngineConfig,
        engine::*,
        heuristic,
        outcome::*,
        strategies::{alphabeta::*, defensive::*, minimax::*, negamax, negamax::Negamax, random::*},
    };

    // a full board without any four-in-a-row
    const DRAWN_ROWS: [&str; 6] = [
        "XXOOXXO", "OOXXOOX", "XXOOXXO", "OOXXOOX", "XXOOXXO", "OOXXOOX",
    ];

    // player two has three on the bottom row, columns 0 to 2
    const BLOCK_MOVES: &str = "717263";

    // player one has three on the bottom row, columns 1 to 3, and player two
    // has three stacked in column 0
    const WIN_MOVES: &str = "213141";

    fn shallow_engine() -> Engine {
        Engine::new(EngineConfig {
            minimax_depth: 2,
            alpha_beta_depth: 3,
            negamax_depth: 4,
            move_delay_ms: 0,
        })
    }

    #[test]
    pub fn horizontal_and_vertical_wins() -> Result<()> {
        let board = Board::from_rows([
            ".......", ".......", ".......", ".......", "OOO....", "XXXX...",
        ])?;
        assert_eq!(board.outcome(), Outcome::PlayerOneWin);

        let board = Board::from_rows([
            ".......", ".......", "......O", "......O", "X.....O", "XX....O",
        ])?;
        assert_eq!(evaluate_outcome(&board), Outcome::PlayerTwoWin);
        assert_eq!(board.outcome().winner(), Some(Player::Two));
        Ok(())
    }

    #[test]
    pub fn diagonal_wins() -> Result<()> {
        let rising = Board::from_rows([
            ".......", ".......", "...X...", "..XO...", ".XOO...", "XOOO...",
        ])?;
        assert_eq!(rising.outcome(), Outcome::PlayerOneWin);

        let falling = Board::from_rows([
            ".......", ".......", "...O...", "...XO..", "...XXO.", "...XXXO",
        ])?;
        assert_eq!(falling.outcome(), Outcome::PlayerTwoWin);
        Ok(())
    }

    #[test]
    pub fn draw_and_ongoing() -> Result<()> {
        let drawn = Board::from_rows(DRAWN_ROWS)?;
        assert!(drawn.is_full());
        assert_eq!(drawn.outcome(), Outcome::Draw);
        assert!(drawn.outcome().is_terminal());
        assert_eq!(drawn.outcome().winner(), None);

        assert_eq!(Board::new().outcome(), Outcome::Ongoing);
        assert_eq!(Board::from_moves(BLOCK_MOVES)?.outcome(), Outcome::Ongoing);
        assert!(!Board::new().outcome().is_terminal());
        Ok(())
    }

    #[test]
    pub fn window_table() {
        assert_eq!(NUM_WINDOWS, 69);
        for window in WINDOWS.iter() {
            let (row, column) = window[0];
            let (dr, dc) = (
                window[1].0 as isize - row as isize,
                window[1].1 as isize - column as isize,
            );
            for (i, &(r, c)) in window.iter().enumerate() {
                assert_eq!(r as isize, row as isize + i as isize * dr);
                assert_eq!(c as isize, column as isize + i as isize * dc);
            }
        }
    }

    #[test]
    pub fn apply_and_undo() -> Result<()> {
        let original = Board::from_moves("4433")?;
        let mut board = original;

        assert!(board.apply_move(2, Player::One));
        assert_eq!(board.get(3, 2), Cell::PlayerOne);
        assert_eq!(board.num_moves(), 5);
        assert!(board.undo_move(2));
        assert_eq!(board, original);

        assert!(!board.undo_move(0));
        assert_eq!(board, original);
        Ok(())
    }

    #[test]
    pub fn full_column() -> Result<()> {
        let original = Board::from_moves("111111")?;
        let mut board = original;

        assert!(!board.playable(0));
        assert!(!board.apply_move(0, Player::One));
        assert!(!board.apply_move(crate::WIDTH, Player::One));
        assert_eq!(board, original);
        assert_eq!(board.available_columns(), vec![1, 2, 3, 4, 5, 6]);
        assert!(board.with_move(0, Player::Two).is_none());

        assert!(Board::from_moves("1111111").is_err());
        Ok(())
    }

    #[test]
    pub fn parsing() -> Result<()> {
        assert!(Board::from_moves("48").is_err());
        assert!(Board::from_moves("4a").is_err());
        // player one already connected four in column 1
        assert!(Board::from_moves("12121213").is_err());

        let board = Board::from_moves("44")?;
        assert_eq!(board.get(5, 3), Cell::PlayerOne);
        assert_eq!(board.get(4, 3), Cell::PlayerTwo);
        assert_eq!(board.side_to_move(), Player::One);
        assert_eq!(
            board,
            Board::from_rows([
                ".......", ".......", ".......", ".......", "...O...", "...X...",
            ])?
        );

        // floating tile
        assert!(Board::from_rows([
            ".......", ".......", ".......", ".......", "...X...", ".......",
        ])
        .is_err());
        assert!(Board::from_rows([
            ".......", ".......", ".......", ".......", ".......", "...Z...",
        ])
        .is_err());
        assert!(Board::from_rows([
            ".......", ".......", ".......", ".......", ".......", "......",
        ])
        .is_err());
        Ok(())
    }

    #[test]
    pub fn position_keys() -> Result<()> {
        let board = Board::from_moves("4433")?;
        assert_ne!(board.key(Player::One), board.key(Player::Two));
        // the same tiles reached in another order
        assert_eq!(board.key(Player::One), Board::from_moves("3344")?.key(Player::One));
        assert_ne!(board.key(Player::One), Board::from_moves("3434")?.key(Player::One));
        assert_eq!(Board::new().key(Player::One), 0);
        Ok(())
    }

    #[test]
    pub fn heuristic_scores() {
        let mut board = Board::new();
        assert_eq!(heuristic::evaluate(&board, Player::One), 0);

        board.apply_move(3, Player::One);
        assert_eq!(heuristic::evaluate(&board, Player::One), 3);
        assert_eq!(heuristic::evaluate(&board, Player::Two), 0);

        // three horizontal windows hold both tiles and two empty cells
        board.apply_move(2, Player::One);
        assert_eq!(heuristic::evaluate(&board, Player::One), 33);
        assert_eq!(heuristic::evaluate(&board, Player::Two), -15);
    }

    #[test]
    pub fn random_picks_available_columns() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(7);

        let board = Board::new();
        for _ in 0..100 {
            let column = random_move(&board, &mut rng).unwrap();
            assert!(column < crate::WIDTH);
        }

        let board = Board::from_moves("111111")?;
        for _ in 0..100 {
            assert_ne!(random_move(&board, &mut rng), Some(0));
        }

        assert_eq!(random_move(&Board::from_rows(DRAWN_ROWS)?, &mut rng), None);
        Ok(())
    }

    #[test]
    pub fn defensive_blocks() -> Result<()> {
        assert_eq!(defensive_move(&Board::new(), Player::One), None);

        let board = Board::from_moves(BLOCK_MOVES)?;
        assert_eq!(defensive_move(&board, Player::One), Some(3));

        let board = Board::from_moves(WIN_MOVES)?;
        assert_eq!(defensive_move(&board, Player::One), Some(0));
        // player two is not threatened here
        assert_eq!(defensive_move(&Board::from_moves("4455")?, Player::Two), None);
        Ok(())
    }

    #[test]
    pub fn negamax_takes_immediate_win() -> Result<()> {
        let board = Board::from_moves(WIN_MOVES)?;
        for depth in [1, 3, negamax::DEFAULT_DEPTH] {
            let mut negamax = Negamax::new(board, Player::One).with_max_depth(depth);
            assert_eq!(negamax.immediate_move(), Some(4));
            assert_eq!(negamax.choose_move(), Some(4));
        }
        Ok(())
    }

    #[test]
    pub fn negamax_blocks_immediate_loss() -> Result<()> {
        let board = Board::from_moves(BLOCK_MOVES)?;
        let mut negamax = Negamax::new(board, Player::One);
        assert_eq!(negamax.choose_move(), Some(3));

        let blocked = board.with_move(3, Player::One).unwrap();
        assert_eq!(defensive_move(&blocked, Player::One), None);
        Ok(())
    }

    #[test]
    pub fn negamax_finds_double_threat() -> Result<()> {
        // player one holds columns 2 and 3 of the bottom row with every end open
        let board = Board::from_moves("3747")?;
        let mut negamax = Negamax::new(board, Player::One);
        assert_eq!(negamax.immediate_move(), None);
        assert!(negamax.table().is_empty());

        // win with the third tile from here: one, two, one
        let (score, best_move) = negamax.search();
        assert_eq!(score, negamax::WIN_SCORE - 3);
        assert_eq!(best_move, Some(4));
        assert!(negamax.node_count > 0);
        assert!(!negamax.table().is_empty());
        let cached = negamax.table().len();

        // a fresh table for every call, so repeating the search changes nothing
        assert_eq!(negamax.search(), (score, best_move));
        assert_eq!(negamax.table().len(), cached);
        Ok(())
    }

    #[test]
    pub fn negamax_on_full_board() -> Result<()> {
        let mut negamax = Negamax::new(Board::from_rows(DRAWN_ROWS)?, Player::One);
        assert_eq!(negamax.choose_move(), None);
        Ok(())
    }

    #[test]
    pub fn pruning_keeps_the_minimax_choice() -> Result<()> {
        for moves in ["", "4433", "44455", "3344", BLOCK_MOVES, WIN_MOVES, "3747", "1234567"] {
            let board = Board::from_moves(moves)?;
            let player = board.side_to_move();
            for depth in 1..=5 {
                let mut minimax = Minimax::new(board, player);
                let mut alpha_beta = AlphaBeta::new(board, player);

                assert_eq!(
                    minimax.search(depth),
                    alpha_beta.search(depth),
                    "position '{}' at depth {}",
                    moves,
                    depth
                );
                assert!(alpha_beta.node_count <= minimax.node_count);
            }
        }
        Ok(())
    }

    #[test]
    pub fn minimax_scores() -> Result<()> {
        let board = Board::from_moves(WIN_MOVES)?;
        assert_eq!(Minimax::new(board, Player::One).search(4), (1000, Some(4)));

        // a flat zero when nothing is decided within the horizon
        assert_eq!(Minimax::new(Board::new(), Player::One).search(2), (0, Some(0)));
        Ok(())
    }

    #[test]
    pub fn zero_depth_and_full_board_searches() -> Result<()> {
        assert_eq!(Minimax::new(Board::new(), Player::One).search(0), (0, None));
        assert_eq!(AlphaBeta::new(Board::new(), Player::One).search(0), (0, None));

        let drawn = Board::from_rows(DRAWN_ROWS)?;
        assert_eq!(Minimax::new(drawn, Player::One).search(3), (0, None));
        assert_eq!(AlphaBeta::new(drawn, Player::Two).search(3), (0, None));
        assert_eq!(Minimax::new(drawn, Player::One).choose_move(3), None);

        // the root falls back to the leftmost playable column
        let board = Board::from_moves("111111")?;
        assert_eq!(Minimax::new(board, Player::One).choose_move(0), Some(1));
        assert_eq!(AlphaBeta::new(board, Player::One).choose_move(0), Some(1));
        Ok(())
    }

    #[test]
    pub fn strategy_names() {
        for strategy in Strategy::ALL.iter() {
            assert_eq!(Strategy::from_name(strategy.name()), *strategy);
        }
        assert_eq!(Strategy::from_name("alpha-beta"), Strategy::AlphaBeta);
        assert_eq!(Strategy::from_name(" Negamax "), Strategy::Negamax);
        assert_eq!(Strategy::from_name("Expectimax"), Strategy::Random);
        assert_eq!("".parse::<Strategy>(), Ok(Strategy::Random));
        assert_eq!(Strategy::AlphaBeta.to_string(), "Alpha-Beta");
    }

    #[test]
    pub fn engine_choices() -> Result<()> {
        let engine = Engine::default();

        let board = Board::new();
        for strategy in Strategy::ALL.iter() {
            let column = engine.choose_move(&board, *strategy, Player::One)?;
            assert!(board.playable(column));
        }

        let board = Board::from_moves(BLOCK_MOVES)?;
        assert_eq!(engine.choose_move(&board, Strategy::Defensive, Player::One)?, 3);
        assert_eq!(engine.choose_move(&board, Strategy::Negamax, Player::One)?, 3);

        let board = Board::from_moves(WIN_MOVES)?;
        assert_eq!(engine.choose_move(&board, Strategy::Negamax, Player::One)?, 4);
        assert_eq!(engine.choose_move(&board, Strategy::Minimax, Player::One)?, 4);
        assert_eq!(engine.choose_move(&board, Strategy::AlphaBeta, Player::One)?, 4);
        Ok(())
    }

    #[test]
    pub fn engine_rejects_full_board() -> Result<()> {
        let board = Board::from_rows(DRAWN_ROWS)?;
        for strategy in Strategy::ALL.iter() {
            assert!(Engine::default()
                .choose_move(&board, *strategy, Player::One)
                .is_err());
        }
        Ok(())
    }

    #[test]
    pub fn config_parsing() -> Result<()> {
        let config = EngineConfig::from_toml("negamax_depth = 5")?;
        assert_eq!(config.negamax_depth, 5);
        assert_eq!(config.minimax_depth, 4);
        assert_eq!(config.alpha_beta_depth, 5);
        assert_eq!(config.move_delay_ms, 500);

        assert_eq!(EngineConfig::from_toml("")?, EngineConfig::default());
        assert!(EngineConfig::from_toml("minimax_depth = 0").is_err());
        assert!(EngineConfig::from_toml("minimax_depth = \"deep\"").is_err());
        assert!(EngineConfig::load("no_such_config.toml").is_err());
        Ok(())
    }

    #[test]
    pub fn arena_games_finish() -> Result<()> {
        let engine = shallow_engine();

        let board = play_game(&engine, Strategy::Negamax, Strategy::Random)?;
        assert!(board.outcome().is_terminal());

        let result = run_match(&engine, Strategy::Random, Strategy::Defensive, 6, false)?;
        assert_eq!(result.games(), 6);
        assert_eq!(result.first, Strategy::Random);
        assert_eq!(result.second, Strategy::Defensive);
        Ok(())
    }
}
