//! Terminal-state detection

use crate::board::*;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Ongoing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::PlayerOneWin => Some(Player::One),
            Outcome::PlayerTwoWin => Some(Player::Two),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    fn win_for(player: Player) -> Self {
        match player {
            Player::One => Outcome::PlayerOneWin,
            Player::Two => Outcome::PlayerTwoWin,
        }
    }
}

/// Classifies a position
///
/// Every 4-cell line is checked before concluding that nobody has won. A full
/// board without a four-in-a-row is a draw.
pub fn evaluate_outcome(board: &Board) -> Outcome {
    for window in WINDOWS.iter() {
        let (row, column) = window[0];
        if let Some(owner) = board.get(row, column).owner() {
            if window[1..]
                .iter()
                .all(|&(r, c)| board.get(r, c).owner() == Some(owner))
            {
                return Outcome::win_for(owner);
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
