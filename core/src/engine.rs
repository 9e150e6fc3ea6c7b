use serde::{Deserialize, Serialize};

use crate::*;

/// Discrete game state produced by one turn of [`update_state`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    New,
    InProgress,
    Won,
    Lost,
    LifeLost,
    InvalidInput,
}

impl GameState {
    /// Terminal states end the session; everything else keeps prompting.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::New
    }
}

/// Advances the game by one turn.
///
/// The tile under the player is marked visited, the direction is applied as
/// a single bounds-clamped step, and the destination tile decides the
/// outcome: a hazard costs a life (`Lost` once lives run out), the last row
/// or column wins, anything else is `InProgress`.
///
/// Directions are matched exactly against `"up"`, `"down"`, `"left"`, and
/// `"right"`; any other input returns `InvalidInput` without touching the
/// position or the move count. A step blocked by the board edge also leaves
/// both unchanged. Only successful steps count as moves.
pub fn update_state(board: &mut Board, player: &mut Player, direction: &str) -> GameState {
    let (mut row, mut column) = player.coords();

    // the origin tile is marked visited even when the input turns out invalid
    board[(row, column)].is_visited = true;

    match direction {
        "up" => {
            if row > 0 {
                row -= 1;
                player.increment_moves();
            }
        }
        "down" => {
            if row < board.rows() - 1 {
                row += 1;
                player.increment_moves();
            }
        }
        "left" => {
            if column > 0 {
                column -= 1;
                player.increment_moves();
            }
        }
        "right" => {
            if column < board.columns() - 1 {
                column += 1;
                player.increment_moves();
            }
        }
        _ => return GameState::InvalidInput,
    }

    // board dimensions are clamped to the notation range, so these hold
    player.set_row(row).expect("clamped row is in range");
    player
        .set_column(column)
        .expect("clamped column is in range");

    if board[(row, column)].is_hazard {
        player.decrement_lives();
        return if player.lives() <= 0 {
            GameState::Lost
        } else {
            GameState::LifeLost
        };
    }

    if column == board.columns() - 1 || row == board.rows() - 1 {
        GameState::Won
    } else {
        GameState::InProgress
    }
}
