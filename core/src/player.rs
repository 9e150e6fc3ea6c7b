use serde::{Deserialize, Serialize};

use crate::{Coord, Coord2, GameError, MAX_DIM, Result, notation};

pub const DEFAULT_LIVES: i32 = 3;
pub const DEFAULT_START: &str = "A1";

/// Per-session player state: position, remaining lives, and move count.
///
/// The position is kept inside the notation range `[0, MAX_DIM)` on both
/// axes, so [`Player::position`] can always render it. Lives are allowed to
/// drop to zero and below; interpreting `lives <= 0` as a loss is the
/// engine's job, not the player's.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    row: Coord,
    column: Coord,
    lives: i32,
    moves: u32,
}

impl Player {
    pub fn new(initial_lives: i32, starting_position: &str) -> Result<Self> {
        let (row, column) = notation::from_notation(starting_position)?;
        Ok(Self {
            row,
            column,
            lives: initial_lives,
            moves: 0,
        })
    }

    pub fn row(&self) -> Coord {
        self.row
    }

    pub fn column(&self) -> Coord {
        self.column
    }

    pub fn coords(&self) -> Coord2 {
        (self.row, self.column)
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Current position in notation form, e.g. row 0 column 0 is `"A1"`.
    pub fn position(&self) -> String {
        notation::to_notation(self.row, self.column)
            .expect("player position stays within the notation range")
    }

    /// Fails with `OutOfRange` when `row` is outside `[0, MAX_DIM)`.
    pub fn set_row(&mut self, row: Coord) -> Result<()> {
        if row >= MAX_DIM {
            return Err(GameError::OutOfRange);
        }
        self.row = row;
        Ok(())
    }

    /// Fails with `OutOfRange` when `column` is outside `[0, MAX_DIM)`.
    pub fn set_column(&mut self, column: Coord) -> Result<()> {
        if column >= MAX_DIM {
            return Err(GameError::OutOfRange);
        }
        self.column = column;
        Ok(())
    }

    pub fn increment_moves(&mut self) {
        self.moves += 1;
    }

    /// No clamping at zero; see the type-level note on loss interpretation.
    pub fn decrement_lives(&mut self) {
        self.lives -= 1;
    }

    /// Final score is the number of moves taken; lower is better.
    pub fn final_score(&self) -> u32 {
        self.moves
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(DEFAULT_LIVES, DEFAULT_START).expect("default starting position is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_player_starts_at_a1_with_three_lives() {
        let player = Player::default();

        assert_eq!(player.coords(), (0, 0));
        assert_eq!(player.position(), "A1");
        assert_eq!(player.lives(), 3);
        assert_eq!(player.moves(), 0);
    }

    #[test]
    fn new_parses_the_starting_position() {
        let player = Player::new(5, "C7").unwrap();

        assert_eq!(player.coords(), (6, 2));
        assert_eq!(player.lives(), 5);
    }

    #[test]
    fn new_rejects_malformed_starting_positions() {
        assert_eq!(Player::new(3, "Z9"), Err(GameError::InvalidFormat));
        assert_eq!(Player::new(3, "A11"), Err(GameError::InvalidFormat));
    }

    #[test]
    fn setters_enforce_both_endpoints_of_the_range() {
        let mut player = Player::default();

        player.set_row(0).unwrap();
        player.set_row(7).unwrap();
        player.set_column(0).unwrap();
        player.set_column(7).unwrap();
        assert_eq!(player.set_row(8), Err(GameError::OutOfRange));
        assert_eq!(player.set_column(8), Err(GameError::OutOfRange));
        // rejected writes leave the position alone
        assert_eq!(player.coords(), (7, 7));
    }

    #[test]
    fn position_tracks_the_setters() {
        let mut player = Player::default();

        player.set_row(3).unwrap();
        player.set_column(4).unwrap();

        assert_eq!(player.position(), "E4");
    }

    #[test]
    fn lives_may_go_below_zero() {
        let mut player = Player::new(1, "A1").unwrap();

        player.decrement_lives();
        player.decrement_lives();

        assert_eq!(player.lives(), -1);
    }

    #[test]
    fn final_score_is_the_move_count() {
        let mut player = Player::default();

        player.increment_moves();
        player.increment_moves();

        assert_eq!(player.final_score(), 2);
        assert_eq!(player.moves(), 2);
    }
}
