use common::config::Validate;
use common::games::tictactoe::{Difficulty, FirstPlayer};
use serde::{Deserialize, Serialize};

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 7;

/// Largest board on which the exhaustive search finishes in interactive time.
pub const MAX_SEARCHABLE_BOARD_SIZE: usize = 3;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub board_size: usize,
    pub difficulty: Difficulty,
    pub first_player: FirstPlayer,
}

impl GameConfig {
    pub fn search_is_tractable(&self) -> bool {
        self.difficulty == Difficulty::Easy || self.board_size <= MAX_SEARCHABLE_BOARD_SIZE
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < MIN_BOARD_SIZE || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "Board size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            difficulty: Difficulty::Medium,
            first_player: FirstPlayer::Human,
        }
    }
}
