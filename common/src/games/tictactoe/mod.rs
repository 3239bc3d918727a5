mod board;
mod bot_controller;
mod game_state;
mod stats;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    MEDIUM_RANDOM_MOVE_PROBABILITY, MinimaxBot, SearchReport, calculate_minimax_move,
    calculate_random_move, find_best_move, minimax_search,
};
pub use game_state::{COMPUTER_MARK, ComputerTurn, HUMAN_MARK, MoveRecord, TicTacToeGameState};
pub use stats::SessionStats;
pub use types::{Difficulty, FirstPlayer, GameStatus, Mark, Position, WinningLine};
pub use win_detector::{is_full, line_winner, winning_line};
