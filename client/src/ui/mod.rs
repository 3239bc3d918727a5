mod board_view;
mod input;

pub use board_view::{describe_result, describe_winning_line, render_board, render_move_history};
pub use input::{parse_command, PlayerCommand};
