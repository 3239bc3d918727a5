use common::games::tictactoe::{Board, GameStatus, HUMAN_MARK, MoveRecord, WinningLine};

/// Board with row and column indices, one row per line.
pub fn render_board(board: &Board) -> String {
    let header: String = (0..board.size()).map(|col| format!("{:>2}", col)).collect();
    let mut out = format!("   {}\n", header);

    for (row, cells) in board.rows().iter().enumerate() {
        let line: String = cells.iter().map(|cell| format!("{:>2}", cell.as_char())).collect();
        out.push_str(&format!("{:>2} {}\n", row, line));
    }
    out
}

pub fn describe_result(status: GameStatus) -> &'static str {
    match status.winner() {
        Some(mark) if mark == HUMAN_MARK => "You win!",
        Some(_) => "Computer wins!",
        None if status == GameStatus::Draw => "It's a draw.",
        None => "Game in progress.",
    }
}

pub fn describe_winning_line(line: &WinningLine) -> String {
    format!("{} completes {} to {}", line.mark, line.start, line.end)
}

/// Numbered move list. Computer moves carry their think time.
pub fn render_move_history(history: &[MoveRecord]) -> String {
    let mut out = String::from("Moves:\n");
    for (index, record) in history.iter().enumerate() {
        let timing = record
            .think_time
            .map(|time| format!(" in {:.3}s", time.as_secs_f64()))
            .unwrap_or_default();
        out.push_str(&format!(
            "{:>3}. {} {}{}\n",
            index + 1,
            record.mark,
            record.position,
            timing
        ));
    }
    out
}
