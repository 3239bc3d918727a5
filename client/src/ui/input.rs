use common::games::tictactoe::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Move(Position),
    Restart,
    Quit,
}

/// Accepts `row col` (space or comma separated), `r`/`restart` and `q`/`quit`.
pub fn parse_command(line: &str) -> Result<PlayerCommand, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(PlayerCommand::Quit),
        "r" | "restart" => return Ok(PlayerCommand::Restart),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err(format!("Expected 'row col', got '{}'", trimmed));
    };

    let row = row
        .parse::<usize>()
        .map_err(|_| format!("Invalid row '{}'", row))?;
    let col = col
        .parse::<usize>()
        .map_err(|_| format!("Invalid column '{}'", col))?;

    Ok(PlayerCommand::Move(Position::new(row, col)))
}
