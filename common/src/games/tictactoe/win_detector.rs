use super::board::Board;
use super::types::{Mark, Position, WinningLine};

/// Symbol of the first completed line, scanning rows, then columns, then the
/// main diagonal, then the anti-diagonal.
pub fn line_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|line| line.mark)
}

pub fn winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.rows();
    let size = board.size();
    let last = size - 1;

    for row in 0..size {
        if let Some(mark) = uniform_mark((0..size).map(|col| cells[row][col])) {
            return Some(WinningLine::new(mark, Position::new(row, 0), Position::new(row, last)));
        }
    }

    for col in 0..size {
        if let Some(mark) = uniform_mark((0..size).map(|row| cells[row][col])) {
            return Some(WinningLine::new(mark, Position::new(0, col), Position::new(last, col)));
        }
    }

    if let Some(mark) = uniform_mark((0..size).map(|i| cells[i][i])) {
        return Some(WinningLine::new(mark, Position::new(0, 0), Position::new(last, last)));
    }

    if let Some(mark) = uniform_mark((0..size).map(|i| cells[i][last - i])) {
        return Some(WinningLine::new(mark, Position::new(0, last), Position::new(last, 0)));
    }

    None
}

pub fn is_full(board: &Board) -> bool {
    board
        .rows()
        .iter()
        .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
}

fn uniform_mark(mut cells: impl Iterator<Item = Mark>) -> Option<Mark> {
    let first = cells.next()?;
    if first == Mark::Empty {
        return None;
    }
    cells.all(|cell| cell == first).then_some(first)
}
