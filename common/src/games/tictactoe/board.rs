use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::error::EngineError;
use super::types::{Mark, Position};

/// Square grid of marks. The size is fixed at construction and is never zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Vec<Vec<Mark>>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::invalid_board("board size must be at least 1"));
        }
        Ok(Self {
            cells: vec![vec![Mark::Empty; size]; size],
        })
    }

    pub fn from_rows(rows: Vec<Vec<Mark>>) -> Result<Self, EngineError> {
        if rows.is_empty() {
            return Err(EngineError::invalid_board("board has no rows"));
        }

        let size = rows.len();
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(EngineError::invalid_board(format!(
                "row {} has {} cells, expected {}",
                index,
                row.len(),
                size
            )));
        }

        Ok(Self { cells: rows })
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> &[Vec<Mark>] {
        &self.cells
    }

    pub fn get(&self, position: Position) -> Option<Mark> {
        self.cells.get(position.row)?.get(position.col).copied()
    }

    /// Empty cells in row-major order. The search relies on this order for tie-breaking.
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn place(&mut self, position: Position, mark: Mark) -> Result<(), EngineError> {
        let mark = mark.ensure_symbol()?;
        match self.get(position) {
            None => Err(EngineError::InvalidCoordinate {
                row: position.row,
                col: position.col,
                size: self.size(),
            }),
            Some(Mark::Empty) => {
                self.cells[position.row][position.col] = mark;
                Ok(())
            }
            Some(_) => Err(EngineError::CellOccupied {
                row: position.row,
                col: position.col,
            }),
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(Mark::Empty);
        }
    }

    /// Marks an empty cell for the lifetime of the returned guard.
    pub(crate) fn place_scoped(&mut self, position: Position, mark: Mark) -> Placement<'_> {
        debug_assert_eq!(self.get(position), Some(Mark::Empty));
        self.cells[position.row][position.col] = mark;
        Placement {
            board: self,
            position,
        }
    }
}

/// Clears its cell on drop, including during unwinding.
pub(crate) struct Placement<'a> {
    board: &'a mut Board,
    position: Position,
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.cells[self.position.row][self.position.col] = Mark::Empty;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                f.write_str("/")?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

/// Parses rows separated by `/` or newlines, e.g. `"X.O/.X./..O"`.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(index, line)| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| {
                        Mark::from_char(c).ok_or_else(|| {
                            EngineError::invalid_board(format!(
                                "unexpected character '{}' in row {}",
                                c, index
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Board::from_rows(rows)
    }
}
