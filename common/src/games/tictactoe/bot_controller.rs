use crate::error::EngineError;
use crate::games::SessionRng;
use crate::log_debug;
use super::board::Board;
use super::types::{Difficulty, Mark, Position};
use super::win_detector::{is_full, line_winner};

/// Share of medium-tier turns played as a uniformly random move.
pub const MEDIUM_RANDOM_MOVE_PROBABILITY: f64 = 0.3;

const WIN_SCORE: i32 = 10;

/// Result of a full minimax search from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub position: Position,
    pub score: i32,
    pub nodes_visited: u64,
}

/// Computer opponent bound to one board size and difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxBot {
    size: usize,
    difficulty: Difficulty,
}

impl MinimaxBot {
    pub fn new(size: usize, difficulty: Difficulty) -> Self {
        Self { size, difficulty }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn find_best_move(
        &self,
        board: &Board,
        mark: Mark,
        rng: &mut SessionRng,
    ) -> Result<Option<Position>, EngineError> {
        if board.size() != self.size {
            return Err(EngineError::invalid_board(format!(
                "expected a {0}x{0} board, got {1}x{1}",
                self.size,
                board.size()
            )));
        }
        find_best_move(board, mark, self.difficulty, rng)
    }
}

/// Picks a move for `mark`, or `None` when the board has no empty cell.
///
/// The difficulty decides once per call between a uniformly random empty cell
/// and the exhaustive search. The board is never modified.
pub fn find_best_move(
    board: &Board,
    mark: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<Option<Position>, EngineError> {
    let mark = mark.ensure_symbol()?;

    match difficulty {
        Difficulty::Easy => Ok(calculate_random_move(board, rng)),
        Difficulty::Medium => {
            if rng.chance(MEDIUM_RANDOM_MOVE_PROBABILITY) {
                Ok(calculate_random_move(board, rng))
            } else {
                calculate_minimax_move(board, mark)
            }
        }
        Difficulty::Hard => calculate_minimax_move(board, mark),
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

pub fn calculate_minimax_move(board: &Board, mark: Mark) -> Result<Option<Position>, EngineError> {
    Ok(minimax_search(board, mark)?.map(|report| report.position))
}

/// Exhaustive minimax from `bot_mark`'s point of view.
///
/// A win scores `10 - depth`, a loss `depth - 10` and a draw `0`, where the
/// position right after the root move has depth 0. Ties keep the first cell in
/// row-major order.
pub fn minimax_search(board: &Board, bot_mark: Mark) -> Result<Option<SearchReport>, EngineError> {
    let opponent_mark = bot_mark.opponent().ok_or(EngineError::InvalidSymbol)?;
    let available_moves = board.empty_cells();

    if available_moves.is_empty() {
        return Ok(None);
    }

    let mut board = board.clone();
    let mut search = Search {
        bot_mark,
        opponent_mark,
        nodes_visited: 0,
    };

    let mut best: Option<(Position, i32)> = None;
    for position in available_moves {
        let score = {
            let mut placed = board.place_scoped(position, bot_mark);
            search.minimax(&mut placed, 0, false)
        };

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((position, score));
        }
    }

    let report = best.map(|(position, score)| SearchReport {
        position,
        score,
        nodes_visited: search.nodes_visited,
    });

    if let Some(report) = &report {
        log_debug!(
            "Minimax for {} on {}: {} scores {} after {} nodes",
            bot_mark,
            board,
            report.position,
            report.score,
            report.nodes_visited
        );
    }

    Ok(report)
}

struct Search {
    bot_mark: Mark,
    opponent_mark: Mark,
    nodes_visited: u64,
}

impl Search {
    fn minimax(&mut self, board: &mut Board, depth: usize, is_maximizing: bool) -> i32 {
        self.nodes_visited += 1;

        if let Some(score) = self.terminal_score(board, depth) {
            return score;
        }

        let mark = if is_maximizing {
            self.bot_mark
        } else {
            self.opponent_mark
        };

        let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };
        for position in board.empty_cells() {
            let mut placed = board.place_scoped(position, mark);
            let score = self.minimax(&mut placed, depth + 1, !is_maximizing);

            best_score = if is_maximizing {
                best_score.max(score)
            } else {
                best_score.min(score)
            };
        }

        best_score
    }

    fn terminal_score(&self, board: &Board, depth: usize) -> Option<i32> {
        let depth = depth as i32;
        match line_winner(board) {
            Some(winner) if winner == self.bot_mark => Some(WIN_SCORE - depth),
            Some(_) => Some(depth - WIN_SCORE),
            None if is_full(board) => Some(0),
            None => None,
        }
    }
}
