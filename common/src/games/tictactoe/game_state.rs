use std::time::{Duration, Instant};

use crate::error::EngineError;
use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::MinimaxBot;
use super::types::{FirstPlayer, GameStatus, Mark, Position, WinningLine};
use super::win_detector::{is_full, line_winner, winning_line};

pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerTurn {
    pub mark: Mark,
    pub position: Position,
    pub think_time: Duration,
}

/// One played move. `think_time` is set for computer moves only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mark: Mark,
    pub position: Position,
    pub think_time: Option<Duration>,
}

/// One human-vs-computer game: the board, whose turn it is and what has been played.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    first_player: FirstPlayer,
    current_mark: Mark,
    status: GameStatus,
    move_history: Vec<MoveRecord>,
}

impl TicTacToeGameState {
    pub fn new(size: usize, first_player: FirstPlayer) -> Result<Self, EngineError> {
        Ok(Self {
            board: Board::new(size)?,
            first_player,
            current_mark: opening_mark(first_player),
            status: GameStatus::InProgress,
            move_history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == COMPUTER_MARK
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(&self.board)
    }

    pub fn place_mark(&mut self, position: Position) -> Result<GameStatus, EngineError> {
        self.apply_move(position, None)
    }

    /// Lets `bot` play the current mark. `Ok(None)` when no empty cell is left.
    pub fn play_computer_turn(
        &mut self,
        bot: &MinimaxBot,
        rng: &mut SessionRng,
    ) -> Result<Option<ComputerTurn>, EngineError> {
        if self.status.is_over() {
            return Err(EngineError::GameOver);
        }

        let mark = self.current_mark;
        let started = Instant::now();
        let Some(position) = bot.find_best_move(&self.board, mark, rng)? else {
            return Ok(None);
        };
        let think_time = started.elapsed();

        self.apply_move(position, Some(think_time))?;

        Ok(Some(ComputerTurn {
            mark,
            position,
            think_time,
        }))
    }

    /// Starts over on an empty board with the same size and opening player.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_mark = opening_mark(self.first_player);
        self.status = GameStatus::InProgress;
        self.move_history.clear();
    }

    fn apply_move(
        &mut self,
        position: Position,
        think_time: Option<Duration>,
    ) -> Result<GameStatus, EngineError> {
        if self.status.is_over() {
            return Err(EngineError::GameOver);
        }

        self.board.place(position, self.current_mark)?;
        self.move_history.push(MoveRecord {
            mark: self.current_mark,
            position,
            think_time,
        });

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(self.status)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(status) = line_winner(&self.board).and_then(GameStatus::won_by) {
            self.status = status;
            return;
        }

        if is_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}

fn opening_mark(first_player: FirstPlayer) -> Mark {
    match first_player {
        FirstPlayer::Human => HUMAN_MARK,
        FirstPlayer::Computer => COMPUTER_MARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Difficulty;

    fn play(state: &mut TicTacToeGameState, moves: &[(usize, usize)]) -> GameStatus {
        let mut status = state.status();
        for &(row, col) in moves {
            status = state.place_mark(Position::new(row, col)).unwrap();
        }
        status
    }

    #[test]
    fn test_computer_opens_with_o() {
        let state = TicTacToeGameState::new(3, FirstPlayer::Computer).unwrap();

        assert_eq!(state.current_mark(), COMPUTER_MARK);
        assert!(state.is_computer_turn());
    }

    #[test]
    fn test_turns_alternate_and_history_is_recorded() {
        let mut state = TicTacToeGameState::new(3, FirstPlayer::Human).unwrap();
        play(&mut state, &[(0, 0), (1, 1)]);

        let history: Vec<(Mark, Position)> = state
            .move_history()
            .iter()
            .map(|record| (record.mark, record.position))
            .collect();
        assert_eq!(
            history,
            vec![(Mark::X, Position::new(0, 0)), (Mark::O, Position::new(1, 1))]
        );
        assert!(state.move_history().iter().all(|record| record.think_time.is_none()));
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_win_ends_the_game() {
        let mut state = TicTacToeGameState::new(3, FirstPlayer::Human).unwrap();
        let status = play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(status, GameStatus::XWon);
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.winning_line().map(|line| line.start), Some(Position::new(0, 0)));
        assert_eq!(state.place_mark(Position::new(2, 2)), Err(EngineError::GameOver));
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        let mut state = TicTacToeGameState::new(3, FirstPlayer::Human).unwrap();
        let status = play(
            &mut state,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );

        assert_eq!(status, GameStatus::Draw);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut state = TicTacToeGameState::new(3, FirstPlayer::Human).unwrap();
        play(&mut state, &[(1, 1)]);

        assert_eq!(
            state.place_mark(Position::new(1, 1)),
            Err(EngineError::CellOccupied { row: 1, col: 1 })
        );
        assert!(matches!(
            state.place_mark(Position::new(5, 0)),
            Err(EngineError::InvalidCoordinate { .. })
        ));
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.move_history().len(), 1);
    }

    #[test]
    fn test_computer_turn_blocks_and_passes_turn_back() {
        let mut state = TicTacToeGameState::new(3, FirstPlayer::Human).unwrap();
        play(&mut state, &[(0, 0), (1, 1), (0, 1)]);
        let bot = MinimaxBot::new(3, Difficulty::Hard);
        let mut rng = SessionRng::new(1);

        let turn = state.play_computer_turn(&bot, &mut rng).unwrap().unwrap();

        assert_eq!(turn.mark, COMPUTER_MARK);
        assert_eq!(turn.position, Position::new(0, 2));
        assert_eq!(
            state.move_history().last(),
            Some(&MoveRecord {
                mark: COMPUTER_MARK,
                position: Position::new(0, 2),
                think_time: Some(turn.think_time),
            })
        );
        assert_eq!(state.current_mark(), HUMAN_MARK);
        assert!(!state.is_computer_turn());
    }

    #[test]
    fn test_computer_can_win_single_cell_board() {
        let mut state = TicTacToeGameState::new(1, FirstPlayer::Computer).unwrap();
        let bot = MinimaxBot::new(1, Difficulty::Easy);
        let mut rng = SessionRng::new(1);

        state.play_computer_turn(&bot, &mut rng).unwrap();

        assert_eq!(state.status(), GameStatus::OWon);
        assert_eq!(state.play_computer_turn(&bot, &mut rng), Err(EngineError::GameOver));
    }

    #[test]
    fn test_reset_clears_board_and_restores_opening_mark() {
        let mut state = TicTacToeGameState::new(3, FirstPlayer::Computer).unwrap();
        play(&mut state, &[(0, 0), (2, 2)]);

        state.reset();

        assert_eq!(state.board(), &Board::new(3).unwrap());
        assert_eq!(state.current_mark(), COMPUTER_MARK);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.move_history().is_empty());
    }
}
