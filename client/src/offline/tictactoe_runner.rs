use std::error::Error;
use std::io::{BufRead, Write};

use common::games::SessionRng;
use common::games::tictactoe::{
    FirstPlayer, GameStatus, MinimaxBot, SessionStats, TicTacToeGameState,
};
use common::log;

use crate::ui::{
    describe_result, describe_winning_line, parse_command, render_board, render_move_history,
    PlayerCommand,
};

type RunResult<T> = Result<T, Box<dyn Error>>;

enum GameEnd {
    Finished(GameStatus),
    Restart,
    Quit,
}

/// Human-vs-computer games over a line-based terminal.
pub struct TicTacToeRunner<R, W> {
    input: R,
    output: W,
    bot: MinimaxBot,
    first_player: FirstPlayer,
    rng: SessionRng,
    stats: SessionStats,
}

impl<R: BufRead, W: Write> TicTacToeRunner<R, W> {
    pub fn new(input: R, output: W, bot: MinimaxBot, first_player: FirstPlayer, rng: SessionRng) -> Self {
        Self {
            input,
            output,
            bot,
            first_player,
            rng,
            stats: SessionStats::new(),
        }
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn run(&mut self) -> RunResult<()> {
        let mut state = TicTacToeGameState::new(self.bot.size(), self.first_player)?;

        loop {
            match self.play_game(&mut state)? {
                GameEnd::Quit => break,
                GameEnd::Restart => {
                    writeln!(self.output, "Restarting.")?;
                    state.reset();
                }
                GameEnd::Finished(status) => {
                    self.stats.record_result(status);
                    log!("Game over: {:?} after {} moves", status, state.move_history().len());
                    writeln!(self.output, "{}", describe_result(status))?;
                    if let Some(line) = state.winning_line() {
                        writeln!(self.output, "{}", describe_winning_line(&line))?;
                    }
                    write!(self.output, "{}", render_move_history(state.move_history()))?;
                    writeln!(self.output, "{}", self.stats)?;

                    if !self.confirm("Play again? [y/N] ")? {
                        break;
                    }
                    state.reset();
                }
            }
        }

        writeln!(self.output, "Final score: {}", self.stats)?;
        Ok(())
    }

    fn play_game(&mut self, state: &mut TicTacToeGameState) -> RunResult<GameEnd> {
        log!(
            "New {0}x{0} game against the {1} bot, {2:?} moves first",
            self.bot.size(),
            self.bot.difficulty(),
            self.first_player
        );

        loop {
            if state.status().is_over() {
                write!(self.output, "{}", render_board(state.board()))?;
                return Ok(GameEnd::Finished(state.status()));
            }

            if state.is_computer_turn() {
                let Some(turn) = state.play_computer_turn(&self.bot, &mut self.rng)? else {
                    return Ok(GameEnd::Finished(state.status()));
                };
                self.stats.record_think_time(turn.think_time);
                log!(
                    "Computer played {} in {:.3}s",
                    turn.position,
                    turn.think_time.as_secs_f64()
                );
                writeln!(self.output, "Computer plays {}", turn.position)?;
                continue;
            }

            write!(self.output, "{}", render_board(state.board()))?;
            write!(self.output, "Your move (row col), r to restart, q to quit: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(GameEnd::Quit);
            };

            match parse_command(&line) {
                Ok(PlayerCommand::Quit) => return Ok(GameEnd::Quit),
                Ok(PlayerCommand::Restart) => return Ok(GameEnd::Restart),
                Ok(PlayerCommand::Move(position)) => {
                    if let Err(err) = state.place_mark(position) {
                        writeln!(self.output, "{}", err)?;
                    }
                }
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }

    fn read_line(&mut self) -> RunResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn confirm(&mut self, prompt: &str) -> RunResult<bool> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}
