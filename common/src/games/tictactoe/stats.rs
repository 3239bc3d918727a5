use std::fmt;
use std::time::Duration;

use super::types::GameStatus;

/// Running tally for one client session. Survives restarts of the game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStats {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
    think_times: Vec<Duration>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. In-progress statuses are ignored.
    pub fn record_result(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn record_think_time(&mut self, think_time: Duration) {
        self.think_times.push(think_time);
    }

    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn average_think_time(&self) -> Duration {
        if self.think_times.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.think_times.iter().sum();
        total / self.think_times.len() as u32
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X: {}  O: {}  Draw: {}  Games: {}  Avg AI time: {:.3}s",
            self.x_wins,
            self.o_wins,
            self.draws,
            self.games(),
            self.average_think_time().as_secs_f64()
        )
    }
}
