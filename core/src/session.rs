use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Ready -> Playing
/// - Ready -> Won | Lost
/// - Playing <-> Paused
/// - Playing -> Won | Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Board shown, nothing revealed yet
    Ready,
    Playing,
    Paused,
    Won,
    Lost,
}

impl Phase {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Whether a play clock should be running in this phase.
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Playing)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Ready
    }
}

/// One game from the first click to the end, with pause support.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    board: Board,
    phase: Phase,
    steps: u32,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Ok(Self::from_board(Board::new(config, seed)?))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            phase: Default::default(),
            steps: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn seed(&self) -> u64 {
        self.board.seed()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Reveal requests that reached the board.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_board(&self.board)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.check_not_paused()?;
        let outcome = self.board.reveal(coords)?;
        self.steps += 1;

        if self.phase == Phase::Ready && outcome != RevealOutcome::Blocked {
            log::debug!("Session started at {:?}", coords);
            self.phase = Phase::Playing;
        }
        self.sync_with_board();
        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.check_not_paused()?;
        self.board.toggle_flag(coords)
    }

    pub fn pause(&mut self) -> bool {
        if self.phase == Phase::Playing {
            self.phase = Phase::Paused;
            true
        } else {
            false
        }
    }

    pub fn resume(&mut self) -> bool {
        if self.phase == Phase::Paused {
            self.phase = Phase::Playing;
            true
        } else {
            false
        }
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.pause() || self.resume()
    }

    /// New board with the same configuration.
    pub fn restart(&mut self, seed: u64) -> Result<()> {
        log::debug!("Restarting session with seed {}", seed);
        *self = Self::new(self.config(), seed)?;
        Ok(())
    }

    fn sync_with_board(&mut self) {
        let phase = match self.board.status() {
            BoardStatus::Playing => return,
            BoardStatus::Won => Phase::Won,
            BoardStatus::Lost => Phase::Lost,
        };
        if !self.phase.is_final() {
            self.phase = phase;
            self.board.reveal_all_mines();
            log::debug!("Session ended: {:?} after {} steps", phase, self.steps);
        }
    }

    fn check_not_paused(&self) -> Result<()> {
        if self.phase == Phase::Paused {
            Err(GameError::Paused)
        } else {
            Ok(())
        }
    }
}
