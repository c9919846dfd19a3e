//! Round/match mode state machine.
//!
//! Transitions are validated: anything not listed in `next_mode` is rejected
//! with [`ModeError::InvalidTransition`] rather than silently ignored.

use thiserror::Error;

/// Current round mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Idle demo state before a match starts.
    Attract,
    /// Round armed, ball held at center awaiting launch.
    Serve,
    /// Ball live.
    Play,
    Paused,
    /// Match decided; only a reset leaves this state.
    Over,
}

/// Commands that drive mode transitions. `Start`, `Launch`, `Pause`, `Resume`
/// and `Reset` come from the embedding layer's input handling; `PointScored`
/// and `MatchWon` are issued by the scoring system only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Launch,
    Pause,
    Resume,
    Reset,
    PointScored,
    MatchWon,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModeError {
    #[error("command {command:?} is invalid in mode {mode:?}")]
    InvalidTransition { mode: Mode, command: Command },
    #[error("difficulty can only change between rounds, not in mode {mode:?}")]
    DifficultyLocked { mode: Mode },
}

/// Mode holder with validated transitions.
#[derive(Debug, Clone, Copy)]
pub struct ModeMachine {
    mode: Mode,
}

impl ModeMachine {
    pub fn new() -> Self {
        Self { mode: Mode::Attract }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn can_apply(&self, command: Command) -> bool {
        self.next_mode(command).is_some()
    }

    /// Apply a command, returning the new mode or rejecting the transition.
    pub fn apply(&mut self, command: Command) -> Result<Mode, ModeError> {
        match self.next_mode(command) {
            Some(next) => {
                log::debug!("mode {:?} -> {:?} ({:?})", self.mode, next, command);
                self.mode = next;
                Ok(next)
            }
            None => Err(ModeError::InvalidTransition {
                mode: self.mode,
                command,
            }),
        }
    }

    fn next_mode(&self, command: Command) -> Option<Mode> {
        match (self.mode, command) {
            (Mode::Attract, Command::Start) => Some(Mode::Serve),
            (Mode::Serve, Command::Launch) => Some(Mode::Play),
            (Mode::Play, Command::Pause) => Some(Mode::Paused),
            (Mode::Paused, Command::Resume) => Some(Mode::Play),
            (Mode::Play, Command::PointScored) => Some(Mode::Serve),
            (Mode::Play, Command::MatchWon) => Some(Mode::Over),
            // Manual reset is valid from any state but attract itself
            (Mode::Serve, Command::Reset)
            | (Mode::Play, Command::Reset)
            | (Mode::Paused, Command::Reset)
            | (Mode::Over, Command::Reset) => Some(Mode::Attract),
            _ => None,
        }
    }
}

impl Default for ModeMachine {
    fn default() -> Self {
        Self::new()
    }
}
