use crate::error::Rejected;
use crate::game::{Game, GameState};

/// Intents the shell forwards from keys and buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    Continue,
    Pause,
    Resume,
    MoveLeft,
    MoveRight,
    SoftDown,
    SoftDropStart,
    SoftDropStop,
    Rotate,
    HardDrop,
    Restart,
    ToMenu,
    Exit,
}

/// What a successfully applied command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A movement command; `false` when blocked or outside play.
    Moved(bool),
    Transitioned(GameState),
    Exit,
}

impl Command {
    pub fn label(self) -> &'static str {
        match self {
            Command::Start => "Start",
            Command::Continue => "Continue",
            Command::Pause => "Pause",
            Command::Resume => "Resume",
            Command::MoveLeft => "Left",
            Command::MoveRight => "Right",
            Command::SoftDown => "Down",
            Command::SoftDropStart => "Soft drop",
            Command::SoftDropStop => "Soft drop off",
            Command::Rotate => "Rotate",
            Command::HardDrop => "Drop",
            Command::Restart => "Restart",
            Command::ToMenu => "Menu",
            Command::Exit => "Exit",
        }
    }

    /// Whether the command can do anything in `state`, given whether a
    /// suspended session exists.
    pub fn is_available(self, state: GameState, suspended: bool) -> bool {
        match self {
            Command::Start | Command::Exit => state == GameState::Menu,
            Command::Continue => state == GameState::Menu && suspended,
            Command::Pause
            | Command::MoveLeft
            | Command::MoveRight
            | Command::SoftDown
            | Command::SoftDropStart
            | Command::Rotate
            | Command::HardDrop => state == GameState::Playing,
            Command::SoftDropStop => true,
            Command::Resume => state == GameState::Paused,
            Command::Restart => state == GameState::GameOver,
            Command::ToMenu => matches!(state, GameState::Paused | GameState::GameOver),
        }
    }
}

impl Game {
    /// Single entry point for every shell intent.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, Rejected> {
        let outcome = match command {
            Command::Start => Outcome::Transitioned(self.start()?),
            Command::Continue => Outcome::Transitioned(self.continue_session()?),
            Command::Pause => Outcome::Transitioned(self.pause()?),
            Command::Resume => Outcome::Transitioned(self.resume()?),
            Command::Restart => Outcome::Transitioned(self.restart()?),
            Command::ToMenu => Outcome::Transitioned(self.to_menu()?),
            Command::Exit => {
                self.exit()?;
                Outcome::Exit
            }
            Command::MoveLeft => Outcome::Moved(self.move_left()),
            Command::MoveRight => Outcome::Moved(self.move_right()),
            Command::SoftDown => Outcome::Moved(self.soft_down()),
            Command::SoftDropStart => Outcome::Moved(self.begin_soft_drop()),
            Command::SoftDropStop => {
                self.end_soft_drop();
                Outcome::Moved(true)
            }
            Command::Rotate => Outcome::Moved(self.rotate()),
            Command::HardDrop => Outcome::Moved(self.hard_drop().is_some()),
        };
        Ok(outcome)
    }
}
