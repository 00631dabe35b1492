use macroquad::input::KeyCode;

use crate::command::Command;
use crate::game::GameState;

/// Every key the game listens to.
pub const BOUND_KEYS: [KeyCode; 11] = [
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Down,
    KeyCode::Up,
    KeyCode::X,
    KeyCode::Space,
    KeyCode::Enter,
    KeyCode::P,
    KeyCode::Escape,
    KeyCode::M,
    KeyCode::Q,
];

/// Keys that auto-repeat while held instead of firing once per press.
pub fn repeats(key: KeyCode) -> bool {
    matches!(key, KeyCode::Left | KeyCode::Right)
}

/// Command for a key going down in `state`.
pub fn on_press(key: KeyCode, state: GameState, suspended: bool) -> Option<Command> {
    use GameState::*;
    let cmd = match (key, state) {
        (KeyCode::Left, Playing) => Command::MoveLeft,
        (KeyCode::Right, Playing) => Command::MoveRight,
        (KeyCode::Down, Playing) => Command::SoftDropStart,
        (KeyCode::Up | KeyCode::X, Playing) => Command::Rotate,
        (KeyCode::Space, Playing) => Command::HardDrop,
        (KeyCode::P | KeyCode::Escape, Playing) => Command::Pause,
        (KeyCode::P | KeyCode::Escape, Paused) => Command::Resume,
        (KeyCode::M, Paused | GameOver) => Command::ToMenu,
        (KeyCode::Enter, Menu) if suspended => Command::Continue,
        (KeyCode::Enter, Menu) => Command::Start,
        (KeyCode::Enter, GameOver) => Command::Restart,
        (KeyCode::Q | KeyCode::Escape, Menu) => Command::Exit,
        _ => return None,
    };
    Some(cmd)
}

/// Command for a key coming back up.
pub fn on_release(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Down => Some(Command::SoftDropStop),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_key_toggles() {
        assert_eq!(on_press(KeyCode::P, GameState::Playing, false), Some(Command::Pause));
        assert_eq!(on_press(KeyCode::P, GameState::Paused, false), Some(Command::Resume));
    }

    #[test]
    fn enter_prefers_continue_when_suspended() {
        assert_eq!(on_press(KeyCode::Enter, GameState::Menu, false), Some(Command::Start));
        assert_eq!(on_press(KeyCode::Enter, GameState::Menu, true), Some(Command::Continue));
        assert_eq!(on_press(KeyCode::Enter, GameState::GameOver, false), Some(Command::Restart));
    }

    #[test]
    fn movement_keys_are_silent_outside_play() {
        for key in [KeyCode::Left, KeyCode::Right, KeyCode::Down, KeyCode::Up, KeyCode::Space] {
            assert_eq!(on_press(key, GameState::Paused, false), None);
            assert_eq!(on_press(key, GameState::GameOver, false), None);
        }
    }

    #[test]
    fn releasing_down_ends_soft_drop() {
        assert_eq!(on_press(KeyCode::Down, GameState::Playing, false), Some(Command::SoftDropStart));
        assert_eq!(on_release(KeyCode::Down), Some(Command::SoftDropStop));
        assert_eq!(on_release(KeyCode::Left), None);
    }

    #[test]
    fn only_horizontal_keys_repeat() {
        let repeating: Vec<_> = BOUND_KEYS.iter().copied().filter(|&k| repeats(k)).collect();
        assert_eq!(repeating, vec![KeyCode::Left, KeyCode::Right]);
    }
}
