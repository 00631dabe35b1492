use macroquad::color::Color;
use macroquad::math::{Rect, Vec2};

use crate::command::Command;
use crate::game::GameState;

const BUTTON_COLOR: Color = Color::new(0.2, 0.4, 0.8, 1.0);
const DISABLED_COLOR: Color = Color::new(0.3, 0.3, 0.3, 1.0);

const PAD_Y: f32 = 640.0;
const PAD_W: f32 = 96.0;
const PAD_H: f32 = 56.0;
const OVERLAY_X: f32 = 70.0;
const OVERLAY_W: f32 = 200.0;
const OVERLAY_H: f32 = 50.0;
const SIDE_X: f32 = 350.0;
const SIDE_W: f32 = 180.0;
const SIDE_H: f32 = 44.0;

const IN_GAME: &[GameState] = &[GameState::Playing, GameState::Paused];

/// A fixed on-screen control. Layout data only; never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Button {
    pub command: Command,
    pub rect: Rect,
    pub screens: &'static [GameState],
}

impl Button {
    const fn new(command: Command, x: f32, y: f32, w: f32, h: f32, screens: &'static [GameState]) -> Self {
        Button { command, rect: Rect { x, y, w, h }, screens }
    }

    pub fn label(&self) -> &'static str {
        self.command.label()
    }

    pub fn is_visible(&self, state: GameState) -> bool {
        self.screens.contains(&state)
    }

    pub fn is_enabled(&self, state: GameState, suspended: bool) -> bool {
        self.is_visible(state) && self.command.is_available(state, suspended)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }
}

/// Fill colour for a button, computed from whether it is enabled.
pub fn display_color(enabled: bool) -> Color {
    if enabled {
        BUTTON_COLOR
    } else {
        DISABLED_COLOR
    }
}

pub static BUTTONS: [Button; 12] = [
    // Touch pad under the board.
    Button::new(Command::MoveLeft, 20.0, PAD_Y, PAD_W, PAD_H, IN_GAME),
    Button::new(Command::Rotate, 124.0, PAD_Y, PAD_W, PAD_H, IN_GAME),
    Button::new(Command::MoveRight, 228.0, PAD_Y, PAD_W, PAD_H, IN_GAME),
    Button::new(Command::SoftDown, 332.0, PAD_Y, PAD_W, PAD_H, IN_GAME),
    Button::new(Command::HardDrop, 436.0, PAD_Y, PAD_W, PAD_H, IN_GAME),
    // Sidebar.
    Button::new(Command::Pause, SIDE_X, 520.0, SIDE_W, SIDE_H, &[GameState::Playing]),
    Button::new(Command::Resume, SIDE_X, 520.0, SIDE_W, SIDE_H, &[GameState::Paused]),
    Button::new(Command::ToMenu, SIDE_X, 572.0, SIDE_W, SIDE_H, &[GameState::Paused, GameState::GameOver]),
    // Board overlays.
    Button::new(Command::Start, OVERLAY_X, 260.0, OVERLAY_W, OVERLAY_H, &[GameState::Menu]),
    Button::new(Command::Continue, OVERLAY_X, 320.0, OVERLAY_W, OVERLAY_H, &[GameState::Menu]),
    Button::new(Command::Exit, OVERLAY_X, 380.0, OVERLAY_W, OVERLAY_H, &[GameState::Menu]),
    Button::new(Command::Restart, OVERLAY_X, 320.0, OVERLAY_W, OVERLAY_H, &[GameState::GameOver]),
];

pub fn visible(state: GameState) -> impl Iterator<Item = &'static Button> {
    BUTTONS.iter().filter(move |b| b.is_visible(state))
}

/// The enabled button under `point`, if any.
pub fn hit_test(point: Vec2, state: GameState, suspended: bool) -> Option<Command> {
    BUTTONS
        .iter()
        .find(|b| b.is_enabled(state, suspended) && b.contains(point))
        .map(|b| b.command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    fn centre(command: Command, state: GameState) -> Vec2 {
        let b = visible(state).find(|b| b.command == command).unwrap();
        b.rect.center()
    }

    #[test]
    fn pad_buttons_hit_while_playing() {
        let p = centre(Command::Rotate, GameState::Playing);
        assert_eq!(hit_test(p, GameState::Playing, false), Some(Command::Rotate));
    }

    #[test]
    fn pad_is_shown_but_disabled_while_paused() {
        let p = centre(Command::HardDrop, GameState::Paused);
        assert_eq!(hit_test(p, GameState::Paused, false), None);
        let drop = visible(GameState::Paused).find(|b| b.command == Command::HardDrop).unwrap();
        assert!(!drop.is_enabled(GameState::Paused, false));
    }

    #[test]
    fn shared_slot_resolves_by_state() {
        let p = centre(Command::Pause, GameState::Playing);
        assert_eq!(hit_test(p, GameState::Playing, false), Some(Command::Pause));
        assert_eq!(hit_test(p, GameState::Paused, false), Some(Command::Resume));

        let q = centre(Command::Continue, GameState::Menu);
        assert_eq!(hit_test(q, GameState::GameOver, false), Some(Command::Restart));
    }

    #[test]
    fn continue_needs_a_suspended_session() {
        let p = centre(Command::Continue, GameState::Menu);
        assert_eq!(hit_test(p, GameState::Menu, false), None);
        assert_eq!(hit_test(p, GameState::Menu, true), Some(Command::Continue));
    }

    #[test]
    fn clicks_outside_every_button_miss() {
        assert_eq!(hit_test(vec2(5.0, 5.0), GameState::Playing, false), None);
    }

    #[test]
    fn colour_depends_only_on_enabled() {
        assert_eq!(display_color(true), BUTTON_COLOR);
        assert_eq!(display_color(false), DISABLED_COLOR);
        assert_eq!(BUTTONS[0].rect, Rect::new(20.0, PAD_Y, PAD_W, PAD_H));
    }

    #[test]
    fn visible_buttons_never_overlap() {
        for state in [GameState::Menu, GameState::Playing, GameState::Paused, GameState::GameOver] {
            let shown: Vec<_> = visible(state).collect();
            for (i, a) in shown.iter().enumerate() {
                for b in &shown[i + 1..] {
                    assert!(a.rect.intersect(b.rect).is_none(), "{:?} / {:?}", a.command, b.command);
                }
            }
        }
    }
}
