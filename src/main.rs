mod render;

use macroquad::logging::{debug, info};
use macroquad::prelude::*;

use blockfall::buttons::hit_test;
use blockfall::clock::{GravityClock, KeyRepeat};
use blockfall::config::window_conf;
use blockfall::keymap::{self, BOUND_KEYS};
use blockfall::{Command, Game, GameState, Outcome};

/// Frame-loop glue: owns the engine plus the two clocks feeding it.
struct Shell {
    game: Game,
    gravity: GravityClock,
    left: KeyRepeat,
    right: KeyRepeat,
}

impl Shell {
    fn new() -> Self {
        Self {
            game: Game::new(),
            gravity: GravityClock::new(),
            left: KeyRepeat::new(),
            right: KeyRepeat::new(),
        }
    }

    /// Returns false once the player has asked to quit.
    fn dispatch(&mut self, command: Command) -> bool {
        match self.game.apply(command) {
            Ok(Outcome::Exit) => return false,
            Ok(Outcome::Transitioned(state)) => {
                debug!("{:?} -> {:?}", command, state);
                self.gravity.reset();
            }
            Ok(Outcome::Moved(_)) => {}
            Err(rejected) => debug!("ignored {:?}: {}", command, rejected),
        }
        true
    }

    fn poll_keys(&mut self, dt: f32) -> bool {
        for key in BOUND_KEYS {
            let fire = if keymap::repeats(key) {
                let repeat = if key == KeyCode::Left { &mut self.left } else { &mut self.right };
                repeat.update(is_key_pressed(key), is_key_down(key), dt)
            } else {
                is_key_pressed(key)
            };

            if fire {
                let state = self.game.state();
                let suspended = self.game.has_suspended_session();
                if let Some(cmd) = keymap::on_press(key, state, suspended) {
                    if !self.dispatch(cmd) {
                        return false;
                    }
                }
            }
            if is_key_released(key) {
                if let Some(cmd) = keymap::on_release(key) {
                    self.dispatch(cmd);
                }
            }
        }
        true
    }

    fn poll_pointer(&mut self) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return true;
        }
        let (x, y) = mouse_position();
        let state = self.game.state();
        match hit_test(vec2(x, y), state, self.game.has_suspended_session()) {
            Some(cmd) => self.dispatch(cmd),
            None => true,
        }
    }

    fn update(&mut self, dt: f32) -> bool {
        if !self.poll_keys(dt) || !self.poll_pointer() {
            return false;
        }
        if self.game.state() == GameState::Playing
            && self.gravity.advance(dt, self.game.gravity_interval_ms())
        {
            self.game.tick();
        }
        true
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut shell = Shell::new();
    info!("blockfall started");

    loop {
        let dt = get_frame_time();
        if !shell.update(dt) {
            info!("exiting");
            break;
        }
        render::draw(&shell.game);
        next_frame().await;
    }
}
