//! Falling-block puzzle game.
//!
//! The simulation (`board`, `tetromino`, `game`) is window-free and fully
//! deterministic given a seed. `command`, `keymap`, `buttons` and `clock` are
//! the pure halves of the input shell; the binary adds drawing and the frame
//! loop on top.

pub mod board;
pub mod buttons;
pub mod clock;
pub mod command;
pub mod config;
pub mod error;
pub mod game;
pub mod keymap;
pub mod tetromino;

pub use board::Board;
pub use command::{Command, Outcome};
pub use error::Rejected;
pub use game::{Game, GameState, Tetromino};
pub use tetromino::{Shape, TetrominoType};
