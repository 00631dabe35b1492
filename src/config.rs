use macroquad::window::Conf;

// -------------------------------------------------------------------
// Board
pub const GRID_WIDTH: usize = 10;
pub const GRID_HEIGHT: usize = 20;

// -------------------------------------------------------------------
// Timing (milliseconds unless noted)
pub const BASE_FALL_INTERVAL_MS: u32 = 500;
pub const FALL_INTERVAL_STEP_MS: u32 = 40;
pub const MIN_FALL_INTERVAL_MS: u32 = 100;
pub const SOFT_DROP_INTERVAL_MS: u32 = 100;

/// Rate at which held keys are re-polled (Hz).
pub const INPUT_POLL_HZ: f32 = 10.0;
/// Delay before a held left/right key starts repeating (seconds).
pub const INITIAL_HORIZONTAL_DELAY: f32 = 0.2;

// -------------------------------------------------------------------
// Scoring
pub const POINTS_PER_LINE: u32 = 100;
pub const LINES_PER_LEVEL: u32 = 10;

// -------------------------------------------------------------------
// Window layout
pub const WINDOW_WIDTH: i32 = 560;
pub const WINDOW_HEIGHT: i32 = 760;
pub const TILE_SIZE: f32 = 30.0;
pub const PREVIEW_TILE_SIZE: f32 = 22.0;
pub const BOARD_OFFSET_X: f32 = 20.0;
pub const BOARD_OFFSET_Y: f32 = 20.0;
pub const SIDEBAR_X: f32 = BOARD_OFFSET_X + GRID_WIDTH as f32 * TILE_SIZE + 30.0;

/// Fixed-size, non-resizable window.
pub fn window_conf() -> Conf {
    Conf {
        window_title: "Blockfall".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}
