use macroquad::color::Color;
use macroquad::logging::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::config::{
    BASE_FALL_INTERVAL_MS, FALL_INTERVAL_STEP_MS, GRID_WIDTH, LINES_PER_LEVEL,
    MIN_FALL_INTERVAL_MS, POINTS_PER_LINE, SOFT_DROP_INTERVAL_MS,
};
use crate::error::Rejected;
use crate::tetromino::{random_variant, Shape, TetrominoType, ALL_TYPES};

/// Top-level state of the game screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl GameState {
    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Menu => "in menu",
            GameState::Playing => "playing",
            GameState::Paused => "paused",
            GameState::GameOver => "game over",
        }
    }
}

/// The falling piece.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: TetrominoType,
    pub shape: Shape,
    pub pos: (i32, i32),
}

impl Tetromino {
    /// Catalog shape, horizontally centred on the top row.
    pub fn spawn(kind: TetrominoType) -> Self {
        let shape = kind.shape();
        let x = (GRID_WIDTH / 2) as i32 - (shape.width() / 2) as i32;
        Tetromino { kind, shape, pos: (x, 0) }
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }
}

/// One game session plus the menu/pause/game-over state around it.
///
/// Movement commands are no-ops returning `false` unless the state is
/// [`GameState::Playing`]. State-machine intents return the new state or a
/// [`Rejected`] describing why the intent was refused.
pub struct Game {
    board: Board,
    tetromino: Option<Tetromino>,
    next: TetrominoType,

    state: GameState,
    game_over: bool,
    suspended: bool,
    soft_drop: bool,

    score: u32,
    level: u32,
    lines_cleared: u32,
    fall_interval_ms: u32,

    piece_statistics: [u32; 7],

    rng: StdRng,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic piece sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let next = random_variant(&mut rng);
        Self {
            board: Board::new(),
            tetromino: None,
            next,
            state: GameState::Menu,
            game_over: false,
            suspended: false,
            soft_drop: false,
            score: 0,
            level: 1,
            lines_cleared: 0,
            fall_interval_ms: BASE_FALL_INTERVAL_MS,
            piece_statistics: [0; 7],
            rng,
        }
    }

    // ---------------------------------------------------------------
    // Queries

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct grid access, for puzzle setups and tests.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&Tetromino> {
        self.tetromino.as_ref()
    }

    pub fn next_piece(&self) -> TetrominoType {
        self.next
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn has_suspended_session(&self) -> bool {
        self.suspended
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.soft_drop
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Cadence the gravity clock should currently run at.
    pub fn gravity_interval_ms(&self) -> u32 {
        if self.soft_drop {
            SOFT_DROP_INTERVAL_MS
        } else {
            self.fall_interval_ms
        }
    }

    /// How many pieces of `kind` have spawned this session.
    pub fn piece_count(&self, kind: TetrominoType) -> u32 {
        self.piece_statistics[kind.index()]
    }

    /// Where the active piece would come to rest under [`Game::hard_drop`].
    pub fn ghost_position(&self) -> Option<(i32, i32)> {
        let t = self.tetromino.as_ref()?;
        let mut dy = 0;
        while !self.board.collides(&t.shape, t.pos, 0, dy + 1) {
            dy += 1;
        }
        Some((t.pos.0, t.pos.1 + dy))
    }

    fn can_act(&self) -> bool {
        self.state == GameState::Playing && !self.game_over
    }

    // ---------------------------------------------------------------
    // State machine

    /// MENU -> PLAYING with a fresh session. Discards any suspended one.
    pub fn start(&mut self) -> Result<GameState, Rejected> {
        if self.state != GameState::Menu {
            return Err(self.reject("start"));
        }
        self.begin_session();
        Ok(self.state)
    }

    pub fn pause(&mut self) -> Result<GameState, Rejected> {
        if self.state != GameState::Playing {
            return Err(self.reject("pause"));
        }
        self.state = GameState::Paused;
        info!("paused at score {}", self.score);
        Ok(self.state)
    }

    pub fn resume(&mut self) -> Result<GameState, Rejected> {
        if self.state != GameState::Paused {
            return Err(self.reject("resume"));
        }
        self.state = GameState::Playing;
        info!("resumed");
        Ok(self.state)
    }

    /// MENU -> PLAYING, picking up a session suspended from the pause screen.
    pub fn continue_session(&mut self) -> Result<GameState, Rejected> {
        if self.state != GameState::Menu {
            return Err(self.reject("continue"));
        }
        if !self.suspended {
            return Err(Rejected::NoSuspendedSession);
        }
        self.suspended = false;
        self.state = GameState::Playing;
        info!("continuing suspended session at score {}", self.score);
        Ok(self.state)
    }

    pub fn restart(&mut self) -> Result<GameState, Rejected> {
        if self.state != GameState::GameOver {
            return Err(self.reject("restart"));
        }
        self.begin_session();
        Ok(self.state)
    }

    /// GAME_OVER -> MENU, or PAUSED -> MENU keeping the session suspended.
    pub fn to_menu(&mut self) -> Result<GameState, Rejected> {
        match self.state {
            GameState::GameOver => self.suspended = false,
            GameState::Paused => {
                self.suspended = true;
                self.soft_drop = false;
                info!("session suspended at score {}", self.score);
            }
            _ => return Err(self.reject("menu")),
        }
        self.state = GameState::Menu;
        Ok(self.state)
    }

    /// Only the menu may quit; the caller ends the process.
    pub fn exit(&self) -> Result<GameState, Rejected> {
        if self.state != GameState::Menu {
            return Err(self.reject("exit"));
        }
        info!("exit requested");
        Ok(self.state)
    }

    fn reject(&self, intent: &'static str) -> Rejected {
        Rejected::IllegalIn { intent, state: self.state }
    }

    fn begin_session(&mut self) {
        self.reset_session();
        self.state = GameState::Playing;
        info!("new session");
        self.spawn();
    }

    fn reset_session(&mut self) {
        self.board = Board::new();
        self.tetromino = None;
        self.game_over = false;
        self.suspended = false;
        self.soft_drop = false;
        self.score = 0;
        self.level = 1;
        self.lines_cleared = 0;
        self.fall_interval_ms = BASE_FALL_INTERVAL_MS;
        self.piece_statistics = [0; 7];
    }

    // ---------------------------------------------------------------
    // Piece lifecycle

    fn spawn(&mut self) {
        let kind = self.next;
        self.next = random_variant(&mut self.rng);
        self.piece_statistics[kind.index()] += 1;

        let piece = Tetromino::spawn(kind);
        let blocked = self.board.collides(&piece.shape, piece.pos, 0, 0);
        self.tetromino = Some(piece);

        if blocked {
            self.game_over = true;
            self.state = GameState::GameOver;
            self.soft_drop = false;
            info!(
                "game over: score {}, level {}, lines {}",
                self.score, self.level, self.lines_cleared
            );
        }
    }

    /// Translates the active piece. A blocked downward move locks the piece,
    /// clears lines, and spawns the next one; the call still returns false.
    pub fn move_piece(&mut self, dx: i32, dy: i32) -> bool {
        if !self.can_act() {
            return false;
        }
        let Some(t) = self.tetromino.as_mut() else {
            return false;
        };
        if !self.board.collides(&t.shape, t.pos, dx, dy) {
            t.pos = (t.pos.0 + dx, t.pos.1 + dy);
            return true;
        }
        if dy > 0 {
            self.lock_active();
        }
        false
    }

    fn lock_active(&mut self) {
        let Some(t) = self.tetromino.take() else {
            return;
        };
        self.board.lock(&t.shape, t.pos, t.kind);
        let cleared = self.board.clear_lines();
        self.apply_clear(cleared as u32);
        self.spawn();
    }

    fn apply_clear(&mut self, cleared: u32) {
        if cleared == 0 {
            return;
        }
        let before = self.level;
        let gained = cleared
            .saturating_mul(POINTS_PER_LINE)
            .saturating_mul(self.level);
        self.score = self.score.saturating_add(gained);
        self.lines_cleared = self.lines_cleared.saturating_add(cleared);
        self.level = self.lines_cleared / LINES_PER_LEVEL + 1;
        self.fall_interval_ms = BASE_FALL_INTERVAL_MS
            .saturating_sub((self.level - 1).saturating_mul(FALL_INTERVAL_STEP_MS))
            .max(MIN_FALL_INTERVAL_MS);

        debug!("cleared {} line(s), score {}", cleared, self.score);
        if self.level != before {
            debug!("level {} (fall interval {}ms)", self.level, self.fall_interval_ms);
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.move_piece(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_piece(1, 0)
    }

    /// One row down, as from a tap on the down control.
    pub fn soft_down(&mut self) -> bool {
        self.move_piece(0, 1)
    }

    /// Gravity step, invoked by the shell whenever the gravity clock fires.
    pub fn tick(&mut self) -> bool {
        self.move_piece(0, 1)
    }

    /// Rotates clockwise in place; discarded if the result collides.
    pub fn rotate(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        let Some(t) = self.tetromino.as_mut() else {
            return false;
        };
        let rotated = t.shape.rotate_clockwise();
        if self.board.collides(&rotated, t.pos, 0, 0) {
            return false;
        }
        t.shape = rotated;
        true
    }

    /// Drops straight down and locks. Returns the rows travelled, or `None`
    /// outside play.
    pub fn hard_drop(&mut self) -> Option<u32> {
        if !self.can_act() {
            return None;
        }
        let mut rows = 0;
        while self.move_piece(0, 1) {
            rows += 1;
        }
        Some(rows)
    }

    pub fn begin_soft_drop(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        self.soft_drop = true;
        true
    }

    pub fn end_soft_drop(&mut self) {
        self.soft_drop = false;
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("active", &self.tetromino)
            .field("next", &self.next)
            .field("score", &self.score)
            .field("level", &self.level)
            .field("lines_cleared", &self.lines_cleared)
            .finish_non_exhaustive()
    }
}

/// Iterates the catalog alongside this session's spawn counts.
pub fn statistics(game: &Game) -> impl Iterator<Item = (TetrominoType, u32)> + '_ {
    ALL_TYPES.iter().map(move |&t| (t, game.piece_count(t)))
}
