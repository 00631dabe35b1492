use macroquad::prelude::*;

use blockfall::buttons::{self, display_color};
use blockfall::config::{BOARD_OFFSET_X, BOARD_OFFSET_Y, PREVIEW_TILE_SIZE, SIDEBAR_X, TILE_SIZE};
use blockfall::game::statistics;
use blockfall::{Game, GameState, Shape};

const GAME_AREA_COLOR: Color = Color::new(0.2, 0.2, 0.2, 1.0);
const BLACK_COLOR: Color = BLACK;
const OVERLAY_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.6);

pub fn draw(game: &Game) {
    clear_background(BLACK_COLOR);

    draw_board(game);
    draw_sidebar(game);

    match game.state() {
        GameState::Menu => draw_menu(game),
        GameState::Paused => draw_banner(game, "Paused", YELLOW),
        GameState::GameOver => draw_banner(game, "Game Over", RED),
        GameState::Playing => {}
    }

    draw_buttons(game);
}

/// Pixel size of the playfield.
fn board_extent(game: &Game) -> (f32, f32) {
    let board = game.board();
    (board.width() as f32 * TILE_SIZE, board.height() as f32 * TILE_SIZE)
}

fn cell_origin(x: i32, y: i32) -> (f32, f32) {
    (
        BOARD_OFFSET_X + x as f32 * TILE_SIZE,
        BOARD_OFFSET_Y + y as f32 * TILE_SIZE,
    )
}

fn draw_board(game: &Game) {
    let (board_w, board_h) = board_extent(game);
    draw_rectangle(BOARD_OFFSET_X, BOARD_OFFSET_Y, board_w, board_h, GAME_AREA_COLOR);

    for (y, row) in game.board().rows().iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if let Some(kind) = cell {
                let (px, py) = cell_origin(x as i32, y as i32);
                draw_snes_block(px, py, TILE_SIZE, kind.color());
            }
        }
    }

    if game.state() == GameState::Menu {
        return;
    }
    let Some(curr) = game.active() else {
        return;
    };

    if !game.is_game_over() {
        if let Some(ghost_pos) = game.ghost_position() {
            let c = curr.color();
            let ghost_color = Color::new(c.r, c.g, c.b, 0.3);
            for (dx, dy) in curr.shape.cells() {
                let (px, py) = cell_origin(ghost_pos.0 + dx, ghost_pos.1 + dy);
                draw_rectangle(px, py, TILE_SIZE, TILE_SIZE, ghost_color);
            }
        }
    }

    for (dx, dy) in curr.shape.cells() {
        let y = curr.pos.1 + dy;
        if y < 0 {
            continue;
        }
        let (px, py) = cell_origin(curr.pos.0 + dx, y);
        draw_snes_block(px, py, TILE_SIZE, curr.color());
    }
}

fn draw_sidebar(game: &Game) {
    let x = SIDEBAR_X;

    draw_text("Next", x, 45.0, 36.0, WHITE);
    let next = game.next_piece();
    draw_preview(&next.shape(), next.color(), x, 60.0, PREVIEW_TILE_SIZE);

    draw_text(&format!("Score: {}", game.score()), x, 170.0, 30.0, WHITE);
    draw_text(&format!("Level: {}", game.level()), x, 205.0, 30.0, WHITE);
    draw_text(&format!("Lines: {}", game.lines_cleared()), x, 240.0, 30.0, WHITE);

    draw_text("Piece Stats", x, 290.0, 26.0, WHITE);
    for (i, (kind, count)) in statistics(game).enumerate() {
        let row_y = 300.0 + i as f32 * 30.0;
        draw_preview(&kind.shape(), kind.color(), x, row_y, 10.0);
        draw_text(&count.to_string(), x + 60.0, row_y + 20.0, 22.0, WHITE);
    }
}

fn draw_menu(game: &Game) {
    let (board_w, board_h) = board_extent(game);
    draw_rectangle(BOARD_OFFSET_X, BOARD_OFFSET_Y, board_w, board_h, OVERLAY_COLOR);

    let title = "BLOCKFALL";
    let measure = measure_text(title, None, 50, 1.0);
    let tx = BOARD_OFFSET_X + (board_w - measure.width) / 2.0;
    draw_text(title, tx, BOARD_OFFSET_Y + 160.0, 50.0, YELLOW);

    let hint = "Enter: play   Q: quit";
    let measure = measure_text(hint, None, 20, 1.0);
    let hx = BOARD_OFFSET_X + (board_w - measure.width) / 2.0;
    draw_text(hint, hx, BOARD_OFFSET_Y + 460.0, 20.0, GRAY);
}

fn draw_banner(game: &Game, msg: &str, color: Color) {
    let (board_w, board_h) = board_extent(game);
    draw_rectangle(BOARD_OFFSET_X, BOARD_OFFSET_Y, board_w, board_h, OVERLAY_COLOR);
    let measure = measure_text(msg, None, 50, 1.0);
    let x = BOARD_OFFSET_X + (board_w - measure.width) / 2.0;
    draw_text(msg, x, BOARD_OFFSET_Y + 200.0, 50.0, color);
}

fn draw_buttons(game: &Game) {
    let state = game.state();
    let suspended = game.has_suspended_session();
    for button in buttons::visible(state) {
        let r = button.rect;
        let enabled = button.is_enabled(state, suspended);
        draw_rectangle(r.x, r.y, r.w, r.h, display_color(enabled));
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, WHITE);

        let label = button.label();
        let measure = measure_text(label, None, 24, 1.0);
        let lx = r.x + (r.w - measure.width) / 2.0;
        let ly = r.y + (r.h + measure.offset_y) / 2.0;
        let text_color = if enabled { WHITE } else { GRAY };
        draw_text(label, lx, ly, 24.0, text_color);
    }
}

fn draw_snes_block(x: f32, y: f32, size: f32, color: Color) {
    draw_rectangle(x, y, size, size, color);
    let highlight = Color::new(
        (color.r + 0.4).min(1.0),
        (color.g + 0.4).min(1.0),
        (color.b + 0.4).min(1.0),
        1.0,
    );
    let shadow = Color::new(color.r * 0.5, color.g * 0.5, color.b * 0.5, 1.0);
    let border = size * 0.15;
    draw_rectangle(x, y, size, border, highlight);
    draw_rectangle(x, y, border, size, highlight);
    draw_rectangle(x, y + size - border, size, border, shadow);
    draw_rectangle(x + size - border, y, border, size, shadow);
}

/// Draws `shape` centred in a 50px box at `(pos_x, pos_y)`.
fn draw_preview(shape: &Shape, color: Color, pos_x: f32, pos_y: f32, tile_size: f32) {
    let shape_w = shape.width() as f32 * tile_size;
    let shape_h = shape.height() as f32 * tile_size;
    let offset_x = pos_x + (50.0 - shape_w) / 2.0;
    let offset_y = pos_y + (50.0 - shape_h) / 2.0;
    for (bx, by) in shape.cells() {
        let draw_x = offset_x + bx as f32 * tile_size;
        let draw_y = offset_y + by as f32 * tile_size;
        draw_snes_block(draw_x, draw_y, tile_size, color);
    }
}
