//! Painting. `draw_world` renders the playfield into the fixed-size
//! logical canvas, back to front: sky, clouds, pipes, shore, avatar.
//! The HUD functions draw on the terminal-resolution frame after the
//! downscale, so text stays one crisp pixel per glyph dot instead of
//! smearing through the scaler.

use crate::config::*;
use crate::font;
use crate::game::{Cloud, Game, Pipe, Player};
use crate::surface::{Rgb, Surface};
use crate::theme::{Palette, PlayerSkin, ShoreStyle, Theme};

fn px(v: f64) -> i32 {
    v.round() as i32
}

/// Paints one frame of the playfield.
pub fn draw_world(canvas: &mut Surface, game: &Game, theme: &Theme) {
    let pal = &theme.palette;

    let w = canvas.width() as i32;
    let h = canvas.height() as i32;
    for y in 0..h {
        let t = (y * 256 / h) as u16;
        canvas.fill_rect(0, y, w, 1, Rgb::lerp(pal.sky_top, pal.sky_bottom, t));
    }

    for cloud in &game.clouds {
        draw_cloud(canvas, cloud, pal.cloud);
    }
    for pipe in &game.pipes {
        draw_pipe(canvas, pipe, pal, theme.pipe_caps);
    }
    draw_shore(canvas, game, theme);
    draw_player(canvas, &game.player, pal, theme.skin);
}

/// Five overlapping discs make a lumpy cumulus. Radii ride on the
/// cloud's box height.
fn draw_cloud(canvas: &mut Surface, cloud: &Cloud, color: Rgb) {
    let r = cloud.h / 2.0;
    let lobes = [
        (cloud.x, cloud.y),
        (cloud.x + r, cloud.y - r / 2.0),
        (cloud.x + r * 2.0, cloud.y),
        (cloud.x + r / 2.0, cloud.y + r / 3.0),
        (cloud.x + r * 1.5, cloud.y + r / 3.0),
    ];
    for (cx, cy) in lobes {
        canvas.fill_circle(cx, cy, r, color);
    }
}

fn draw_pipe(canvas: &mut Surface, pipe: &Pipe, pal: &Palette, caps: bool) {
    let top = pipe.top_rect();
    let bottom = pipe.bottom_rect();
    canvas.fill_rect(px(top.x), px(top.y), px(top.w), px(top.h), pal.pipe);
    canvas.fill_rect(
        px(bottom.x),
        px(bottom.y),
        px(bottom.w),
        px(bottom.h),
        pal.pipe,
    );
    if caps {
        // Lips overhang the shaft by 5px on each side and sit flush
        // against the gap.
        canvas.fill_rect(
            px(pipe.x - 5.0),
            px(pipe.gap_top - 20.0),
            px(PIPE_WIDTH + 10.0),
            20,
            pal.pipe_lip,
        );
        canvas.fill_rect(
            px(pipe.x - 5.0),
            px(pipe.gap_top + PIPE_GAP),
            px(PIPE_WIDTH + 10.0),
            20,
            pal.pipe_lip,
        );
    }
}

fn draw_shore(canvas: &mut Surface, game: &Game, theme: &Theme) {
    let pal = &theme.palette;
    match theme.shore {
        ShoreStyle::Ground => {
            canvas.fill_rect(
                0,
                px(SHORE_Y),
                px(WIDTH),
                px(SHORE_HEIGHT),
                pal.shore,
            );
            canvas.fill_rect(0, px(SHORE_Y), px(WIDTH), 4, pal.shore_accent);
        }
        ShoreStyle::Water => {
            let mut poly = game.water.surface_points();
            poly.push((WIDTH, HEIGHT));
            poly.push((0.0, HEIGHT));
            canvas.fill_polygon(&poly, pal.shore);
            // Faint elongated glints just under the surface.
            let mut x = 20.0;
            while x < WIDTH {
                canvas.fill_ellipse(x + 20.0, SHORE_Y + 20.0, 20.0, 5.0, pal.shore_accent);
                x += 80.0;
            }
        }
    }
}

fn draw_player(canvas: &mut Surface, player: &Player, pal: &Palette, skin: PlayerSkin) {
    let x = PLAYER_X;
    let y = player.y;
    let w = player.w;
    let h = player.h;
    match skin {
        PlayerSkin::Mouse => {
            canvas.fill_rect_rounded(px(x), px(y), px(w), px(h), 10, pal.body);
        }
        PlayerSkin::Fish => {
            canvas.fill_ellipse(x + w / 2.0, y + h / 2.0, w / 2.0, h / 2.0, pal.body);
            canvas.fill_polygon(
                &[
                    (x, y + h / 2.0),
                    (x - 15.0, y + h / 4.0),
                    (x - 15.0, y + 3.0 * h / 4.0),
                ],
                pal.body_detail,
            );
            let fin = if player.fin_up { 8.0 } else { -8.0 };
            canvas.fill_polygon(
                &[
                    (x + w / 3.0, y),
                    (x + w / 2.0, y - fin),
                    (x + 2.0 * w / 3.0, y),
                ],
                pal.body_detail,
            );
            canvas.fill_circle(x + w - 10.0, y + h / 3.0, 5.0, pal.eye);
            canvas.fill_circle(x + w - 10.0, y + h / 3.0, 2.0, pal.pupil);
        }
    }
}

/// Score readout, top-left of the terminal frame.
pub fn draw_hud(frame: &mut Surface, score: u32, pal: &Palette) {
    let text = format!("SCORE {score}");
    font::draw_text(frame, 2, 2, 1, &text, pal.text, Some(pal.text_shadow));
}

/// Dims the whole frame and stacks the end-of-session panel in the
/// middle: banner, final score, session best, restart hint.
pub fn draw_game_over(frame: &mut Surface, score: u32, best: u32, pal: &Palette) {
    frame.dim_all();
    let cx = frame.width() as i32 / 2;
    let mut y = frame.height() as i32 / 2 - 17;
    font::draw_text_centered(frame, cx, y, 2, "GAME OVER!", pal.text, Some(pal.text_shadow));
    y += font::text_height(2) + 3;
    font::draw_text_centered(
        frame,
        cx,
        y,
        1,
        &format!("SCORE {score}"),
        pal.text,
        Some(pal.text_shadow),
    );
    y += font::text_height(1) + 2;
    font::draw_text_centered(
        frame,
        cx,
        y,
        1,
        &format!("BEST {best}"),
        pal.text,
        Some(pal.text_shadow),
    );
    y += font::text_height(1) + 4;
    font::draw_text_centered(
        frame,
        cx,
        y,
        1,
        "SPACE TO RESTART",
        pal.text,
        Some(pal.text_shadow),
    );
}
