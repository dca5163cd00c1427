//! Frame rendering: fog-of-war maze, trail, goal portal, and the ball.
//! Everything is drawn from the snapshot; nothing here mutates game state.

use macroquad::prelude::{
    Color, Vec2, draw_circle, draw_circle_lines, draw_poly_lines, draw_rectangle, draw_text,
    draw_triangle, get_time, measure_text,
};
use maze_app::theme::Theme;
use maze_core::{Phase, RenderSnapshot, Viewport};

/// Wall opacity at the player's position and at the edge of visibility.
const WALL_ALPHA_NEAR: f32 = 240.0 / 255.0;
const WALL_ALPHA_FAR: f32 = 50.0 / 255.0;

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, alpha)
}

pub fn draw(snapshot: &RenderSnapshot<'_>, theme: Theme, viewport: Viewport, collision_flash: f32) {
    let accent = theme.accent(snapshot.depth);

    draw_trail(snapshot, accent);
    draw_walls(snapshot, accent);
    draw_goal(snapshot, accent);
    draw_ball(snapshot, accent);
    draw_collision_flash(viewport, collision_flash);

    match snapshot.phase {
        Phase::Idle => draw_start_overlay(viewport, accent),
        Phase::Won => draw_descend_banner(viewport, accent),
        Phase::Active => {}
    }
}

fn draw_trail(snapshot: &RenderSnapshot<'_>, accent: Color) {
    for mark in snapshot.trail {
        let radius = 2.0 + 4.0 * mark.strength;
        draw_circle(mark.pos.x, mark.pos.y, radius, with_alpha(accent, 0.25 * mark.strength));
    }
}

/// Walls fade with distance from the ball and vanish past the fog radius.
/// The jitter offsets bend each slab into a slightly irregular quad.
fn draw_walls(snapshot: &RenderSnapshot<'_>, accent: Color) {
    for wall in snapshot.walls {
        let reach = snapshot.visibility_radius + wall.width.max(wall.height) / 2.0;
        let distance = snapshot.player_pos.distance(wall.center());
        if distance > reach {
            continue;
        }

        let near = 1.0 - (distance / reach).clamp(0.0, 1.0);
        let alpha = WALL_ALPHA_FAR + (WALL_ALPHA_NEAR - WALL_ALPHA_FAR) * near;
        let color = with_alpha(accent, alpha);

        let hw = wall.width / 2.0;
        let hh = wall.height / 2.0;
        let j = &wall.jitter;
        let top_left = Vec2::new(wall.x - hw + j[0], wall.y - hh + j[1]);
        let top_right = Vec2::new(wall.x + hw + j[2], wall.y - hh + j[3]);
        let bottom_right = Vec2::new(wall.x + hw + j[4], wall.y + hh + j[5]);
        let bottom_left = Vec2::new(wall.x - hw + j[6], wall.y + hh + j[7]);

        draw_triangle(top_left, top_right, bottom_right, color);
        draw_triangle(top_left, bottom_right, bottom_left, color);
    }
}

fn draw_goal(snapshot: &RenderSnapshot<'_>, accent: Color) {
    let distance = snapshot.player_pos.distance(snapshot.goal_pos);
    if distance > snapshot.goal_reveal_radius {
        return;
    }

    let (x, y) = (snapshot.goal_pos.x, snapshot.goal_pos.y);
    let pulse = 1.0 + 0.08 * (get_time() * 4.0).sin() as f32;
    let radius = snapshot.goal_radius * pulse;

    draw_circle(x, y, radius * 1.8, with_alpha(accent, 0.08));
    draw_circle(x, y, radius * 1.3, with_alpha(accent, 0.15));
    draw_circle(x, y, radius * 0.55, with_alpha(accent, 0.9));

    let spin = (get_time() * 40.0) as f32;
    draw_poly_lines(x, y, 6, radius, spin, 2.0, with_alpha(accent, 0.7));
    draw_poly_lines(x, y, 6, radius * 0.8, -spin * 1.5, 1.0, with_alpha(accent, 0.4));
}

fn draw_ball(snapshot: &RenderSnapshot<'_>, accent: Color) {
    let (x, y) = (snapshot.player_pos.x, snapshot.player_pos.y);
    let radius = snapshot.player_radius * snapshot.player_scale;
    if radius < 0.5 {
        return;
    }

    draw_circle(x, y, radius * 2.0, with_alpha(accent, 0.1));
    draw_circle(x, y, radius * 1.4, with_alpha(accent, 0.2));
    draw_circle(x, y, radius, accent);
    draw_circle(x, y, radius * 0.45, with_alpha(Color::new(1.0, 1.0, 1.0, 1.0), 0.8));

    // Rolling is sold by a spinning hex outline.
    draw_poly_lines(
        x,
        y,
        6,
        radius * 0.75,
        snapshot.player_rotation.to_degrees(),
        1.5,
        with_alpha(accent, 0.6),
    );
}

fn draw_collision_flash(viewport: Viewport, flash: f32) {
    if flash < 0.01 {
        return;
    }
    let color = Color::new(1.0, 0.25, 0.3, 0.35 * flash);
    let border = 16.0 * flash;
    draw_rectangle(0.0, 0.0, viewport.width, border, color);
    draw_rectangle(0.0, viewport.height - border, viewport.width, border, color);
    draw_rectangle(0.0, 0.0, border, viewport.height, color);
    draw_rectangle(viewport.width - border, 0.0, border, viewport.height, color);
}

fn draw_start_overlay(viewport: Viewport, accent: Color) {
    draw_rectangle(0.0, 0.0, viewport.width, viewport.height, Color::new(0.0, 0.0, 0.0, 0.55));
    draw_centered_text("FINGER MAZE", viewport, viewport.height * 0.42, 52.0, accent);
    draw_centered_text(
        "TOUCH TO DESCEND",
        viewport,
        viewport.height * 0.42 + 48.0,
        24.0,
        with_alpha(accent, 0.8),
    );
}

fn draw_descend_banner(viewport: Viewport, accent: Color) {
    draw_centered_text("DESCENDING...", viewport, viewport.height * 0.5, 40.0, accent);
    draw_circle_lines(
        viewport.width / 2.0,
        viewport.height * 0.5 + 50.0,
        12.0 + 4.0 * (get_time() * 6.0).sin() as f32,
        2.0,
        with_alpha(accent, 0.6),
    );
}

fn draw_centered_text(text: &str, viewport: Viewport, y: f32, font_size: f32, color: Color) {
    let dimensions = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (viewport.width - dimensions.width) / 2.0, y, font_size, color);
}
