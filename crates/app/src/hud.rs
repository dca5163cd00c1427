//! Depth, record, and timer readout in the reserved top band.

use macroquad::prelude::{Color, draw_text, measure_text};
use maze_app::theme::Theme;
use maze_app::{format_depth_meters, format_elapsed};
use maze_core::{Phase, RenderSnapshot, Viewport};

pub fn draw(
    snapshot: &RenderSnapshot<'_>,
    theme: Theme,
    viewport: Viewport,
    elapsed_ms: f64,
) {
    if snapshot.phase == Phase::Idle {
        return;
    }

    let accent = theme.accent(snapshot.depth);
    let dim = Color::new(accent.r, accent.g, accent.b, 0.6);

    draw_text(&format!("DEPTH {}", format_depth_meters(snapshot.depth)), 20.0, 40.0, 32.0, accent);
    if snapshot.best_depth > 0 {
        let best = format!("BEST {}", format_depth_meters(snapshot.best_depth));
        draw_text(&best, 20.0, 70.0, 20.0, dim);
    }

    let clock = format_elapsed(elapsed_ms);
    let clock_width = measure_text(&clock, None, 24, 1.0).width;
    draw_text(&clock, viewport.width - clock_width - 20.0, 40.0, 24.0, dim);

    let hints = "R RESTART   T COLOR";
    let hints_width = measure_text(hints, None, 14, 1.0).width;
    draw_text(hints, viewport.width - hints_width - 20.0, viewport.height - 16.0, 14.0, dim);
}
