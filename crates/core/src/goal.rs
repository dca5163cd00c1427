//! Exit portal placement.
//! This module exists to pick a goal cell far from the start and outside the
//! HUD band. It does not own capture detection timing; `session` drives that.

use glam::Vec2;

use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::types::CellPos;

/// Vertical band at the top of the playfield reserved for HUD text; goals
/// never land inside it.
pub const HUD_EXCLUSION_Y: f32 = 120.0;
/// Portal radius as a fraction of the cell size.
pub const GOAL_RADIUS_FRACTION: f32 = 0.32;
/// Capture happens when the player center is inside this fraction of the
/// portal radius.
pub const CAPTURE_FRACTION: f32 = 0.45;

#[derive(Clone, Copy, Debug)]
pub struct Goal {
    /// Pixel center of the portal.
    pub pos: Vec2,
    pub radius: f32,
}

impl Goal {
    pub fn captures(&self, point: Vec2) -> bool {
        self.pos.distance(point) < self.radius * CAPTURE_FRACTION
    }
}

/// Picks the goal cell uniformly from cells whose grid distance from the
/// start exceeds `(cols + rows) / 2.8` and whose center clears the HUD band.
/// Falls back to the last cell when no candidate qualifies, which happens on
/// grids too small to satisfy both filters.
pub fn place_goal(grid: &Grid, start: CellPos, cell_size: f32, rng: &mut dyn RandomSource) -> Goal {
    let min_distance = (grid.cols() + grid.rows()) as f32 / 2.8;

    let candidates: Vec<CellPos> = (0..grid.len())
        .map(|index| grid.pos_of_index(index))
        .filter(|pos| grid_distance(*pos, start) > min_distance)
        .filter(|pos| center_of(*pos, cell_size).y > HUD_EXCLUSION_Y)
        .collect();

    let cell = if candidates.is_empty() {
        grid.pos_of_index(grid.len() - 1)
    } else {
        candidates[rng.pick_index(candidates.len())]
    };

    Goal { pos: center_of(cell, cell_size), radius: cell_size * GOAL_RADIUS_FRACTION }
}

fn center_of(pos: CellPos, cell_size: f32) -> Vec2 {
    Vec2::new((pos.col as f32 + 0.5) * cell_size, (pos.row as f32 + 0.5) * cell_size)
}

fn grid_distance(a: CellPos, b: CellPos) -> f32 {
    let dx = a.col as f32 - b.col as f32;
    let dy = a.row as f32 - b.row as f32;
    (dx * dx + dy * dy).sqrt()
}
