//! Collision geometry derived from surviving cell walls.
//! This module exists to turn wall flags into axis-aligned hit volumes.
//! It does not own movement resolution; that belongs to `mover`.

use glam::Vec2;

use crate::grid::Grid;
use crate::rng::RandomSource;

/// Wall slab thickness in pixels, independent of depth.
pub const WALL_THICKNESS: f32 = 14.0;
/// Per-corner jitter magnitude for organic rendering. Collision ignores it.
pub const WALL_JITTER: f32 = 3.0;

/// One axis-aligned rectangular obstacle centered on a wall midpoint.
/// Adjacent cells each emit their own copy of a shared boundary; both
/// copies sit on the same midpoint, so the duplication is harmless and
/// kept intentionally.
#[derive(Clone, Copy, Debug)]
pub struct WallSegment {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Corner offsets (x, y per corner, clockwise from top-left), render
    /// only.
    pub jitter: [f32; 8],
}

impl WallSegment {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Containment test against the rectangle inflated by the player's
    /// collision radius on every side.
    pub fn contains_inflated(&self, point: Vec2, radius: f32) -> bool {
        point.x >= self.x - self.width / 2.0 - radius
            && point.x <= self.x + self.width / 2.0 + radius
            && point.y >= self.y - self.height / 2.0 - radius
            && point.y <= self.y + self.height / 2.0 + radius
    }
}

/// Emits one segment per still-present wall of every cell, in top, right,
/// bottom, left order.
pub fn build_wall_segments(
    grid: &Grid,
    cell_size: f32,
    rng: &mut dyn RandomSource,
) -> Vec<WallSegment> {
    let mut segments = Vec::new();

    for cell in grid.cells() {
        let x = cell.col as f32 * cell_size;
        let y = cell.row as f32 * cell_size;

        if cell.walls[0] {
            segments.push(segment(x + cell_size / 2.0, y, cell_size, WALL_THICKNESS, rng));
        }
        if cell.walls[1] {
            segments.push(segment(
                x + cell_size,
                y + cell_size / 2.0,
                WALL_THICKNESS,
                cell_size,
                rng,
            ));
        }
        if cell.walls[2] {
            segments.push(segment(
                x + cell_size / 2.0,
                y + cell_size,
                cell_size,
                WALL_THICKNESS,
                rng,
            ));
        }
        if cell.walls[3] {
            segments.push(segment(x, y + cell_size / 2.0, WALL_THICKNESS, cell_size, rng));
        }
    }

    segments
}

fn segment(x: f32, y: f32, width: f32, height: f32, rng: &mut dyn RandomSource) -> WallSegment {
    let mut jitter = [0.0_f32; 8];
    for offset in &mut jitter {
        *offset = rng.jitter(WALL_JITTER);
    }
    WallSegment { x, y, width, height, jitter }
}
