//! Drag-driven ball movement and wall response.
//! This module exists to turn pointer deltas into sub-stepped motion.
//! It does not own level layout; walls arrive as plain slabs.

use glam::Vec2;

use crate::trail::TrailLayer;
use crate::types::{PointerSample, Viewport};
use crate::walls::WallSegment;

/// Pointer delta to velocity gain.
pub const SENSITIVITY: f32 = 0.75;
/// Damping applied on top of the sensitivity while dragging.
pub const DRAG_FRICTION: f32 = 0.55;
/// Movement resolution; each tick's velocity is applied in this many slices.
pub const SUB_STEPS: u32 = 6;
/// Push-back distance along the radial away from a struck wall's center.
pub const REPULSION_NUDGE: f32 = 10.0;
/// Per-tick velocity retention while the pointer is up.
pub const IDLE_DECAY: f32 = 0.3;
/// Velocity to spin coupling for the rolling animation.
pub const ROLL_FACTOR: f32 = 0.12;
/// The ball center never leaves this margin inside the viewport.
pub const EDGE_MARGIN: f32 = 8.0;
/// Per-tick interpolation of the render scale toward 1.
pub const SCALE_LERP: f32 = 0.08;
/// Collision radius of the ball.
pub const PLAYER_RADIUS: f32 = 12.0;
/// Render scale the ball enters a level at; it settles toward 1.
pub const ENTRY_SCALE: f32 = 1.5;

/// Sub-steps shorter than this lay no trail mark.
const TRAIL_STEP_EPSILON: f32 = 0.0025;

#[derive(Clone, Copy, Debug)]
pub struct PlayerState {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Accumulated roll angle, radians. Render only.
    pub rotation: f32,
    /// Render scale; decays toward 1 and is shrunk externally on a win.
    pub scale: f32,
    prev_input: Vec2,
    dragging: bool,
}

impl PlayerState {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            rotation: 0.0,
            scale: ENTRY_SCALE,
            prev_input: Vec2::ZERO,
            dragging: false,
        }
    }

    /// Adopts the pointer that triggered the start gesture as the drag
    /// reference, so the starting tap itself imparts no velocity.
    pub(crate) fn seed_pointer(&mut self, input: PointerSample) {
        if input.active {
            self.dragging = true;
            self.prev_input = Vec2::new(input.x, input.y);
        }
    }

    pub fn reset_for_level(&mut self, start: Vec2) {
        self.pos = start;
        self.vel = Vec2::ZERO;
        self.rotation = 0.0;
        self.scale = ENTRY_SCALE;
        self.dragging = false;
    }
}

/// Advances the ball one tick. Returns true when a wall was struck.
///
/// The first active pointer frame only seeds the reference point, so a
/// finger landing far from the ball cannot teleport it. Velocity is applied
/// in `SUB_STEPS` slices; the first slice that would put the ball inside an
/// inflated wall stops the tick and nudges the ball away from that wall.
pub fn step_player(
    player: &mut PlayerState,
    input: PointerSample,
    walls: &[WallSegment],
    viewport: Viewport,
    trail: &mut TrailLayer,
) -> bool {
    if input.active {
        let point = Vec2::new(input.x, input.y);
        if player.dragging {
            player.vel = (point - player.prev_input) * SENSITIVITY * DRAG_FRICTION;
        } else {
            player.dragging = true;
            player.vel = Vec2::ZERO;
        }
        player.prev_input = point;
    } else {
        player.dragging = false;
        player.vel *= IDLE_DECAY;
    }

    // Candidates are clamped before the wall test so a committed position
    // is always both in bounds and clear of every inflated slab. The nudge
    // destination goes through the same check; a blocked nudge leaves the
    // ball on its last clear position instead of pushing it into a
    // neighboring wall.
    let mut collided = false;
    let step = player.vel / SUB_STEPS as f32;
    for _ in 0..SUB_STEPS {
        let candidate = clamp_to_viewport(player.pos + step, viewport);
        match walls.iter().find(|wall| wall.contains_inflated(candidate, PLAYER_RADIUS)) {
            None => {
                player.pos = candidate;
                if step.length_squared() > TRAIL_STEP_EPSILON {
                    trail.mark(player.pos);
                }
            }
            Some(wall) => {
                collided = true;
                let away = (player.pos - wall.center()).normalize_or_zero();
                let pushed = clamp_to_viewport(player.pos + away * REPULSION_NUDGE, viewport);
                if !walls.iter().any(|wall| wall.contains_inflated(pushed, PLAYER_RADIUS)) {
                    player.pos = pushed;
                }
                break;
            }
        }
    }

    player.rotation += (player.vel.x + player.vel.y) * ROLL_FACTOR;
    player.scale += (1.0 - player.scale) * SCALE_LERP;

    collided
}

fn clamp_to_viewport(pos: Vec2, viewport: Viewport) -> Vec2 {
    Vec2::new(
        pos.x.clamp(EDGE_MARGIN, (viewport.width - EDGE_MARGIN).max(EDGE_MARGIN)),
        pos.y.clamp(EDGE_MARGIN, (viewport.height - EDGE_MARGIN).max(EDGE_MARGIN)),
    )
}
