//! One descent run, owned end to end.
//! This module exists to wire generation, movement, and progression into a
//! single tickable object. It does not render and it does not touch disk.

use glam::Vec2;
use xxhash_rust::xxh3::Xxh3;

use crate::goal::{Goal, place_goal};
use crate::grid::{Grid, cell_size_for_depth, grid_dims};
use crate::mazegen::carve_maze;
use crate::mover::{PLAYER_RADIUS, PlayerState, step_player};
use crate::progression::{Phase, Progression};
use crate::rng::RandomSource;
use crate::trail::{TrailLayer, TrailMark};
use crate::types::{CellPos, CueEvent, PointerSample, Viewport};
use crate::walls::{WallSegment, build_wall_segments};

/// Fog radius around the ball within which walls are drawn.
pub const VISIBILITY_RADIUS: f32 = 180.0;
/// Distance at which the goal portal becomes visible.
pub const GOAL_REVEAL_RADIUS: f32 = 200.0;
/// Per-tick shrink of the ball while the descent pause plays out.
const WON_SHRINK: f32 = 0.9;

/// Read-only view of everything the renderer needs for one frame.
pub struct RenderSnapshot<'a> {
    pub walls: &'a [WallSegment],
    pub trail: &'a [TrailMark],
    pub player_pos: Vec2,
    pub player_rotation: f32,
    pub player_scale: f32,
    pub player_radius: f32,
    pub goal_pos: Vec2,
    pub goal_radius: f32,
    pub start_pos: Vec2,
    pub visibility_radius: f32,
    pub goal_reveal_radius: f32,
    pub phase: Phase,
    pub depth: u32,
    pub best_depth: u32,
}

pub struct MazeSession {
    viewport: Viewport,
    cell_size: f32,
    grid: Grid,
    walls: Vec<WallSegment>,
    start_cell: CellPos,
    start_pos: Vec2,
    goal: Goal,
    player: PlayerState,
    trail: TrailLayer,
    progression: Progression,
    rng: Box<dyn RandomSource>,
}

impl MazeSession {
    /// Builds a session at depth 1 in the idle phase. All randomness flows
    /// through `source`, so two sessions built from equal sources evolve
    /// identically under equal inputs.
    pub fn new(viewport: Viewport, source: Box<dyn RandomSource>) -> Self {
        let mut session = Self {
            viewport,
            cell_size: 0.0,
            grid: Grid::new(1, 1),
            walls: Vec::new(),
            start_cell: CellPos { col: 0, row: 0 },
            start_pos: Vec2::ZERO,
            goal: Goal { pos: Vec2::ZERO, radius: 0.0 },
            player: PlayerState::new(Vec2::ZERO),
            trail: TrailLayer::default(),
            progression: Progression::new(),
            rng: source,
        };
        session.generate_level();
        session
    }

    /// Rebuilds the maze for the current depth and puts the ball on the
    /// start cell.
    fn generate_level(&mut self) {
        self.cell_size = cell_size_for_depth(self.progression.depth());
        let (cols, rows) = grid_dims(self.viewport, self.cell_size);
        self.grid = Grid::new(cols, rows);
        self.start_cell = carve_maze(&mut self.grid, self.rng.as_mut());
        self.walls = build_wall_segments(&self.grid, self.cell_size, self.rng.as_mut());
        self.start_pos = Vec2::new(
            (self.start_cell.col as f32 + 0.5) * self.cell_size,
            (self.start_cell.row as f32 + 0.5) * self.cell_size,
        );
        self.goal = place_goal(&self.grid, self.start_cell, self.cell_size, self.rng.as_mut());
        self.trail.clear();
        self.player.reset_for_level(self.start_pos);
    }

    /// Begins the run on the start gesture. The triggering pointer becomes
    /// the drag reference so the tap itself does not move the ball.
    pub fn start(&mut self, pointer: PointerSample) {
        if self.progression.phase() == Phase::Idle {
            self.progression.start();
            self.player.seed_pointer(pointer);
        }
    }

    /// Abandons the run: back to depth 1 on a fresh maze. A pending
    /// descent, if any, is cancelled and never fires into the new level.
    pub fn restart(&mut self) {
        self.progression.reset_run();
        self.generate_level();
    }

    /// Adopts a new viewport and regenerates the current depth. Position
    /// and trail are lost; depth and record are kept.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport { width, height };
        self.generate_level();
    }

    /// Advances the simulation one tick and reports cue events in the
    /// order they occurred. `dt_ms` only drives the descent countdown;
    /// movement is per tick.
    pub fn tick(&mut self, pointer: PointerSample, dt_ms: f32) -> Vec<CueEvent> {
        let mut cues = Vec::new();

        if self.progression.tick(dt_ms).is_some() {
            self.generate_level();
        }

        match self.progression.phase() {
            Phase::Idle => {}
            Phase::Active => {
                self.trail.decay();
                let collided = step_player(
                    &mut self.player,
                    pointer,
                    &self.walls,
                    self.viewport,
                    &mut self.trail,
                );
                if collided {
                    cues.push(CueEvent::Collision);
                }
                if self.goal.captures(self.player.pos) && self.progression.record_win() {
                    cues.push(CueEvent::Win);
                }
            }
            Phase::Won => {
                self.trail.decay();
                self.player.scale *= WON_SHRINK;
            }
        }

        cues
    }

    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            walls: &self.walls,
            trail: self.trail.marks(),
            player_pos: self.player.pos,
            player_rotation: self.player.rotation,
            player_scale: self.player.scale,
            player_radius: PLAYER_RADIUS,
            goal_pos: self.goal.pos,
            goal_radius: self.goal.radius,
            start_pos: self.start_pos,
            visibility_radius: VISIBILITY_RADIUS,
            goal_reveal_radius: GOAL_REVEAL_RADIUS,
            phase: self.progression.phase(),
            depth: self.progression.depth(),
            best_depth: self.progression.best_depth(),
        }
    }

    /// Order-insensitive fingerprint of the simulation state, for
    /// determinism comparisons between runs.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.update(&self.grid.canonical_wall_bytes());
        hasher.update(&self.player.pos.x.to_bits().to_le_bytes());
        hasher.update(&self.player.pos.y.to_bits().to_le_bytes());
        hasher.update(&self.goal.pos.x.to_bits().to_le_bytes());
        hasher.update(&self.goal.pos.y.to_bits().to_le_bytes());
        hasher.update(&self.progression.depth().to_le_bytes());
        hasher.update(&[phase_byte(self.progression.phase())]);
        hasher.digest()
    }

    pub fn phase(&self) -> Phase {
        self.progression.phase()
    }

    pub fn depth(&self) -> u32 {
        self.progression.depth()
    }

    pub fn best_depth(&self) -> u32 {
        self.progression.best_depth()
    }

    /// Seeds the record from persisted state; never lowers it.
    pub fn set_best_depth(&mut self, best: u32) {
        self.progression.set_best_depth(best);
    }
}

fn phase_byte(phase: Phase) -> u8 {
    match phase {
        Phase::Idle => 0,
        Phase::Active => 1,
        Phase::Won => 2,
    }
}
