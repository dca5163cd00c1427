//! Fading movement trail.
//! This module exists to keep the breadcrumb marks the renderer fades out.
//! It does not decide when marks are laid down; `mover` does.

use glam::Vec2;

/// Per-tick multiplicative fade applied to every mark.
pub const TRAIL_DECAY: f32 = 0.98;
/// Marks below this strength are dropped.
pub const TRAIL_FLOOR: f32 = 0.05;
/// Hard cap on live marks; the oldest are dropped first.
pub const TRAIL_CAPACITY: usize = 4096;

#[derive(Clone, Copy, Debug)]
pub struct TrailMark {
    pub pos: Vec2,
    /// Render intensity in `(0, 1]`.
    pub strength: f32,
}

#[derive(Clone, Debug, Default)]
pub struct TrailLayer {
    marks: Vec<TrailMark>,
}

impl TrailLayer {
    pub fn marks(&self) -> &[TrailMark] {
        &self.marks
    }

    pub fn mark(&mut self, pos: Vec2) {
        if self.marks.len() == TRAIL_CAPACITY {
            self.marks.remove(0);
        }
        self.marks.push(TrailMark { pos, strength: 1.0 });
    }

    /// Fades all marks one tick and discards the ones that dropped below
    /// the floor.
    pub fn decay(&mut self) {
        for mark in &mut self.marks {
            mark.strength *= TRAIL_DECAY;
        }
        self.marks.retain(|mark| mark.strength > TRAIL_FLOOR);
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_marks_start_at_full_strength() {
        let mut trail = TrailLayer::default();
        trail.mark(Vec2::new(10.0, 20.0));
        assert_eq!(trail.marks().len(), 1);
        assert_eq!(trail.marks()[0].strength, 1.0);
    }

    #[test]
    fn decay_eventually_drops_every_mark() {
        let mut trail = TrailLayer::default();
        trail.mark(Vec2::ZERO);
        let mut previous = 1.0;
        for _ in 0..200 {
            trail.decay();
            if let Some(mark) = trail.marks().first() {
                assert!(mark.strength < previous);
                previous = mark.strength;
            }
        }
        assert!(trail.marks().is_empty());
    }

    #[test]
    fn capacity_drops_the_oldest_mark_first() {
        let mut trail = TrailLayer::default();
        for index in 0..=TRAIL_CAPACITY {
            trail.mark(Vec2::new(index as f32, 0.0));
        }
        assert_eq!(trail.marks().len(), TRAIL_CAPACITY);
        assert_eq!(trail.marks()[0].pos.x, 1.0);
    }

    #[test]
    fn clear_empties_the_layer() {
        let mut trail = TrailLayer::default();
        trail.mark(Vec2::ZERO);
        trail.mark(Vec2::ONE);
        trail.clear();
        assert!(trail.marks().is_empty());
    }
}
