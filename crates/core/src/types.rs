/// Grid coordinates of one maze cell, column-major in naming only; storage
/// is row-major (`col + row * cols`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellPos {
    pub col: usize,
    pub row: usize,
}

/// The four walls of a cell in emission order: top, right, bottom, left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }
}

/// One pointer/touch sample for a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

/// Pixel dimensions of the playfield the session lays its grid over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Fire-and-forget cue events for the haptic/audio collaborator.
/// The collaborator is free to ignore any of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CueEvent {
    Collision,
    Win,
}
