pub mod goal;
pub mod grid;
pub mod mazegen;
pub mod mover;
pub mod progression;
pub mod rng;
pub mod session;
pub mod trail;
pub mod types;
pub mod walls;

pub use goal::Goal;
pub use grid::{Cell, Grid};
pub use mover::PlayerState;
pub use progression::{Phase, Progression};
pub use rng::{ChaChaSource, RandomSource};
pub use session::{MazeSession, RenderSnapshot};
pub use trail::{TrailLayer, TrailMark};
pub use types::*;
pub use walls::WallSegment;
