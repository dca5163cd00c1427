//! Frame-level glue between raw input and the session.
//! Everything here is plain data so the loop logic is testable without a
//! window; the binary gathers `FrameInput` from macroquad each frame.

use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use maze_core::{CueEvent, MazeSession, Phase, PointerSample, Viewport};

use crate::record_file::DepthRecordFile;
use crate::theme::{Theme, ThemeFile};

/// Per-tick fade of the collision flash overlay.
const FLASH_DECAY: f32 = 0.9;

/// Everything the loop consumes in one frame, already decoded from the
/// windowing layer.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub pointer: PointerSample,
    /// Pointer went down this frame; starts an idle session.
    pub start_click: bool,
    pub restart: bool,
    pub cycle_theme: bool,
    pub viewport: Viewport,
}

impl FrameInput {
    pub fn idle(viewport: Viewport) -> Self {
        Self {
            pointer: PointerSample::default(),
            start_click: false,
            restart: false,
            cycle_theme: false,
            viewport,
        }
    }
}

pub struct AppState {
    pub theme: Theme,
    /// Brightness of the screen-edge flash after a wall hit, in `[0, 1]`.
    pub collision_flash: f32,
    pub elapsed_ms: f64,
    viewport: Viewport,
    record_path: Option<PathBuf>,
    theme_path: Option<PathBuf>,
    last_saved_best: u32,
}

impl AppState {
    pub fn new(
        viewport: Viewport,
        record_path: Option<PathBuf>,
        theme_path: Option<PathBuf>,
    ) -> Self {
        Self {
            theme: Theme::default(),
            collision_flash: 0.0,
            elapsed_ms: 0.0,
            viewport,
            record_path,
            theme_path,
            last_saved_best: 0,
        }
    }

    /// Seeds the session and theme from disk. Missing or corrupt files are
    /// treated as a fresh install.
    pub fn load_persisted(&mut self, session: &mut MazeSession) {
        if let Some(path) = &self.record_path
            && let Ok(record) = DepthRecordFile::load(path)
        {
            session.set_best_depth(record.best_depth);
            self.last_saved_best = record.best_depth;
        }
        if let Some(path) = &self.theme_path
            && let Ok(file) = ThemeFile::load(path)
        {
            self.theme = Theme::from_name(&file.theme);
        }
    }

    /// Runs one frame of app logic and returns the session's cue events.
    pub fn frame(
        &mut self,
        session: &mut MazeSession,
        input: &FrameInput,
        dt_ms: f32,
    ) -> Vec<CueEvent> {
        if input.viewport != self.viewport {
            self.viewport = input.viewport;
            session.resize(input.viewport.width, input.viewport.height);
        }

        if input.cycle_theme {
            self.theme = self.theme.cycle();
            self.persist_theme();
        }

        if input.restart {
            session.restart();
            self.elapsed_ms = 0.0;
            self.collision_flash = 0.0;
        }

        if input.start_click && session.phase() == Phase::Idle {
            session.start(input.pointer);
            self.elapsed_ms = 0.0;
        }

        let cues = session.tick(input.pointer, dt_ms);
        if cues.contains(&CueEvent::Collision) {
            self.collision_flash = 1.0;
        }
        self.collision_flash *= FLASH_DECAY;

        if session.phase() == Phase::Active {
            self.elapsed_ms += f64::from(dt_ms);
        }

        self.note_best_depth(session.best_depth());
        cues
    }

    /// Saves the record when it improves. A failed save keeps the old
    /// watermark, so the next improvement retries.
    fn note_best_depth(&mut self, best: u32) {
        if best <= self.last_saved_best {
            return;
        }
        let Some(path) = &self.record_path else {
            self.last_saved_best = best;
            return;
        };
        let record =
            DepthRecordFile { format_version: 1, best_depth: best, updated_at_unix_ms: now_ms() };
        if record.write_atomic(path).is_ok() {
            self.last_saved_best = best;
        }
    }

    fn persist_theme(&self) {
        if let Some(path) = &self.theme_path {
            let file = ThemeFile { format_version: 1, theme: self.theme.name().to_string() };
            // Best effort: the in-memory theme is already switched.
            let _: io::Result<()> = file.write_atomic(path);
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}
