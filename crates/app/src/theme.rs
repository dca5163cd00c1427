//! Color themes and their persistence.
//! `Auto` shifts the accent with depth; the named themes are fixed.

use directories::ProjectDirs;
use macroquad::color::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Auto,
    Cyan,
    Purple,
    Green,
    Red,
}

fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::new(f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0, 1.0)
}

impl Theme {
    pub const ALL: [Theme; 5] = [Theme::Auto, Theme::Cyan, Theme::Purple, Theme::Green, Theme::Red];

    pub fn cycle(self) -> Theme {
        match self {
            Theme::Auto => Theme::Cyan,
            Theme::Cyan => Theme::Purple,
            Theme::Purple => Theme::Green,
            Theme::Green => Theme::Red,
            Theme::Red => Theme::Auto,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Auto => "auto",
            Theme::Cyan => "cyan",
            Theme::Purple => "purple",
            Theme::Green => "green",
            Theme::Red => "red",
        }
    }

    /// Unknown names fall back to `Auto`, so a stale file never breaks
    /// startup.
    pub fn from_name(name: &str) -> Theme {
        match name {
            "cyan" => Theme::Cyan,
            "purple" => Theme::Purple,
            "green" => Theme::Green,
            "red" => Theme::Red,
            _ => Theme::Auto,
        }
    }

    /// Accent color for walls, the ball, and HUD text. `Auto` cools from
    /// cyan toward red as the descent deepens.
    pub fn accent(self, depth: u32) -> Color {
        match self {
            Theme::Auto => match depth {
                0..5 => rgb8(0, 200, 255),
                5..10 => rgb8(50, 200, 200),
                10..20 => rgb8(100, 150, 255),
                20..30 => rgb8(180, 80, 255),
                30..50 => rgb8(255, 100, 200),
                _ => rgb8(255, 60, 90),
            },
            Theme::Cyan => rgb8(0, 200, 255),
            Theme::Purple => rgb8(180, 80, 255),
            Theme::Green => rgb8(50, 230, 150),
            Theme::Red => rgb8(255, 60, 90),
        }
    }

    pub fn background(self, depth: u32) -> Color {
        match self {
            Theme::Auto => match depth {
                0..10 => rgb8(10, 15, 20),
                10..30 => rgb8(20, 10, 25),
                _ => rgb8(25, 10, 12),
            },
            Theme::Cyan => rgb8(10, 15, 20),
            Theme::Purple => rgb8(20, 10, 25),
            Theme::Green => rgb8(10, 20, 15),
            Theme::Red => rgb8(25, 10, 12),
        }
    }
}

/// Persisted theme choice, written on every cycle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ThemeFile {
    pub format_version: u32,
    pub theme: String,
}

impl ThemeFile {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("theme.json");
            path
        })
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(file)
    }
}
