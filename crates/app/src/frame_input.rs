//! Translates macroquad input into a plain `FrameInput`.
//! The first touch wins on multi-touch devices; the mouse stands in for a
//! finger on desktop.

use macroquad::input::{
    KeyCode, MouseButton, is_key_pressed, is_mouse_button_down, is_mouse_button_pressed,
    mouse_position, touches,
};
use macroquad::window::{screen_height, screen_width};
use maze_app::app_loop::FrameInput;
use maze_core::{PointerSample, Viewport};

pub fn gather() -> FrameInput {
    let viewport = Viewport { width: screen_width(), height: screen_height() };

    let pointer = match touches().first() {
        Some(touch) => {
            PointerSample { x: touch.position.x, y: touch.position.y, active: true }
        }
        None => {
            let (x, y) = mouse_position();
            PointerSample { x, y, active: is_mouse_button_down(MouseButton::Left) }
        }
    };

    FrameInput {
        pointer,
        start_click: is_mouse_button_pressed(MouseButton::Left) || !touches().is_empty(),
        restart: is_key_pressed(KeyCode::R),
        cycle_theme: is_key_pressed(KeyCode::T),
        viewport,
    }
}
