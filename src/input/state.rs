//! Keyboard input
//!
//! Polls macroquad's keyboard state and maps it to debug actions.

use macroquad::prelude::{is_key_down, is_key_released, KeyCode};
use super::{Action, InputSource};

/// Keyboard-backed input for the running game
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        Self
    }

    /// The key bound to an action
    pub fn key_for(action: Action) -> KeyCode {
        match action {
            Action::MoveSpriteLeft => KeyCode::A,
            Action::MoveSpriteRight => KeyCode::D,
            Action::MoveSpriteUp => KeyCode::W,
            Action::MoveSpriteDown => KeyCode::S,

            Action::PanLeft => KeyCode::Left,
            Action::PanRight => KeyCode::Right,
            Action::PanUp => KeyCode::Up,
            Action::PanDown => KeyCode::Down,
            Action::Accelerate => KeyCode::LeftShift,
            Action::ResetCameraPosition => KeyCode::Backspace,
            Action::ZoomOut => KeyCode::Comma,
            Action::ZoomIn => KeyCode::Period,
            Action::ResetZoom => KeyCode::Slash,

            Action::ResetWorld => KeyCode::R,
            Action::CycleSelection => KeyCode::Space,
            Action::ToggleFollow => KeyCode::Enter,
            Action::TogglePause => KeyCode::P,
        }
    }
}

impl InputSource for KeyboardInput {
    fn is_desktop(&self) -> bool {
        cfg!(not(any(target_arch = "wasm32", target_os = "android", target_os = "ios")))
    }

    fn action_down(&self, action: Action) -> bool {
        is_key_down(Self::key_for(action))
    }

    fn action_released(&self, action: Action) -> bool {
        is_key_released(Self::key_for(action))
    }
}
