//! Debug action definitions
//!
//! Everything the keyboard can ask the scaffold to do.

/// All debug actions that can be triggered by input
///
/// Default keyboard mapping:
/// - A/D/W/S = move selected sprite
/// - Arrow keys = pan camera (Left Shift to accelerate)
/// - Backspace = camera back to origin
/// - Comma/Period = zoom out/in, Slash = reset zoom
/// - R = reset world, Space = select next sprite, Enter = toggle follow
/// - P = pause/resume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Selected sprite (polled)
    MoveSpriteLeft,
    MoveSpriteRight,
    MoveSpriteUp,
    MoveSpriteDown,

    // Camera (polled)
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    Accelerate,
    ResetCameraPosition,
    ZoomIn,
    ZoomOut,
    ResetZoom,

    // Fire once on key release
    ResetWorld,
    CycleSelection,
    ToggleFollow,
    TogglePause,
}

impl Action {
    /// Actions handled on key release rather than while held
    pub const RELEASE: [Action; 4] = [
        Action::ResetWorld,
        Action::CycleSelection,
        Action::ToggleFollow,
        Action::TogglePause,
    ];

    #[allow(dead_code)]
    pub fn is_release(self) -> bool {
        Self::RELEASE.contains(&self)
    }
}
