//! Input handling
//!
//! The world only sees the `InputSource` trait, so it can be driven by the
//! macroquad keyboard at runtime and by scripted input in tests.

mod actions;
mod state;

pub use actions::*;
pub use state::*;

/// A per-frame view of input.
pub trait InputSource {
    /// Held-key debug controls only run on desktop platforms
    fn is_desktop(&self) -> bool;

    /// Is the action's key currently held down?
    fn action_down(&self, action: Action) -> bool;

    /// Was the action's key released this frame?
    fn action_released(&self, action: Action) -> bool;

    /// Release-triggered actions that fired this frame, in `Action::RELEASE` order.
    ///
    /// macroquad reports releases as an unordered set, so keys let go in the
    /// same frame are always handled reset, cycle, follow, pause.
    fn released_actions(&self) -> Vec<Action> {
        Action::RELEASE
            .iter()
            .copied()
            .filter(|&a| self.action_released(a))
            .collect()
    }
}
