//! Sprite
//!
//! Plain 2D placement data for one drawable quad: bottom-left position,
//! size, rotation origin (relative to position) and rotation in degrees.
//! The renderer decides which texture goes on it.

use macroquad::math::Vec2;

/// A positioned, rotatable quad in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Rotation/scale origin, relative to (x, y)
    pub origin_x: f32,
    pub origin_y: f32,
    /// Counter-clockwise rotation in degrees
    pub rotation: f32,
}

impl Sprite {
    /// Create a sprite of the given size at the origin, pivoting on its center
    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            origin_x: width / 2.0,
            origin_y: height / 2.0,
            rotation: 0.0,
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Translate by an offset
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// World-space point the sprite rotates around
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.origin_x, self.y + self.origin_y)
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::with_size(1.0, 1.0)
    }
}

/// Index of a sprite in the controller's sprite sequence.
///
/// Stays valid across world resets: it names a slot, not a particular sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteHandle(pub usize);

impl SpriteHandle {
    /// Resolve against a sprite sequence
    pub fn get(self, sprites: &[Sprite]) -> Option<&Sprite> {
        sprites.get(self.0)
    }
}
