//! Camera helper
//!
//! Holds where the camera should look and how far it is zoomed, independent
//! of any render state. Optionally follows a sprite: while a target is set,
//! every `update` snaps the position to the target's center (no smoothing).

use macroquad::math::Vec2;

use super::camera::OrthoCamera;
use super::sprite::{Sprite, SpriteHandle};
use crate::config::GameConfig;

/// Camera position, clamped zoom and follow target.
#[derive(Debug, Clone)]
pub struct CameraHelper {
    position: Vec2,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    target: Option<SpriteHandle>,
}

impl CameraHelper {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0f32.clamp(config.min_zoom, config.max_zoom),
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            target: None,
        }
    }

    /// Snap to the target's center. dt is unused; the camera never lags.
    pub fn update(&mut self, _dt: f32, sprites: &[Sprite]) {
        let Some(target) = self.target.and_then(|t| t.get(sprites)) else {
            return;
        };
        self.position = target.center();
    }

    #[allow(dead_code)]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Move by an offset (overwritten on the next update while following)
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.position.x += dx;
        self.position.y += dy;
    }

    #[allow(dead_code)]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Out-of-range values are clamped, never rejected
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    pub fn add_zoom(&mut self, amount: f32) {
        self.set_zoom(self.zoom + amount);
    }

    #[allow(dead_code)]
    pub fn target(&self) -> Option<SpriteHandle> {
        self.target
    }

    pub fn set_target(&mut self, target: Option<SpriteHandle>) {
        self.target = target;
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    /// Is the camera following this particular sprite?
    #[allow(dead_code)]
    pub fn has_target_sprite(&self, handle: SpriteHandle) -> bool {
        self.target == Some(handle)
    }

    /// Push position and zoom into a render camera and recompute its projection
    pub fn apply_to(&self, camera: &mut OrthoCamera) {
        camera.position = self.position;
        camera.zoom = self.zoom;
        camera.update();
    }
}
