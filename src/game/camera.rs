//! Orthographic camera
//!
//! The camera object the renderer draws through. World space is y-up; the
//! visible rectangle is centered on `position` and measures
//! `viewport_width * zoom` by `viewport_height * zoom`, so a larger zoom shows
//! more of the world.
//!
//! `OrthoCamera` implements macroquad's `Camera`, so `set_camera` draws
//! through the same cached matrix that `project` uses.

use macroquad::camera::Camera;
use macroquad::texture::RenderPass;
use macroquad::prelude::{vec2, Mat4, Vec2, Vec3};

/// 2D orthographic camera with a cached projection matrix.
#[derive(Debug, Clone)]
pub struct OrthoCamera {
    pub position: Vec2,
    pub zoom: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Projection * view, valid after the last `update()`
    combined: Mat4,
}

impl OrthoCamera {
    /// Create a camera at the origin; the projection is computed immediately
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let mut cam = Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            viewport_width,
            viewport_height,
            combined: Mat4::IDENTITY,
        };
        cam.update();
        cam
    }

    /// Recompute the combined matrix from position, zoom and viewport.
    /// Call after changing any public field.
    pub fn update(&mut self) {
        let half_w = self.viewport_width * self.zoom / 2.0;
        let half_h = self.viewport_height * self.zoom / 2.0;
        self.combined = Mat4::orthographic_rh_gl(
            self.position.x - half_w,
            self.position.x + half_w,
            self.position.y - half_h,
            self.position.y + half_h,
            -1.0,
            1.0,
        );
    }

    /// Map a world point to normalized device coordinates (-1..1 inside the view)
    #[allow(dead_code)]
    pub fn project(&self, world: Vec2) -> Vec2 {
        let p = self.combined.project_point3(Vec3::new(world.x, world.y, 0.0));
        vec2(p.x, p.y)
    }

    /// Visible world rectangle as (left, bottom, width, height)
    #[allow(dead_code)]
    pub fn visible_rect(&self) -> (f32, f32, f32, f32) {
        let w = self.viewport_width * self.zoom;
        let h = self.viewport_height * self.zoom;
        (self.position.x - w / 2.0, self.position.y - h / 2.0, w, h)
    }
}

impl Camera for OrthoCamera {
    fn matrix(&self) -> Mat4 {
        self.combined
    }

    fn depth_enabled(&self) -> bool {
        false
    }

    // Draws straight to the screen
    fn render_pass(&self) -> Option<RenderPass> {
        None
    }

    fn viewport(&self) -> Option<(i32, i32, i32, i32)> {
        None
    }
}
