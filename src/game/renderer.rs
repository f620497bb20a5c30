//! World Renderer
//!
//! Projects the controller's camera helper onto an orthographic camera and
//! submits every sprite to a `SpriteBatch`, in array order (later sprites draw
//! on top). The renderer owns the batch; dropping the renderer releases it.

use super::camera::OrthoCamera;
use super::controller::WorldController;
use super::sprite::Sprite;
use crate::config::GameConfig;

pub const TAG: &str = "WorldRenderer";

/// Ordered sprite submission, scoped by `begin`/`end` once per frame.
pub trait SpriteBatch {
    /// Fill the whole screen with a color (RGBA, 0.0-1.0)
    fn clear(&mut self, color: [f32; 4]);

    /// Start a frame's draws through `camera`
    fn begin(&mut self, camera: &OrthoCamera);

    /// Queue one sprite; draw order follows call order
    fn draw(&mut self, sprite: &Sprite);

    /// Finish the frame's draws
    fn end(&mut self);
}

pub struct WorldRenderer<B: SpriteBatch> {
    batch: B,
    camera: OrthoCamera,
    /// Fixed world height of the viewport; width follows the window aspect
    viewport_height: f32,
}

impl<B: SpriteBatch> WorldRenderer<B> {
    pub fn new(config: &GameConfig, batch: B) -> Self {
        let camera = OrthoCamera::new(config.viewport_width, config.viewport_height);
        Self {
            batch,
            camera,
            viewport_height: config.viewport_height,
        }
    }

    pub fn clear(&mut self, color: [f32; 4]) {
        self.batch.clear(color);
    }

    /// Draw every sprite through the controller's camera
    pub fn render(&mut self, controller: &WorldController) {
        controller.camera_helper().apply_to(&mut self.camera);
        self.batch.begin(&self.camera);
        for sprite in controller.sprites() {
            self.batch.draw(sprite);
        }
        self.batch.end();
    }

    /// Keep the viewport height fixed and match the window's aspect ratio
    pub fn resize(&mut self, width: u32, height: u32) {
        if height == 0 {
            return;
        }
        self.camera.viewport_width = (self.viewport_height / height as f32) * width as f32;
        self.camera.update();
    }

    #[allow(dead_code)]
    pub fn camera(&self) -> &OrthoCamera {
        &self.camera
    }

    /// Release the batch
    pub fn dispose(self) {
        tracing::debug!(target: TAG, "dispose()");
        drop(self.batch);
    }
}
