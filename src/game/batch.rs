//! Macroquad sprite batch
//!
//! `SpriteBatch` on top of macroquad's immediate-mode draw calls. Every sprite
//! shares one procedurally generated test texture.

use macroquad::prelude::*;

use super::camera::OrthoCamera;
use super::renderer::SpriteBatch;
use super::sprite::Sprite;

/// Edge length of the test texture in pixels
pub const TEST_TEXTURE_SIZE: u16 = 32;

const FILL: [u8; 4] = [255, 0, 0, 128];
const CROSS: [u8; 4] = [255, 255, 0, 255];
const BORDER: [u8; 4] = [0, 255, 255, 255];

/// RGBA8 pixels of the test pattern: translucent red, yellow X, cyan outline
pub fn test_pattern(size: u16) -> Vec<u8> {
    let n = size as usize;
    let mut pixels = Vec::with_capacity(n * n * 4);
    for y in 0..n {
        for x in 0..n {
            let color = if x == 0 || y == 0 || x == n - 1 || y == n - 1 {
                BORDER
            } else if x == y || x + y == n - 1 {
                CROSS
            } else {
                FILL
            };
            pixels.extend_from_slice(&color);
        }
    }
    pixels
}

pub struct MacroquadBatch {
    texture: Texture2D,
}

impl MacroquadBatch {
    /// Upload the test texture. Needs a live macroquad context, so no `Default`
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let pixels = test_pattern(TEST_TEXTURE_SIZE);
        let texture = Texture2D::from_rgba8(TEST_TEXTURE_SIZE, TEST_TEXTURE_SIZE, &pixels);
        texture.set_filter(FilterMode::Nearest);
        Self { texture }
    }
}

impl SpriteBatch for MacroquadBatch {
    fn clear(&mut self, color: [f32; 4]) {
        clear_background(Color::new(color[0], color[1], color[2], color[3]));
    }

    fn begin(&mut self, camera: &OrthoCamera) {
        set_camera(camera);
    }

    fn draw(&mut self, sprite: &Sprite) {
        draw_texture_ex(
            &self.texture,
            sprite.x,
            sprite.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(sprite.width, sprite.height)),
                rotation: sprite.rotation.to_radians(),
                pivot: Some(sprite.center()),
                // Texture row 0 at the sprite's top edge under a y-up camera
                flip_y: true,
                ..Default::default()
            },
        );
    }

    fn end(&mut self) {
        set_default_camera();
    }
}
