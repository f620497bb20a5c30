//! Game world
//!
//! Test sprites, the camera that looks at them, and the renderer that draws
//! them.
//!
//! Per frame the host calls `WorldController::update`, then
//! `WorldRenderer::render`, which pushes the `CameraHelper` state into the
//! `OrthoCamera` before submitting sprites to the batch.

pub mod batch;
pub mod camera;
pub mod camera_helper;
pub mod controller;
pub mod renderer;
pub mod sprite;

pub use batch::MacroquadBatch;
pub use controller::WorldController;
pub use renderer::{SpriteBatch, WorldRenderer};
