//! Application lifecycle
//!
//! `CanyonBunny` ties the controller and renderer together and exposes the
//! host lifecycle as plain methods: init, resize, tick, pause, resume,
//! shutdown. Pausing only stops world updates; input events and rendering
//! still run every tick.

use crate::config::GameConfig;
use crate::game::{SpriteBatch, WorldController, WorldRenderer};
use crate::input::{Action, InputSource};

pub const TAG: &str = "CanyonBunny";

pub struct CanyonBunny<B: SpriteBatch> {
    config: GameConfig,
    controller: WorldController,
    renderer: WorldRenderer<B>,
    paused: bool,
}

impl<B: SpriteBatch> CanyonBunny<B> {
    /// Build the world from scratch
    pub fn init(config: GameConfig, batch: B, seed: u64) -> Self {
        tracing::debug!(target: TAG, "create()");
        let controller = WorldController::new(&config, seed);
        let renderer = WorldRenderer::new(&config, batch);
        Self {
            config,
            controller,
            renderer,
            paused: false,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        tracing::debug!(target: TAG, "resize({}, {})", width, height);
        self.renderer.resize(width, height);
    }

    /// Run one frame: key releases, world update (unless paused), draw
    pub fn tick(&mut self, dt: f32, input: &impl InputSource) {
        for action in input.released_actions() {
            if action == Action::TogglePause {
                if self.paused {
                    self.resume();
                } else {
                    self.pause();
                }
            } else {
                self.controller.key_up(action);
            }
        }

        if !self.paused {
            self.controller.update(dt, input);
        }

        self.renderer.clear(self.config.clear_color);
        self.renderer.render(&self.controller);
    }

    pub fn pause(&mut self) {
        tracing::debug!(target: TAG, "pause()");
        self.paused = true;
    }

    pub fn resume(&mut self) {
        tracing::debug!(target: TAG, "resume()");
        self.paused = false;
    }

    #[allow(dead_code)]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[allow(dead_code)]
    pub fn controller(&self) -> &WorldController {
        &self.controller
    }

    #[allow(dead_code)]
    pub fn renderer(&self) -> &WorldRenderer<B> {
        &self.renderer
    }

    /// Tear down and release render resources
    pub fn shutdown(self) {
        tracing::debug!(target: TAG, "dispose()");
        self.renderer.dispose();
    }
}
