//! Canyon Bunny: a 2D sprite and camera scaffold
//!
//! Five test sprites, a camera that pans, zooms and follows, and debug
//! keyboard controls:
//! - A/D/W/S move the selected sprite, Space selects the next one
//! - Arrow keys pan (Left Shift for speed), Backspace recenters
//! - Comma/Period zoom, Slash resets zoom
//! - Enter toggles camera follow, R resets the world, P pauses, Escape quits

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod game;
mod input;

use macroquad::prelude::*;
use app::CanyonBunny;
use config::GameConfig;
use game::MacroquadBatch;
use input::KeyboardInput;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Canyon Bunny v{}", VERSION),
        window_width: 1024,
        window_height: 768,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Config from `CANYON_BUNNY_CONFIG` or `canyon_bunny.ron`, defaults on any problem
#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> GameConfig {
    let path = std::env::var(config::CONFIG_ENV).unwrap_or_else(|_| config::CONFIG_FILE.to_string());
    match GameConfig::load_or_default(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(target: app::TAG, "Failed to load config {}: {}, using defaults", path, e);
            GameConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> GameConfig {
    GameConfig::default()
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    init_logging();

    let config = load_config();
    let seed = (macroquad::miniquad::date::now() * 1000.0) as u64;
    let input = KeyboardInput::new();

    let mut bunny = CanyonBunny::init(config, MacroquadBatch::new(), seed);
    let mut window_size = (0u32, 0u32);

    tracing::info!(target: app::TAG, "=== Canyon Bunny v{} ===", VERSION);

    loop {
        let size = (screen_width() as u32, screen_height() as u32);
        if size != window_size {
            window_size = size;
            bunny.resize(size.0, size.1);
        }

        bunny.tick(get_frame_time(), &input);

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        next_frame().await;
    }

    bunny.shutdown();
}
