//! World Controller
//!
//! Owns the test sprites and the camera helper, and turns debug input into
//! changes to both. Selection and follow-mode form the whole state machine:
//! follow-mode is on exactly when the camera helper has a target, and the
//! target always names the selected sprite.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::camera_helper::CameraHelper;
use super::sprite::{Sprite, SpriteHandle};
use crate::config::GameConfig;
use crate::input::{Action, InputSource};

pub const TAG: &str = "WorldController";

/// Number of test sprites in the world
pub const SPRITE_COUNT: usize = 5;

pub struct WorldController {
    config: GameConfig,
    sprites: [Sprite; SPRITE_COUNT],
    selected: usize,
    camera_helper: CameraHelper,
    rng: SmallRng,
}

impl WorldController {
    /// Create the world; `seed` drives sprite spawn positions
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut controller = Self {
            config: config.clone(),
            sprites: [Sprite::default(); SPRITE_COUNT],
            selected: 0,
            camera_helper: CameraHelper::new(config),
            rng: SmallRng::seed_from_u64(seed),
        };
        controller.init();
        controller
    }

    /// (Re)create all sprites at random positions and select the first one
    pub fn init(&mut self) {
        let size = self.config.sprite_size;
        let extent = self.config.spawn_extent;
        for sprite in &mut self.sprites {
            let mut spr = Sprite::with_size(size, size);
            let x = self.rng.gen_range(-extent..=extent);
            let y = self.rng.gen_range(-extent..=extent);
            spr.set_position(x, y);
            *sprite = spr;
        }
        self.selected = 0;

        if self.is_following() {
            self.camera_helper.set_target(Some(SpriteHandle(self.selected)));
        }
    }

    /// Advance one frame: debug input, selected-sprite spin, camera tracking
    pub fn update(&mut self, dt: f32, input: &impl InputSource) {
        self.handle_debug_input(dt, input);
        self.update_test_objects(dt);
        self.camera_helper.update(dt, &self.sprites);
    }

    fn update_test_objects(&mut self, dt: f32) {
        let sprite = &mut self.sprites[self.selected];
        sprite.rotation = (sprite.rotation + self.config.rotation_speed * dt) % 360.0;
    }

    fn handle_debug_input(&mut self, dt: f32, input: &impl InputSource) {
        if !input.is_desktop() {
            return;
        }

        // Selected-sprite controls
        let sprite_move_speed = self.config.sprite_move_speed * dt;
        if input.action_down(Action::MoveSpriteLeft) {
            self.move_selected_sprite(-sprite_move_speed, 0.0);
        }
        if input.action_down(Action::MoveSpriteRight) {
            self.move_selected_sprite(sprite_move_speed, 0.0);
        }
        if input.action_down(Action::MoveSpriteUp) {
            self.move_selected_sprite(0.0, sprite_move_speed);
        }
        if input.action_down(Action::MoveSpriteDown) {
            self.move_selected_sprite(0.0, -sprite_move_speed);
        }

        let accelerate = input.action_down(Action::Accelerate);

        // Camera controls
        let mut camera_move_speed = self.config.camera_move_speed * dt;
        if accelerate {
            camera_move_speed *= self.config.acceleration_factor;
        }
        if input.action_down(Action::PanLeft) {
            self.camera_helper.translate(-camera_move_speed, 0.0);
        }
        if input.action_down(Action::PanRight) {
            self.camera_helper.translate(camera_move_speed, 0.0);
        }
        // Vertical pan runs opposite to W/S sprite movement
        if input.action_down(Action::PanUp) {
            self.camera_helper.translate(0.0, -camera_move_speed);
        }
        if input.action_down(Action::PanDown) {
            self.camera_helper.translate(0.0, camera_move_speed);
        }
        if input.action_down(Action::ResetCameraPosition) {
            self.camera_helper.set_position(macroquad::math::Vec2::ZERO);
        }

        // Camera zoom controls
        let mut camera_zoom_speed = self.config.camera_zoom_speed * dt;
        if accelerate {
            camera_zoom_speed *= self.config.acceleration_factor;
        }
        if input.action_down(Action::ZoomOut) {
            self.camera_helper.add_zoom(camera_zoom_speed);
        }
        if input.action_down(Action::ZoomIn) {
            self.camera_helper.add_zoom(-camera_zoom_speed);
        }
        if input.action_down(Action::ResetZoom) {
            self.camera_helper.set_zoom(1.0);
        }
    }

    fn move_selected_sprite(&mut self, dx: f32, dy: f32) {
        self.sprites[self.selected].translate(dx, dy);
    }

    /// Handle a key-release action. Returns true if the action was consumed.
    pub fn key_up(&mut self, action: Action) -> bool {
        match action {
            Action::ResetWorld => {
                self.init();
                tracing::debug!(target: TAG, "Reset game world");
                true
            }
            Action::CycleSelection => {
                self.selected = (self.selected + 1) % SPRITE_COUNT;
                if self.is_following() {
                    self.camera_helper.set_target(Some(SpriteHandle(self.selected)));
                }
                tracing::debug!(target: TAG, "Sprite {} selected", self.selected);
                true
            }
            Action::ToggleFollow => {
                let target = if self.is_following() {
                    None
                } else {
                    Some(SpriteHandle(self.selected))
                };
                self.camera_helper.set_target(target);
                tracing::debug!(target: TAG, "Camera follow enabled: {}", self.is_following());
                true
            }
            _ => false,
        }
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    #[allow(dead_code)]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[allow(dead_code)]
    pub fn selected_sprite(&self) -> &Sprite {
        &self.sprites[self.selected]
    }

    pub fn camera_helper(&self) -> &CameraHelper {
        &self.camera_helper
    }

    #[allow(dead_code)]
    pub fn camera_helper_mut(&mut self) -> &mut CameraHelper {
        &mut self.camera_helper
    }

    /// Follow-mode is on while the camera has a target
    pub fn is_following(&self) -> bool {
        self.camera_helper.has_target()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use macroquad::math::vec2;
    use std::collections::HashSet;

    /// Scripted input: a fixed set of held and released actions
    #[derive(Default)]
    pub(crate) struct ScriptedInput {
        pub mobile: bool,
        pub down: HashSet<Action>,
        pub released: HashSet<Action>,
    }

    impl ScriptedInput {
        pub fn holding(actions: &[Action]) -> Self {
            Self {
                down: actions.iter().copied().collect(),
                ..Default::default()
            }
        }

        pub fn releasing(actions: &[Action]) -> Self {
            Self {
                released: actions.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn is_desktop(&self) -> bool {
            !self.mobile
        }

        fn action_down(&self, action: Action) -> bool {
            self.down.contains(&action)
        }

        fn action_released(&self, action: Action) -> bool {
            self.released.contains(&action)
        }
    }

    fn controller() -> WorldController {
        WorldController::new(&GameConfig::default(), 42)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.0001
    }

    #[test]
    fn test_init_spawns_sprites_in_range() {
        let c = controller();
        assert_eq!(c.sprites().len(), SPRITE_COUNT);
        assert_eq!(c.selected(), 0);
        for s in c.sprites() {
            assert!((-2.0..=2.0).contains(&s.x));
            assert!((-2.0..=2.0).contains(&s.y));
            assert_eq!((s.width, s.height), (1.0, 1.0));
            assert_eq!((s.origin_x, s.origin_y), (0.5, 0.5));
            assert_eq!(s.rotation, 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = WorldController::new(&GameConfig::default(), 7);
        let b = WorldController::new(&GameConfig::default(), 7);
        assert_eq!(a.sprites(), b.sprites());
    }

    #[test]
    fn test_reset_regenerates_and_reselects() {
        let mut c = controller();
        let before = c.sprites().to_vec();
        c.key_up(Action::CycleSelection);
        c.key_up(Action::CycleSelection);
        assert_eq!(c.selected(), 2);

        assert!(c.key_up(Action::ResetWorld));
        assert_eq!(c.selected(), 0);
        assert_ne!(c.sprites(), &before[..]);
    }

    #[test]
    fn test_cycle_wraps() {
        let mut c = controller();
        for _ in 0..SPRITE_COUNT {
            c.key_up(Action::CycleSelection);
        }
        assert_eq!(c.selected(), 0);
    }

    #[test]
    fn test_toggle_follow_targets_selection() {
        let mut c = controller();
        c.key_up(Action::CycleSelection);
        c.key_up(Action::CycleSelection);

        c.key_up(Action::ToggleFollow);
        assert!(c.is_following());
        assert!(c.camera_helper().has_target_sprite(SpriteHandle(2)));

        c.key_up(Action::ToggleFollow);
        assert!(!c.is_following());
        assert_eq!(c.camera_helper().target(), None);
    }

    #[test]
    fn test_cycle_retargets_while_following() {
        let mut c = controller();
        c.key_up(Action::ToggleFollow);
        c.key_up(Action::CycleSelection);
        assert!(c.camera_helper().has_target_sprite(SpriteHandle(1)));

        let input = ScriptedInput::default();
        c.update(0.0, &input);
        assert_eq!(c.camera_helper().position(), c.sprites()[1].center());
    }

    #[test]
    fn test_cycle_without_follow_keeps_no_target() {
        let mut c = controller();
        c.key_up(Action::CycleSelection);
        assert!(!c.is_following());
    }

    #[test]
    fn test_reset_while_following_targets_first_sprite() {
        let mut c = controller();
        c.key_up(Action::CycleSelection);
        c.key_up(Action::ToggleFollow);
        c.key_up(Action::ResetWorld);
        assert!(c.camera_helper().has_target_sprite(SpriteHandle(0)));
    }

    #[test]
    fn test_unhandled_key_up() {
        let mut c = controller();
        assert!(!c.key_up(Action::PanLeft));
        assert!(!c.key_up(Action::TogglePause));
    }

    #[test]
    fn test_selected_sprite_rotates() {
        let mut c = controller();
        let input = ScriptedInput::default();
        c.update(0.5, &input);
        assert!(approx(c.selected_sprite().rotation, 45.0));
        // Others untouched
        assert_eq!(c.sprites()[1].rotation, 0.0);
    }

    #[test]
    fn test_rotation_wraps_at_360() {
        let mut c = controller();
        let input = ScriptedInput::default();
        c.update(3.0, &input);
        c.update(1.5, &input);
        // 270 + 135 = 405 -> 45
        assert!(approx(c.selected_sprite().rotation, 45.0));
    }

    #[test]
    fn test_wasd_moves_selected_sprite() {
        let mut c = controller();
        let start = *c.selected_sprite();

        c.update(0.1, &ScriptedInput::holding(&[Action::MoveSpriteRight, Action::MoveSpriteUp]));
        let s = c.selected_sprite();
        assert!(approx(s.x, start.x + 0.5));
        assert!(approx(s.y, start.y + 0.5));

        c.update(0.2, &ScriptedInput::holding(&[Action::MoveSpriteLeft, Action::MoveSpriteDown]));
        let s = c.selected_sprite();
        assert!(approx(s.x, start.x - 0.5));
        assert!(approx(s.y, start.y - 0.5));
    }

    #[test]
    fn test_arrows_pan_camera() {
        let mut c = controller();
        c.update(0.1, &ScriptedInput::holding(&[Action::PanRight]));
        assert!(approx(c.camera_helper().position().x, 0.5));

        c.update(0.1, &ScriptedInput::holding(&[Action::PanLeft, Action::Accelerate]));
        assert!(approx(c.camera_helper().position().x, -2.0));
    }

    // The up arrow moves the camera toward -y while W moves sprites toward +y.
    // This sign flip is kept on purpose; update both tests together if it is
    // ever changed.
    #[test]
    fn test_up_arrow_pans_camera_toward_negative_y() {
        let mut c = controller();
        c.update(0.1, &ScriptedInput::holding(&[Action::PanUp]));
        assert!(approx(c.camera_helper().position().y, -0.5));
    }

    #[test]
    fn test_down_arrow_pans_camera_toward_positive_y() {
        let mut c = controller();
        c.update(0.1, &ScriptedInput::holding(&[Action::PanDown, Action::Accelerate]));
        assert!(approx(c.camera_helper().position().y, 2.5));
    }

    #[test]
    fn test_backspace_recenters_camera() {
        let mut c = controller();
        c.camera_helper_mut().set_position(vec2(3.0, -1.0));
        c.update(0.1, &ScriptedInput::holding(&[Action::ResetCameraPosition]));
        assert_eq!(c.camera_helper().position(), vec2(0.0, 0.0));
    }

    #[test]
    fn test_zoom_keys() {
        let mut c = controller();
        c.update(0.5, &ScriptedInput::holding(&[Action::ZoomOut]));
        assert!(approx(c.camera_helper().zoom(), 1.5));

        c.update(0.1, &ScriptedInput::holding(&[Action::ZoomIn, Action::Accelerate]));
        assert!(approx(c.camera_helper().zoom(), 1.0));

        c.update(10.0, &ScriptedInput::holding(&[Action::ZoomIn]));
        assert_eq!(c.camera_helper().zoom(), 0.25);

        c.update(0.1, &ScriptedInput::holding(&[Action::ResetZoom]));
        assert_eq!(c.camera_helper().zoom(), 1.0);
    }

    #[test]
    fn test_non_desktop_ignores_held_keys() {
        let mut c = controller();
        let start = *c.selected_sprite();
        let input = ScriptedInput {
            mobile: true,
            down: [Action::MoveSpriteRight, Action::PanRight, Action::ZoomOut]
                .into_iter()
                .collect(),
            ..Default::default()
        };

        c.update(0.5, &input);
        assert_eq!(c.selected_sprite().x, start.x);
        assert_eq!(c.camera_helper().position(), vec2(0.0, 0.0));
        assert_eq!(c.camera_helper().zoom(), 1.0);
        // Spin still runs
        assert!(approx(c.selected_sprite().rotation, 45.0));
    }

    #[test]
    fn test_follow_tracks_moving_sprite() {
        let mut c = controller();
        c.key_up(Action::ToggleFollow);
        c.update(0.2, &ScriptedInput::holding(&[Action::MoveSpriteRight, Action::PanLeft]));
        // Pan is overwritten by tracking
        assert_eq!(c.camera_helper().position(), c.selected_sprite().center());
    }
}
