//! Yaw/pitch free-fly camera with view/projection derivation.

use glam::{Mat4, Vec2, Vec3};

use orrery_input::InputIntents;

use crate::CameraError;

/// World up axis shared by all basis derivations.
const WORLD_UP: Vec3 = Vec3::Y;

/// Field-of-view clamp range applied by the zoom operations, in degrees.
const FOV_MIN: f32 = 1.0;
const FOV_MAX: f32 = 45.0;

/// Pitch clamp keeping the basis away from gimbal degeneracy, in degrees.
const PITCH_LIMIT: f32 = 89.0;

/// Field-of-view change rate for held zoom keys, in degrees per second.
const KEY_ZOOM_RATE: f32 = 20.0;

/// A held movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Along the camera's front vector.
    Forward,
    /// Against the camera's front vector.
    Back,
    /// Against the camera's right vector.
    Left,
    /// Along the camera's right vector.
    Right,
    /// Along world up.
    Up,
    /// Against world up.
    Down,
}

/// Free-fly camera state.
///
/// Orientation is stored as yaw/pitch in degrees; `front`, `right`, and `up`
/// are recomputed from them whenever either changes and always form a
/// right-handed orthonormal basis. Pitch stays within ±89° and the field of
/// view within [1°, 45°] no matter how much input accumulates.
#[derive(Debug, Clone)]
pub struct FreeFlyCamera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    yaw: f32,
    pitch: f32,
    speed: f32,
    sensitivity: f32,
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    last_cursor: Option<Vec2>,
}

impl Default for FreeFlyCamera {
    fn default() -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            front: Vec3::NEG_Z,
            up: WORLD_UP,
            right: Vec3::X,
            // Yaw of -90° points down -Z with the yaw convention below.
            yaw: -90.0,
            pitch: 0.0,
            speed: 5.0,
            sensitivity: 0.1,
            fov: 45.0,
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
            last_cursor: None,
        };
        camera.update_vectors();
        camera
    }
}

impl FreeFlyCamera {
    /// Creates a camera at the origin looking down -Z.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current world position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Moves the camera to a world position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Unit look direction.
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit camera-up vector.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit camera-right vector.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Yaw in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees, always within ±89°.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Movement speed in scene units per second.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Mouse look sensitivity in degrees per pixel.
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Sets all projection parameters, validating them as a group.
    ///
    /// Requires `0 < fov <= 180` degrees, a positive aspect ratio, and
    /// `0 < near < far`. On error no field is changed.
    pub fn set_projection(
        &mut self,
        fov: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<(), CameraError> {
        if !(fov > 0.0 && fov <= 180.0) {
            return Err(CameraError::InvalidFov(fov));
        }
        if !(aspect > 0.0) {
            return Err(CameraError::InvalidAspect(aspect));
        }
        if !(0.0 < near && near < far) {
            return Err(CameraError::InvalidPlanes { near, far });
        }
        self.fov = fov;
        self.aspect = aspect;
        self.near = near;
        self.far = far;
        Ok(())
    }

    /// Updates the aspect ratio after a viewport resize.
    pub fn set_aspect_ratio(&mut self, aspect: f32) -> Result<(), CameraError> {
        if !(aspect > 0.0) {
            return Err(CameraError::InvalidAspect(aspect));
        }
        self.aspect = aspect;
        Ok(())
    }

    /// Right-handed view matrix from `position`, `position + front`, `up`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Right-handed perspective projection over the validated parameters.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    /// Displaces the camera along one movement axis for `dt` seconds.
    ///
    /// Up/down use world up, not the camera-local up, so vertical travel
    /// stays vertical regardless of pitch. `dt` must be non-negative.
    pub fn apply_move(&mut self, direction: MoveDirection, dt: f32) {
        debug_assert!(dt >= 0.0, "movement delta must be non-negative");
        let velocity = self.speed * dt;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Back => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
            MoveDirection::Up => self.position += WORLD_UP * velocity,
            MoveDirection::Down => self.position -= WORLD_UP * velocity,
        }
    }

    /// Feeds an absolute cursor sample (pixels) into the look direction.
    ///
    /// The very first sample only latches the reference position, producing
    /// zero rotation; otherwise the jump from an uninitialized reference
    /// would spin the camera. Screen-down motion pitches the view up, and
    /// pitch is clamped to ±89° before the basis is rebuilt.
    pub fn track_cursor(&mut self, x: f32, y: f32) {
        let cursor = Vec2::new(x, y);
        let Some(last) = self.last_cursor.replace(cursor) else {
            return;
        };
        let offset = cursor - last;

        self.yaw += offset.x * self.sensitivity;
        self.pitch = (self.pitch - offset.y * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Narrows the field of view by `delta` degrees (scroll zoom), clamped
    /// to [1°, 45°].
    pub fn zoom(&mut self, delta: f32) {
        self.fov = (self.fov - delta).clamp(FOV_MIN, FOV_MAX);
    }

    /// Held-key zoom at a fixed rate, through the same clamp as [`zoom`](Self::zoom).
    pub fn keyboard_zoom(&mut self, zoom_in: bool, dt: f32) {
        debug_assert!(dt >= 0.0, "zoom delta must be non-negative");
        let delta = KEY_ZOOM_RATE * dt;
        self.zoom(if zoom_in { delta } else { -delta });
    }

    /// Applies one frame's input snapshot: held movement, zoom keys, the
    /// cursor sample, and the scroll delta.
    pub fn apply_intents(&mut self, intents: &InputIntents, dt: f32) {
        if intents.forward {
            self.apply_move(MoveDirection::Forward, dt);
        }
        if intents.back {
            self.apply_move(MoveDirection::Back, dt);
        }
        if intents.left {
            self.apply_move(MoveDirection::Left, dt);
        }
        if intents.right {
            self.apply_move(MoveDirection::Right, dt);
        }
        if intents.ascend {
            self.apply_move(MoveDirection::Up, dt);
        }
        if intents.descend {
            self.apply_move(MoveDirection::Down, dt);
        }
        if intents.zoom_in {
            self.keyboard_zoom(true, dt);
        }
        if intents.zoom_out {
            self.keyboard_zoom(false, dt);
        }
        if let Some(cursor) = intents.cursor {
            self.track_cursor(cursor.x, cursor.y);
        }
        if intents.scroll != 0.0 {
            self.zoom(intents.scroll);
        }
    }

    /// Rebuilds `front`/`right`/`up` from the current yaw and pitch.
    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_looks_down_negative_z() {
        let camera = FreeFlyCamera::new();
        assert!(camera.front().distance(Vec3::NEG_Z) < 1e-6);
        assert!(camera.right().distance(Vec3::X) < 1e-6);
        assert!(camera.up().distance(Vec3::Y) < 1e-6);
    }

    #[test]
    fn test_basis_stays_orthonormal() {
        let mut camera = FreeFlyCamera::new();
        camera.track_cursor(0.0, 0.0);
        for (x, y) in [(35.0, -120.0), (-400.0, 80.0), (1234.0, 5678.0)] {
            camera.track_cursor(x, y);
            let (f, r, u) = (camera.front(), camera.right(), camera.up());
            assert!((f.length() - 1.0).abs() < 1e-5);
            assert!((r.length() - 1.0).abs() < 1e-5);
            assert!((u.length() - 1.0).abs() < 1e-5);
            assert!(f.dot(r).abs() < 1e-5);
            assert!(f.dot(u).abs() < 1e-5);
            assert!(r.dot(u).abs() < 1e-5);
            // Right-handed set: right x up = -front.
            assert!(r.cross(u).distance(-f) < 1e-4);
        }
    }

    #[test]
    fn test_first_cursor_sample_is_a_latch() {
        let mut camera = FreeFlyCamera::new();
        let yaw = camera.yaw();
        camera.track_cursor(500.0, 500.0);
        assert_eq!(camera.yaw(), yaw);

        camera.track_cursor(510.0, 500.0);
        assert!((camera.yaw() - (yaw + 10.0 * 0.1)).abs() < 1e-5);
    }

    #[test]
    fn test_pitch_clamped_against_gimbal_flip() {
        let mut camera = FreeFlyCamera::new();
        camera.track_cursor(0.0, 0.0);
        camera.track_cursor(0.0, -100_000.0);
        assert_eq!(camera.pitch(), 89.0);
        camera.track_cursor(0.0, 100_000.0);
        assert_eq!(camera.pitch(), -89.0);
    }

    #[test]
    fn test_vertical_axis_inverted() {
        let mut camera = FreeFlyCamera::new();
        camera.track_cursor(100.0, 100.0);
        // Cursor moving up the screen (smaller y) pitches the view up.
        camera.track_cursor(100.0, 50.0);
        assert!(camera.pitch() > 0.0);
        assert!((camera.pitch() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_zoom_never_leaves_clamp_range() {
        let mut camera = FreeFlyCamera::new();
        camera.zoom(10_000.0);
        assert_eq!(camera.fov(), 1.0);
        camera.zoom(-10_000.0);
        assert_eq!(camera.fov(), 45.0);

        for _ in 0..10_000 {
            camera.keyboard_zoom(true, 0.016);
        }
        assert_eq!(camera.fov(), 1.0);
        for _ in 0..10_000 {
            camera.keyboard_zoom(false, 0.016);
        }
        assert_eq!(camera.fov(), 45.0);
    }

    #[test]
    fn test_movement_follows_basis() {
        let mut camera = FreeFlyCamera::new();
        camera.apply_move(MoveDirection::Forward, 1.0);
        assert!(camera.position().distance(Vec3::new(0.0, 0.0, -5.0)) < 1e-5);

        camera.set_position(Vec3::ZERO);
        camera.apply_move(MoveDirection::Right, 0.5);
        assert!(camera.position().distance(Vec3::new(2.5, 0.0, 0.0)) < 1e-5);

        // Vertical travel uses world up even when pitched.
        camera.set_position(Vec3::ZERO);
        camera.track_cursor(0.0, 0.0);
        camera.track_cursor(0.0, -300.0);
        camera.apply_move(MoveDirection::Up, 1.0);
        assert!(camera.position().distance(Vec3::new(0.0, 5.0, 0.0)) < 1e-5);
    }

    #[test]
    fn test_projection_parameters_validated() {
        let mut camera = FreeFlyCamera::new();
        assert_eq!(
            camera.set_projection(45.0, 1.0, 0.0, 100.0),
            Err(CameraError::InvalidPlanes {
                near: 0.0,
                far: 100.0
            })
        );
        assert_eq!(
            camera.set_projection(45.0, 1.0, 10.0, 1.0),
            Err(CameraError::InvalidPlanes {
                near: 10.0,
                far: 1.0
            })
        );
        assert_eq!(
            camera.set_projection(0.0, 1.0, 0.1, 100.0),
            Err(CameraError::InvalidFov(0.0))
        );
        assert_eq!(
            camera.set_projection(200.0, 1.0, 0.1, 100.0),
            Err(CameraError::InvalidFov(200.0))
        );
        assert_eq!(
            camera.set_aspect_ratio(0.0),
            Err(CameraError::InvalidAspect(0.0))
        );
        assert!(camera.set_projection(45.0, 16.0 / 9.0, 0.1, 100.0).is_ok());
    }

    #[test]
    fn test_view_matrix_is_inverse_of_pose() {
        let mut camera = FreeFlyCamera::new();
        camera.set_position(Vec3::new(0.0, 0.0, 30.0));
        let view = camera.view_matrix();
        // The camera's own position maps to the view-space origin.
        let origin = view * camera.position().extend(1.0);
        assert!(origin.truncate().length() < 1e-4);
        // A point straight ahead lands on the view-space -Z axis.
        let ahead = view * (camera.position() + camera.front() * 10.0).extend(1.0);
        assert!(ahead.truncate().distance(Vec3::new(0.0, 0.0, -10.0)) < 1e-4);
    }

    #[test]
    fn test_apply_intents_covers_the_snapshot() {
        use orrery_input::InputIntents;

        let mut camera = FreeFlyCamera::new();
        let mut intents = InputIntents {
            forward: true,
            zoom_in: true,
            ..Default::default()
        };
        intents.sample_cursor(500.0, 500.0);
        intents.add_scroll(2.0);

        camera.apply_intents(&intents, 0.1);
        assert!(camera.position().z < 0.0);
        assert!(camera.fov() < 45.0);
        // The cursor latch consumed the first sample.
        let yaw = camera.yaw();
        intents.clear_transients();
        intents.sample_cursor(520.0, 500.0);
        camera.apply_intents(&intents, 0.1);
        assert!(camera.yaw() > yaw);
    }
}
