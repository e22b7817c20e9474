#![warn(missing_docs)]
//! Camera and ray primitives used to pick UI elements in world space.

use glam::{Mat4, Quat, Vec2, Vec3};

/// Half-line in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Direction; not required to be unit length.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Move the ray into the space described by `matrix`.
    ///
    /// The direction is not renormalized, so ray parameters stay comparable
    /// with the untransformed ray.
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self {
            origin: matrix.transform_point3(self.origin),
            direction: matrix.transform_vector3(self.direction),
        }
    }
}

/// Tracked pose of a hand controller. The pointing ray runs along local -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerPose {
    /// World position.
    pub position: Vec3,
    /// World orientation.
    pub orientation: Quat,
}

impl ControllerPose {
    /// Create a pose.
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Pointing ray of the controller.
    pub fn ray(&self) -> Ray {
        Ray::new(self.position, self.orientation * Vec3::NEG_Z)
    }
}

/// Convert a pixel offset inside a viewport into normalized device
/// coordinates (`x` right, `y` up, both in `[-1, 1]`).
pub fn ndc_from_pixels(offset: (f32, f32), viewport: (u32, u32)) -> Vec2 {
    let width = viewport.0.max(1) as f32;
    let height = viewport.1.max(1) as f32;
    Vec2::new(
        (offset.0 / width) * 2.0 - 1.0,
        -(offset.1 / height) * 2.0 + 1.0,
    )
}

/// Perspective camera with position, yaw/pitch orientation and projection.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Horizontal rotation in radians (around Y axis).
    pub yaw: f32,
    /// Vertical rotation in radians (around local X axis).
    pub pitch: f32,

    /// Field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            // A metre and a half in front of a UI plane at the origin, looking down -Z.
            position: Vec3::new(0.0, 0.0, 1.5),
            yaw: -std::f32::consts::FRAC_PI_2,
            pitch: 0.0,
            fov: std::f32::consts::FRAC_PI_3, // 60 degrees
            aspect: 16.0 / 9.0,
            near: 0.05,
            far: 100.0,
        }
    }
}

impl Camera {
    /// Create a new camera with the given position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Get the forward direction vector (where camera is looking).
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Get the right direction vector (camera's local X axis).
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Get the up direction vector (camera's local Y axis).
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Point the camera at `target`.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = (target - self.position).normalize_or_zero();
        if dir == Vec3::ZERO {
            return;
        }
        self.pitch = dir.y.clamp(-1.0, 1.0).asin();
        self.yaw = dir.z.atan2(dir.x);
    }

    /// Compute the view matrix (world space -> camera space).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    /// Compute the projection matrix (camera space -> clip space).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Rotate the camera (add to yaw and pitch).
    ///
    /// # Arguments
    /// * `delta_yaw` - Horizontal rotation delta in radians
    /// * `delta_pitch` - Vertical rotation delta in radians
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch += delta_pitch;

        // Clamp pitch to avoid gimbal lock
        const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Update the aspect ratio (call when the viewport resizes).
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// World-space ray through a point given in normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection_matrix().inverse();
        // perspective_rh maps depth to [0, 1]; 1.0 is the far plane.
        let far = inv.project_point3(ndc.extend(1.0));
        Ray::new(self.position, far - self.position)
    }

    /// World-space ray through a pixel of a `viewport`-sized surface.
    pub fn ray_from_pixels(&self, offset: (f32, f32), viewport: (u32, u32)) -> Ray {
        self.ray_from_ndc(ndc_from_pixels(offset, viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::default();
        assert!(approx(camera.forward(), Vec3::NEG_Z));
        assert!(approx(camera.right(), Vec3::X));
        assert!(approx(camera.up(), Vec3::Y));
    }

    #[test]
    fn center_ray_matches_forward() {
        let camera = Camera::default();
        let ray = camera.ray_from_ndc(Vec2::ZERO);
        assert_eq!(ray.origin, camera.position);
        assert!(approx(ray.direction, camera.forward()));
    }

    #[test]
    fn offset_ray_leans_toward_offset() {
        let camera = Camera::default();
        let ray = camera.ray_from_ndc(Vec2::new(0.5, 0.5));
        assert!(ray.direction.x > 0.0);
        assert!(ray.direction.y > 0.0);
        assert!(ray.direction.z < 0.0);
    }

    #[test]
    fn pixel_rays_follow_screen_axes() {
        let camera = Camera::default();
        let centre = camera.ray_from_pixels((400.0, 300.0), (800, 600));
        assert!(approx(centre.direction, camera.forward()));

        // Pixel y grows downward, so the top-right corner leans up and right
        let corner = camera.ray_from_pixels((800.0, 0.0), (800, 600));
        assert!(corner.direction.x > 0.0);
        assert!(corner.direction.y > 0.0);
        let expected = camera.ray_from_ndc(Vec2::new(1.0, 1.0));
        assert!(approx(corner.direction, expected.direction));
    }

    #[test]
    fn pixels_map_to_ndc() {
        assert_eq!(ndc_from_pixels((0.0, 0.0), (800, 600)), Vec2::new(-1.0, 1.0));
        assert_eq!(ndc_from_pixels((400.0, 300.0), (800, 600)), Vec2::ZERO);
        assert_eq!(ndc_from_pixels((800.0, 600.0), (800, 600)), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn look_at_points_forward_at_target() {
        let mut camera = Camera::new(Vec3::new(2.0, 1.0, 3.0));
        camera.look_at(Vec3::ZERO);
        let expected = (Vec3::ZERO - camera.position).normalize();
        assert!(approx(camera.forward(), expected));
    }

    #[test]
    fn controller_points_along_negative_z() {
        let pose = ControllerPose::new(Vec3::new(0.0, 1.0, 0.0), Quat::IDENTITY);
        let ray = pose.ray();
        assert_eq!(ray.origin, Vec3::new(0.0, 1.0, 0.0));
        assert!(approx(ray.direction, Vec3::NEG_Z));

        let turned = ControllerPose::new(
            Vec3::ZERO,
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        );
        assert!(approx(turned.ray().direction, Vec3::NEG_X));
    }

    #[test]
    fn rotation_clamps_pitch() {
        let mut camera = Camera::default();
        camera.rotate(0.0, 10.0);
        assert!(camera.pitch < std::f32::consts::FRAC_PI_2);
        assert!(camera.pitch > -std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn matrices_are_finite() {
        let camera = Camera::default();
        assert!(camera
            .view_projection_matrix()
            .to_cols_array()
            .iter()
            .all(|x| x.is_finite()));
    }

    #[test]
    fn transformed_ray_keeps_parameterization() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let moved = ray.transformed(&Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(moved.origin, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(moved.at(2.0), Vec3::new(1.0, 0.0, -2.0));
    }
}
