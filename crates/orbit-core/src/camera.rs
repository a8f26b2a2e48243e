//! Camera description shared by picking and rendering.
//!
//! These types avoid referencing platform-specific APIs and are suitable for
//! use on both native and web targets.

use crate::constants::{CAMERA_EYE, CAMERA_FAR, CAMERA_FOVY_DEG, CAMERA_NEAR, CAMERA_TARGET};
use crate::picking::Ray;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The demo camera for a viewport with the given aspect ratio.
    pub fn for_aspect(aspect: f32) -> Self {
        Self {
            eye: CAMERA_EYE,
            target: CAMERA_TARGET,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray from the eye through a point in normalized device
    /// coordinates.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let through = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.5));
        Ray::new(self.eye, (through - self.eye).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_ray_points_at_target() {
        let cam = Camera::for_aspect(16.0 / 9.0);
        let ray = cam.ray_through_ndc(Vec2::ZERO);
        let expected = (cam.target - cam.eye).normalize();
        assert!(ray.dir.abs_diff_eq(expected, 1e-5));
        assert_eq!(ray.origin, cam.eye);
    }

    #[test]
    fn ndc_y_up_tilts_ray_up() {
        let cam = Camera::for_aspect(1.0);
        let up = cam.ray_through_ndc(Vec2::new(0.0, 1.0));
        let right = cam.ray_through_ndc(Vec2::new(1.0, 0.0));
        assert!(up.dir.y > 0.0);
        assert!(right.dir.x > 0.0);
        // Top edge of the frustum sits at half the vertical fov.
        let half_fov = up.dir.y.atan2(-up.dir.z);
        assert!((half_fov - cam.fovy_radians * 0.5).abs() < 1e-4);
    }
}
