//! Tunable scene parameters and their validation.

use crate::color::Color;
use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("orbit radius must be positive and finite, got {0}")]
    InvalidOrbitRadius(f32),
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidSphereRadius(f32),
    #[error("angle step must be finite, got {0}")]
    InvalidAngleStep(f64),
    #[error("start angle must be finite, got {0}")]
    InvalidStartAngle(f64),
    #[error("orbit heights must be finite, got {0:?}")]
    InvalidHeights([f32; 2]),
    #[error("viewport must be non-empty, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
}

/// Orbit and material values for the two tracked spheres.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub orbit_radius: f32,
    pub angle_step: f64,
    pub start_angle: f64,
    pub heights: [f32; 2],
    pub sphere_radius: f32,
    pub base_colors: [Color; 2],
    pub highlight: Color,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            orbit_radius: ORBIT_RADIUS,
            angle_step: ORBIT_ANGLE_STEP,
            start_angle: ORBIT_START_ANGLE,
            heights: ORBIT_HEIGHTS,
            sphere_radius: SPHERE_RADIUS,
            base_colors: [
                Color::from_hex(SPHERE_A_COLOR),
                Color::from_hex(SPHERE_B_COLOR),
            ],
            highlight: Color::from_hex(HOVER_COLOR),
        }
    }
}

impl SceneParams {
    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.orbit_radius.is_finite() && self.orbit_radius > 0.0) {
            return Err(SceneError::InvalidOrbitRadius(self.orbit_radius));
        }
        if !(self.sphere_radius.is_finite() && self.sphere_radius > 0.0) {
            return Err(SceneError::InvalidSphereRadius(self.sphere_radius));
        }
        if !self.angle_step.is_finite() {
            return Err(SceneError::InvalidAngleStep(self.angle_step));
        }
        if !self.start_angle.is_finite() {
            return Err(SceneError::InvalidStartAngle(self.start_angle));
        }
        if !self.heights.iter().all(|h| h.is_finite()) {
            return Err(SceneError::InvalidHeights(self.heights));
        }
        Ok(())
    }
}

/// Aspect ratio for a viewport, rejecting empty sizes.
pub fn viewport_aspect(width: u32, height: u32) -> Result<f32, SceneError> {
    if width == 0 || height == 0 {
        return Err(SceneError::EmptyViewport { width, height });
    }
    Ok(width as f32 / height as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(SceneParams::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_radii_and_steps() {
        let mut p = SceneParams::default();
        p.orbit_radius = 0.0;
        assert_eq!(p.validate(), Err(SceneError::InvalidOrbitRadius(0.0)));

        let mut p = SceneParams::default();
        p.sphere_radius = -1.0;
        assert_eq!(p.validate(), Err(SceneError::InvalidSphereRadius(-1.0)));

        let mut p = SceneParams::default();
        p.angle_step = f64::NAN;
        assert!(matches!(p.validate(), Err(SceneError::InvalidAngleStep(_))));

        let mut p = SceneParams::default();
        p.heights = [5.0, f32::INFINITY];
        assert!(matches!(p.validate(), Err(SceneError::InvalidHeights(_))));
    }

    #[test]
    fn viewport_aspect_rejects_empty() {
        assert_eq!(
            viewport_aspect(0, 600),
            Err(SceneError::EmptyViewport {
                width: 0,
                height: 600
            })
        );
        assert!((viewport_aspect(800, 400).unwrap() - 2.0).abs() < 1e-6);
    }
}
