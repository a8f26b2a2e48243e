//! Spotlight, ambient light and the spotlight helper wireframe.
//!
//! The attenuation functions here mirror the ones in `scene.wgsl` so the
//! falloff can be checked on the host.

use crate::color::Color;
use crate::constants::*;
use glam::{Mat4, Vec3};

/// Shadow-map settings for a shadow-casting light.
#[derive(Clone, Debug)]
pub struct ShadowParams {
    pub map_size: u32,
    pub near: f32,
    pub far: f32,
    pub bias: f32,
}

impl Default for ShadowParams {
    fn default() -> Self {
        Self {
            map_size: SHADOW_MAP_SIZE,
            near: SHADOW_NEAR,
            far: SHADOW_FAR,
            bias: SHADOW_BIAS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SpotLight {
    pub position: Vec3,
    pub target: Vec3,
    pub color: Color,
    pub intensity: f32,
    /// Half-angle of the cone, radians.
    pub angle: f32,
    /// Fraction of the cone over which the edge fades out, 0..=1.
    pub penumbra: f32,
    pub decay: f32,
    /// Cutoff distance; 0 disables the cutoff.
    pub distance: f32,
    pub shadow: ShadowParams,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            position: SPOT_POSITION,
            target: SPOT_TARGET,
            color: Color::from_hex(SPOT_COLOR),
            intensity: SPOT_INTENSITY,
            angle: SPOT_ANGLE,
            penumbra: SPOT_PENUMBRA,
            decay: SPOT_DECAY,
            distance: SPOT_DISTANCE,
            shadow: ShadowParams::default(),
        }
    }
}

impl SpotLight {
    /// Unit vector from the light toward its target.
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Cosines of the outer cone edge and of the inner, fully lit cone.
    pub fn cone_cosines(&self) -> (f32, f32) {
        let outer = self.angle.cos();
        let inner = (self.angle * (1.0 - self.penumbra.clamp(0.0, 1.0))).cos();
        (outer, inner)
    }

    /// Angular falloff for a world-space point.
    pub fn spot_attenuation(&self, point: Vec3) -> f32 {
        let to_point = (point - self.position).normalize_or_zero();
        let (outer, inner) = self.cone_cosines();
        smoothstep(outer, inner, to_point.dot(self.direction()))
    }

    /// Distance falloff: `(1 - d / distance) ^ decay` inside the cutoff.
    pub fn distance_attenuation(&self, d: f32) -> f32 {
        if self.distance > 0.0 && self.decay > 0.0 {
            (1.0 - d / self.distance).clamp(0.0, 1.0).powf(self.decay)
        } else {
            1.0
        }
    }

    /// Far plane of the shadow camera; a finite light distance wins over the
    /// configured shadow far plane.
    pub fn shadow_far(&self) -> f32 {
        if self.distance > 0.0 {
            self.distance
        } else {
            self.shadow.far
        }
    }

    /// View-projection of the shadow camera looking down the cone.
    pub fn shadow_view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(2.0 * self.angle, 1.0, self.shadow.near, self.shadow_far());
        let up = if self.direction().cross(Vec3::Y).length_squared() < 1e-6 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let view = Mat4::look_at_rh(self.position, self.target, up);
        proj * view
    }

    /// Line segments outlining the cone: the axis, four edge lines and the rim
    /// circle at the cone's length.
    pub fn helper_lines(&self, rim_segments: u32) -> Vec<[Vec3; 2]> {
        let length = if self.distance > 0.0 {
            self.distance
        } else {
            1000.0
        };
        let width = length * self.angle.tan();
        let axis = self.direction();
        let (u, v) = axis.any_orthonormal_pair();
        let center = self.position + axis * length;
        let rim = |phi: f32| center + (u * phi.cos() + v * phi.sin()) * width;

        let segments = rim_segments.max(3);
        let mut lines = Vec::with_capacity(5 + segments as usize);
        lines.push([self.position, center]);
        for k in 0..4 {
            let phi = k as f32 * std::f32::consts::FRAC_PI_2;
            lines.push([self.position, rim(phi)]);
        }
        let step = std::f32::consts::TAU / segments as f32;
        for k in 0..segments {
            lines.push([rim(k as f32 * step), rim((k + 1) as f32 * step)]);
        }
        lines
    }
}

#[derive(Clone, Debug)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: Color::from_hex(AMBIENT_COLOR),
            intensity: AMBIENT_INTENSITY,
        }
    }
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_is_full_on_axis_and_dark_outside_cone() {
        let spot = SpotLight::default();
        assert!((spot.spot_attenuation(spot.target) - 1.0).abs() < 1e-6);
        // Perpendicular to the axis is well outside a 30 degree cone.
        let side = spot.position + spot.direction().any_orthogonal_vector() * 5.0;
        assert_eq!(spot.spot_attenuation(side), 0.0);
    }

    #[test]
    fn distance_falloff_hits_zero_at_cutoff() {
        let spot = SpotLight::default();
        assert_eq!(spot.distance_attenuation(0.0), 1.0);
        assert_eq!(spot.distance_attenuation(spot.distance), 0.0);
        assert_eq!(spot.distance_attenuation(spot.distance * 2.0), 0.0);
        let half = spot.distance_attenuation(spot.distance * 0.5);
        assert!((half - 0.25).abs() < 1e-6);
    }

    #[test]
    fn unbounded_light_does_not_fall_off() {
        let spot = SpotLight {
            distance: 0.0,
            ..SpotLight::default()
        };
        assert_eq!(spot.distance_attenuation(1.0e4), 1.0);
        assert_eq!(spot.shadow_far(), spot.shadow.far);
    }

    #[test]
    fn shadow_camera_sees_target_in_depth_range() {
        let spot = SpotLight::default();
        let clip = spot.shadow_view_proj().project_point3(spot.target);
        assert!(clip.x.abs() < 1e-4 && clip.y.abs() < 1e-4);
        assert!(clip.z > 0.0 && clip.z < 1.0);
    }

    #[test]
    fn helper_has_axis_edges_and_closed_rim() {
        let spot = SpotLight::default();
        let lines = spot.helper_lines(32);
        assert_eq!(lines.len(), 5 + 32);
        assert_eq!(lines[0][0], spot.position);
        let first = lines[5][0];
        let last = lines[lines.len() - 1][1];
        assert!(first.abs_diff_eq(last, 1e-4));
    }
}
