//! Scene contents: the two tracked spheres plus the static ground and lights.

use crate::color::Color;
use crate::constants::*;
use crate::light::{AmbientLight, SpotLight};
use crate::params::SceneParams;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectId {
    A,
    B,
}

impl ObjectId {
    pub const ALL: [ObjectId; 2] = [ObjectId::A, ObjectId::B];

    pub fn index(self) -> usize {
        match self {
            ObjectId::A => 0,
            ObjectId::B => 1,
        }
    }
}

/// One of the two animated, hoverable spheres.
#[derive(Clone, Debug)]
pub struct TrackedObject {
    pub id: ObjectId,
    pub position: Vec3,
    pub radius: f32,
    base_color: Color,
    color: Color,
}

impl TrackedObject {
    pub fn new(id: ObjectId, position: Vec3, radius: f32, base_color: Color) -> Self {
        Self {
            id,
            position,
            radius,
            base_color,
            color: base_color,
        }
    }

    pub fn base_color(&self) -> Color {
        self.base_color
    }

    /// Currently displayed color.
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn restore_base_color(&mut self) {
        self.color = self.base_color;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

#[derive(Clone, Debug)]
pub struct GroundPlane {
    pub width: f32,
    pub depth: f32,
    pub y: f32,
    pub color: Color,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self {
            width: GROUND_SIZE[0],
            depth: GROUND_SIZE[1],
            y: GROUND_Y,
            color: Color::from_hex(GROUND_COLOR),
        }
    }
}

/// Everything in the scene that does not change after setup.
#[derive(Clone, Debug)]
pub struct StaticScene {
    pub sphere_radius: f32,
    pub sphere_segments: u32,
    pub ground: GroundPlane,
    pub spot: SpotLight,
    pub ambient: AmbientLight,
    /// Leave the background transparent so the page shows through.
    pub transparent: bool,
}

impl StaticScene {
    pub fn new(params: &SceneParams) -> Self {
        Self {
            sphere_radius: params.sphere_radius,
            sphere_segments: SPHERE_SEGMENTS,
            ground: GroundPlane::default(),
            spot: SpotLight::default(),
            ambient: AmbientLight::default(),
            transparent: true,
        }
    }
}
