use glam::Vec3;

// Shared scene tuning constants used by both web and native frontends.

// Orbit animation
pub const ORBIT_RADIUS: f32 = 4.0; // distance of each sphere from the vertical axis
pub const ORBIT_ANGLE_STEP: f64 = 0.01; // radians added per display tick
pub const ORBIT_START_ANGLE: f64 = 0.0;
pub const ORBIT_HEIGHTS: [f32; 2] = [5.0, 5.0]; // fixed y of sphere A and sphere B

// Spheres
pub const SPHERE_RADIUS: f32 = 2.0;
pub const SPHERE_SEGMENTS: u32 = 32; // both width and height segments

// Materials (sRGB hex)
pub const SPHERE_A_COLOR: u32 = 0xff0000;
pub const SPHERE_B_COLOR: u32 = 0x0000ff;
pub const HOVER_COLOR: u32 = 0x800080;

// Ground plane
pub const GROUND_SIZE: [f32; 2] = [21.0, 23.0]; // width (x) and depth (z)
pub const GROUND_Y: f32 = -2.5;
pub const GROUND_COLOR: u32 = 0x00ff00;

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 15.0);
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Spotlight
pub const SPOT_POSITION: Vec3 = Vec3::new(5.0, 10.0, 5.0);
pub const SPOT_TARGET: Vec3 = Vec3::ZERO;
pub const SPOT_COLOR: u32 = 0xffff00;
pub const SPOT_INTENSITY: f32 = 1.0;
pub const SPOT_ANGLE: f32 = std::f32::consts::PI / 6.0;
pub const SPOT_PENUMBRA: f32 = 0.1;
pub const SPOT_DECAY: f32 = 2.0;
pub const SPOT_DISTANCE: f32 = 30.0; // 0 means unbounded

// Shadows
pub const SHADOW_MAP_SIZE: u32 = 2048;
pub const SHADOW_NEAR: f32 = 10.0;
pub const SHADOW_FAR: f32 = 50.0;
pub const SHADOW_BIAS: f32 = 0.0005;

// Ambient light
pub const AMBIENT_COLOR: u32 = 0xffffff;
pub const AMBIENT_INTENSITY: f32 = 1.0;

// Spotlight helper wireframe
pub const SPOT_HELPER_RIM_SEGMENTS: u32 = 32;
