pub mod camera;
pub mod color;
pub mod constants;
pub mod controller;
pub mod input;
pub mod light;
pub mod mesh;
pub mod orbit;
pub mod params;
pub mod picking;
pub mod scene;

pub use camera::*;
pub use color::*;
pub use constants::*;
pub use controller::*;
pub use input::*;
pub use light::*;
pub use orbit::*;
pub use params::*;
pub use picking::*;
pub use scene::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static SHADOW_WGSL: &str = include_str!("../shaders/shadow.wgsl");
pub static LINES_WGSL: &str = include_str!("../shaders/lines.wgsl");
