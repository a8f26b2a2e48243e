use glam::{Mat4, Vec3};
use orbit_core::{AmbientLight, Color, SpotLight};

/// Per-frame globals shared by every pass. Layout matches `Globals` in the
/// WGSL sources.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlobalsUniform {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) light_view_proj: [[f32; 4]; 4],
    pub(crate) light_pos: [f32; 4],
    pub(crate) light_dir: [f32; 4],
    pub(crate) light_color: [f32; 4],
    pub(crate) light_cone: [f32; 4],
    pub(crate) ambient: [f32; 4],
}

impl GlobalsUniform {
    pub(crate) fn new(view_proj: Mat4, spot: &SpotLight, ambient: &AmbientLight) -> Self {
        let (cos_outer, cos_inner) = spot.cone_cosines();
        let dir = spot.direction();
        let light_rgb = spot.color.to_linear() * spot.intensity;
        let ambient_rgb = ambient.color.to_linear() * ambient.intensity;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            light_view_proj: spot.shadow_view_proj().to_cols_array_2d(),
            light_pos: spot.position.extend(spot.distance).to_array(),
            light_dir: dir.extend(spot.decay).to_array(),
            light_color: light_rgb.extend(1.0).to_array(),
            light_cone: [
                cos_outer,
                cos_inner,
                spot.shadow.bias,
                1.0 / spot.shadow.map_size.max(1) as f32,
            ],
            ambient: ambient_rgb.extend(1.0).to_array(),
        }
    }
}

/// Per-object model transform and material. Layout matches `Object` in WGSL.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniform {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) flags: [f32; 4],
}

impl ObjectUniform {
    pub(crate) fn new(position: Vec3, color: Color, receives_shadow: bool) -> Self {
        Self {
            model: Mat4::from_translation(position).to_cols_array_2d(),
            color: color.to_linear_rgba(1.0).to_array(),
            flags: [if receives_shadow { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LineVertex {
    pub(crate) position: [f32; 3],
    pub(crate) color: [f32; 3],
}

pub(crate) fn line_vertices(segments: &[[Vec3; 2]], color: Color) -> Vec<LineVertex> {
    let rgb = color.to_linear().to_array();
    segments
        .iter()
        .flat_map(|seg| {
            seg.map(|p| LineVertex {
                position: p.to_array(),
                color: rgb,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_sizes_follow_wgsl_layout() {
        assert_eq!(std::mem::size_of::<GlobalsUniform>(), 208);
        assert_eq!(std::mem::size_of::<ObjectUniform>(), 96);
        assert_eq!(std::mem::size_of::<LineVertex>(), 24);
    }

    #[test]
    fn globals_pack_light_parameters() {
        let spot = SpotLight::default();
        let g = GlobalsUniform::new(Mat4::IDENTITY, &spot, &AmbientLight::default());
        assert_eq!(g.light_pos, [5.0, 10.0, 5.0, 30.0]);
        assert_eq!(g.light_dir[3], 2.0);
        assert!(g.light_cone[0] < g.light_cone[1]);
        assert_eq!(g.light_cone[3], 1.0 / 2048.0);
        assert_eq!(g.ambient, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn object_uniform_translates_and_flags() {
        let u = ObjectUniform::new(Vec3::new(1.0, 2.0, 3.0), Color::from_hex(0x00ff00), true);
        assert_eq!(u.model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(u.color, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(u.flags[0], 1.0);
    }

    #[test]
    fn line_vertices_are_pairs() {
        let lines = SpotLight::default().helper_lines(8);
        let verts = line_vertices(&lines, Color::from_hex(0xffff00));
        assert_eq!(verts.len(), lines.len() * 2);
        assert_eq!(verts[0].color, [1.0, 1.0, 0.0]);
    }
}
