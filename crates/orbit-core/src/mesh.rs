/// Procedural mesh generation for the spheres and the ground plane.

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    /// Triangle list, counter-clockwise when seen from outside.
    pub indices: Vec<u32>,
}

/// UV sphere centred on the origin.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let slices = width_segments.max(3);
    let stacks = height_segments.max(2);

    let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
    for stack in 0..=stacks {
        let phi = stack as f32 / stacks as f32 * std::f32::consts::PI;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for slice in 0..=slices {
            let theta = slice as f32 / slices as f32 * std::f32::consts::TAU;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let n = [sin_phi * cos_theta, cos_phi, sin_phi * sin_theta];
            vertices.push(Vertex {
                position: [n[0] * radius, n[1] * radius, n[2] * radius],
                normal: n,
            });
        }
    }

    let ring = slices + 1;
    let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);
    for stack in 0..stacks {
        for slice in 0..slices {
            let i0 = stack * ring + slice;
            let i1 = i0 + 1;
            let i2 = (stack + 1) * ring + slice;
            let i3 = i2 + 1;
            // Pole rows collapse to a point; skip their degenerate halves.
            if stack != 0 {
                indices.extend_from_slice(&[i0, i1, i2]);
            }
            if stack != stacks - 1 {
                indices.extend_from_slice(&[i1, i3, i2]);
            }
        }
    }

    MeshData { vertices, indices }
}

/// Horizontal plane in XZ facing +Y, centred on the origin.
pub fn ground_plane(width: f32, depth: f32) -> MeshData {
    let hw = width * 0.5;
    let hd = depth * 0.5;
    let up = [0.0, 1.0, 0.0];
    let vertices = vec![
        Vertex { position: [-hw, 0.0, -hd], normal: up },
        Vertex { position: [-hw, 0.0, hd], normal: up },
        Vertex { position: [hw, 0.0, hd], normal: up },
        Vertex { position: [hw, 0.0, -hd], normal: up },
    ];
    MeshData {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn sphere_vertices_lie_on_radius_with_unit_normals() {
        let mesh = uv_sphere(2.0, 32, 32);
        assert_eq!(mesh.vertices.len(), 33 * 33);
        for v in &mesh.vertices {
            let p = Vec3::from(v.position);
            let n = Vec3::from(v.normal);
            assert!((p.length() - 2.0).abs() < 1e-4);
            assert!((n.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn sphere_indices_are_in_range_and_outward_facing() {
        let mesh = uv_sphere(1.0, 8, 6);
        assert_eq!(mesh.indices.len() % 3, 0);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(mesh.vertices[i as usize].position));
            let face_n = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(face_n.dot(centroid) > 0.0, "inward triangle {tri:?}");
        }
    }

    #[test]
    fn plane_faces_up() {
        let mesh = ground_plane(21.0, 23.0);
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(mesh.vertices[i as usize].position));
            assert!((b - a).cross(c - a).y > 0.0);
        }
        let max_x = mesh.vertices.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        let max_z = mesh.vertices.iter().map(|v| v.position[2]).fold(f32::MIN, f32::max);
        assert_eq!((max_x, max_z), (10.5, 11.5));
    }
}
