// Host-side tests for the pure web input helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;
use orbit_core::{Camera, FrameController, ObjectId, SceneParams, SceneError, SphereIntersector};

#[test]
fn viewport_sanitizes_bad_sizes() {
    assert_eq!(Viewport::new(-5.0, f64::NAN), Viewport::default());
    assert_eq!(Viewport::new(1024.4, 767.6).pixel_size(), (1024, 768));
}

#[test]
fn viewport_aspect_rejects_empty() {
    assert!(matches!(
        Viewport::new(0.0, 600.0).aspect(),
        Err(SceneError::EmptyViewport { .. })
    ));
    let aspect = Viewport::new(1600.0, 900.0).aspect().unwrap();
    assert!((aspect - 16.0 / 9.0).abs() < 1e-6);
}

#[test]
fn client_coords_map_to_ndc() {
    let vp = Viewport::new(1000.0, 500.0);
    assert_eq!(client_to_ndc(0.0, 0.0, vp), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(client_to_ndc(500.0, 250.0, vp), Some(Vec2::ZERO));
    assert_eq!(client_to_ndc(1000.0, 500.0, vp), Some(Vec2::new(1.0, -1.0)));
    // Outside the viewport is still a valid (off-screen) ray.
    let off = client_to_ndc(1500.0, -250.0, vp).unwrap();
    assert!((off.x - 2.0).abs() < 1e-6 && (off.y - 2.0).abs() < 1e-6);
}

#[test]
fn empty_viewport_ignores_pointer() {
    assert_eq!(client_to_ndc(10.0, 10.0, Viewport::default()), None);
}

#[test]
fn pointer_over_sphere_a_highlights_it() {
    let vp = Viewport::new(1600.0, 900.0);
    let params = SceneParams::default();
    let camera = Camera::for_aspect(vp.aspect().unwrap());
    let mut c = FrameController::new(&params, camera).unwrap();

    // Project sphere A's center back to client pixels.
    let p = c
        .camera()
        .view_proj()
        .project_point3(c.object(ObjectId::A).position);
    let x = (p.x as f64 + 1.0) * 0.5 * vp.width as f64;
    let y = (1.0 - p.y as f64) * 0.5 * vp.height as f64;

    let ndc = client_to_ndc(x, y, vp).unwrap();
    assert_eq!(c.pointer_moved(ndc, &SphereIntersector), Some(ObjectId::A));
    assert_eq!(c.object(ObjectId::A).color(), params.highlight);
    assert_eq!(c.object(ObjectId::B).color(), params.base_colors[1]);

    // Top-left corner of the window points well away from both spheres.
    let corner = client_to_ndc(0.0, 0.0, vp).unwrap();
    assert_eq!(c.pointer_moved(corner, &SphereIntersector), None);
    assert_eq!(c.object(ObjectId::A).color(), params.base_colors[0]);
}
