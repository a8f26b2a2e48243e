//! Ray casting against the tracked spheres.

use crate::scene::TrackedObject;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }
}

/// One intersection: index into the candidate slice and the ray parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub distance: f32,
}

pub type Hits = SmallVec<[Hit; 2]>;

/// Capability to intersect a ray with the tracked objects.
///
/// Implementations return every hit in front of the ray origin, ordered by
/// ascending distance. The order of equal distances is up to the
/// implementation.
pub trait RayIntersector {
    fn intersect(&self, ray: &Ray, objects: &[TrackedObject]) -> Hits;
}

/// Analytic ray/sphere test using each object's position and radius.
#[derive(Clone, Copy, Debug, Default)]
pub struct SphereIntersector;

impl RayIntersector for SphereIntersector {
    fn intersect(&self, ray: &Ray, objects: &[TrackedObject]) -> Hits {
        let mut hits: Hits = objects
            .iter()
            .enumerate()
            .filter_map(|(index, obj)| {
                ray_sphere(ray.origin, ray.dir, obj.position, obj.radius)
                    .map(|distance| Hit { index, distance })
            })
            .collect();
        // Stable: equal distances keep candidate order.
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

/// Nearest non-negative ray parameter where the ray meets the sphere.
///
/// `ray_dir` must be normalized. A ray starting inside the sphere reports the
/// exit point.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_near = -b - sq;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(t_far)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::scene::ObjectId;

    fn sphere(id: ObjectId, center: Vec3) -> TrackedObject {
        TrackedObject::new(id, center, 2.0, Color::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn ray_sphere_hits_front_face() {
        let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
        assert_eq!(t, Some(3.0));
    }

    #[test]
    fn ray_sphere_misses_sideways() {
        assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
    }

    #[test]
    fn ray_sphere_ignores_spheres_behind_origin() {
        assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
    }

    #[test]
    fn ray_sphere_from_inside_reports_exit() {
        let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::X, Vec3::new(0.0, 0.0, 5.0), 3.0);
        assert_eq!(t, Some(3.0));
    }

    #[test]
    fn ray_sphere_tangent_counts_as_hit() {
        let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(2.0, 0.0, 5.0), 2.0);
        assert_eq!(t, Some(5.0));
    }

    #[test]
    fn hits_come_back_nearest_first() {
        // Farther sphere listed first.
        let objects = [
            sphere(ObjectId::A, Vec3::new(0.0, 0.0, 20.0)),
            sphere(ObjectId::B, Vec3::new(0.0, 0.0, 8.0)),
        ];
        let hits = SphereIntersector.intersect(&Ray::new(Vec3::ZERO, Vec3::Z), &objects);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].index, 1);
        assert_eq!(hits[0].distance, 6.0);
        assert_eq!(hits[1].index, 0);
        assert_eq!(hits[1].distance, 18.0);
    }

    #[test]
    fn equal_distances_keep_lower_index_first() {
        let objects = [
            sphere(ObjectId::A, Vec3::new(0.5, 0.0, 8.0)),
            sphere(ObjectId::B, Vec3::new(-0.5, 0.0, 8.0)),
        ];
        let hits = SphereIntersector.intersect(&Ray::new(Vec3::ZERO, Vec3::Z), &objects);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].distance, hits[1].distance);
        assert_eq!(hits[0].index, 0);

        // Same geometry, candidates swapped: still the first slot wins.
        let swapped = [objects[1].clone(), objects[0].clone()];
        let hits = SphereIntersector.intersect(&Ray::new(Vec3::ZERO, Vec3::Z), &swapped);
        assert_eq!(hits[0].index, 0);
    }

    #[test]
    fn miss_returns_no_hits() {
        let objects = [
            sphere(ObjectId::A, Vec3::new(10.0, 0.0, 8.0)),
            sphere(ObjectId::B, Vec3::new(-10.0, 0.0, 8.0)),
        ];
        let hits = SphereIntersector.intersect(&Ray::new(Vec3::ZERO, Vec3::Z), &objects);
        assert!(hits.is_empty());
    }
}
