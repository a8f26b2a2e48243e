//! Per-frame state machine driving the orbit animation and hover highlight.
//!
//! The controller is the single owner of the mutable scene state. Front-ends
//! call [`FrameController::tick`] from their display refresh callback and
//! [`FrameController::pointer_moved`] from their pointer-move callback; the
//! two are not synchronized, so a hover test sees the positions of the most
//! recent completed tick.

use crate::camera::Camera;
use crate::color::Color;
use crate::orbit::{orbit_positions, OrbitClock};
use crate::params::{SceneError, SceneParams};
use crate::picking::RayIntersector;
use crate::scene::{ObjectId, TrackedObject};
use glam::{Vec2, Vec3};

/// What a renderer needs to draw one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub camera: &'a Camera,
    pub objects: &'a [TrackedObject],
}

/// Capability to draw a frame.
pub trait Renderer {
    type Error;

    fn submit(&mut self, frame: &FrameView<'_>) -> Result<(), Self::Error>;
}

pub struct FrameController {
    objects: [TrackedObject; 2],
    clock: OrbitClock,
    orbit_radius: f32,
    heights: [f32; 2],
    highlight: Color,
    camera: Camera,
    pointer: Option<Vec2>,
    hovered: Option<ObjectId>,
}

impl FrameController {
    pub fn new(params: &SceneParams, camera: Camera) -> Result<Self, SceneError> {
        params.validate()?;
        let clock = OrbitClock::new(params.start_angle, params.angle_step);
        let [pos_a, pos_b] = orbit_positions(clock.angle(), params.orbit_radius, params.heights);
        let objects = [
            TrackedObject::new(ObjectId::A, pos_a, params.sphere_radius, params.base_colors[0]),
            TrackedObject::new(ObjectId::B, pos_b, params.sphere_radius, params.base_colors[1]),
        ];
        Ok(Self {
            objects,
            clock,
            orbit_radius: params.orbit_radius,
            heights: params.heights,
            highlight: params.highlight,
            camera,
            pointer: None,
            hovered: None,
        })
    }

    /// Advance the clock one step and move both spheres onto their orbits.
    pub fn tick(&mut self) -> [Vec3; 2] {
        let theta = self.clock.advance();
        let positions = orbit_positions(theta, self.orbit_radius, self.heights);
        for (obj, pos) in self.objects.iter_mut().zip(positions) {
            obj.position = pos;
        }
        positions
    }

    /// Record a new pointer position (NDC) and re-run the hover test.
    pub fn pointer_moved<I>(&mut self, ndc: Vec2, intersector: &I) -> Option<ObjectId>
    where
        I: RayIntersector + ?Sized,
    {
        self.pointer = Some(ndc);
        self.hover_test(intersector)
    }

    /// Cast a ray through the last pointer position and highlight the nearest
    /// hit sphere, restoring every other sphere to its base color.
    ///
    /// Does nothing until the pointer has moved at least once.
    pub fn hover_test<I>(&mut self, intersector: &I) -> Option<ObjectId>
    where
        I: RayIntersector + ?Sized,
    {
        let ndc = self.pointer?;
        let ray = self.camera.ray_through_ndc(ndc);
        let hits = intersector.intersect(&ray, &self.objects);

        for obj in &mut self.objects {
            obj.restore_base_color();
        }
        let hovered = hits.first().and_then(|hit| {
            let obj = self.objects.get_mut(hit.index)?;
            obj.set_color(self.highlight);
            Some(obj.id)
        });

        if hovered != self.hovered {
            log::debug!("[hover] {:?} -> {:?}", self.hovered, hovered);
        }
        self.hovered = hovered;
        hovered
    }

    pub fn submit<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), R::Error> {
        renderer.submit(&self.frame_view())
    }

    pub fn frame_view(&self) -> FrameView<'_> {
        FrameView {
            camera: &self.camera,
            objects: &self.objects,
        }
    }

    pub fn objects(&self) -> &[TrackedObject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> &TrackedObject {
        &self.objects[id.index()]
    }

    pub fn hovered(&self) -> Option<ObjectId> {
        self.hovered
    }

    pub fn angle(&self) -> f64 {
        self.clock.angle()
    }

    pub fn ticks(&self) -> u64 {
        self.clock.ticks()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn highlight(&self) -> Color {
        self.highlight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picking::{Hit, Hits, Ray, SphereIntersector};

    fn controller() -> FrameController {
        FrameController::new(&SceneParams::default(), Camera::for_aspect(1.0)).unwrap()
    }

    /// Reports a fixed hit list regardless of the ray.
    struct Scripted(Vec<Hit>);

    impl RayIntersector for Scripted {
        fn intersect(&self, _ray: &Ray, _objects: &[TrackedObject]) -> Hits {
            self.0.iter().copied().collect()
        }
    }

    #[test]
    fn no_hover_test_before_first_pointer_move() {
        let mut c = controller();
        let always_a = Scripted(vec![Hit { index: 0, distance: 1.0 }]);
        assert_eq!(c.hover_test(&always_a), None);
        assert_eq!(c.object(ObjectId::A).color(), c.object(ObjectId::A).base_color());
    }

    #[test]
    fn nearest_hit_wins() {
        let mut c = controller();
        let hits = Scripted(vec![
            Hit { index: 1, distance: 2.0 },
            Hit { index: 0, distance: 3.0 },
        ]);
        assert_eq!(c.pointer_moved(Vec2::ZERO, &hits), Some(ObjectId::B));
        assert_eq!(c.object(ObjectId::B).color(), c.highlight());
        assert_eq!(c.object(ObjectId::A).color(), c.object(ObjectId::A).base_color());
    }

    #[test]
    fn new_places_spheres_on_start_angle() {
        let c = controller();
        assert_eq!(c.object(ObjectId::A).position, Vec3::new(4.0, 5.0, 0.0));
        assert_eq!(c.object(ObjectId::B).position.x, -4.0);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let params = SceneParams {
            orbit_radius: -1.0,
            ..SceneParams::default()
        };
        assert!(FrameController::new(&params, Camera::for_aspect(1.0)).is_err());
    }

    #[test]
    fn real_intersector_misses_at_screen_corner() {
        let mut c = controller();
        assert_eq!(c.pointer_moved(Vec2::new(-1.0, -1.0), &SphereIntersector), None);
        assert_eq!(c.hovered(), None);
    }
}
