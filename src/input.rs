use glam::Vec2;
use orbit_core::{pointer_to_ndc, viewport_aspect, SceneError};

/// Window inner size in CSS pixels, captured once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        let clean = |v: f64| if v.is_finite() { v.max(0.0) as f32 } else { 0.0 };
        Self {
            width: clean(width),
            height: clean(height),
        }
    }

    /// Backing store size for a canvas covering this viewport.
    #[inline]
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width.round() as u32, self.height.round() as u32)
    }

    #[inline]
    pub fn aspect(&self) -> Result<f32, SceneError> {
        let (w, h) = self.pixel_size();
        viewport_aspect(w, h)
    }
}

/// Pointer client coordinates (relative to the window) to NDC.
#[inline]
pub fn client_to_ndc(client_x: f64, client_y: f64, viewport: Viewport) -> Option<Vec2> {
    pointer_to_ndc(
        client_x as f32,
        client_y as f32,
        viewport.width,
        viewport.height,
    )
}
