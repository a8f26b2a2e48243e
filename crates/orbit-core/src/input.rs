use glam::Vec2;

/// Map a pointer position in viewport pixels to normalized device
/// coordinates: x grows right, y grows up, both in \[-1, 1\].
///
/// Returns `None` for an empty viewport or non-finite input.
#[inline]
pub fn pointer_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Option<Vec2> {
    if !(width > 0.0 && height > 0.0) || !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Vec2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_center() {
        assert_eq!(pointer_to_ndc(0.0, 0.0, 800.0, 600.0), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(pointer_to_ndc(400.0, 300.0, 800.0, 600.0), Some(Vec2::ZERO));
        assert_eq!(pointer_to_ndc(800.0, 600.0, 800.0, 600.0), Some(Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn rejects_empty_viewport_and_nan() {
        assert_eq!(pointer_to_ndc(1.0, 1.0, 0.0, 600.0), None);
        assert_eq!(pointer_to_ndc(f32::NAN, 1.0, 800.0, 600.0), None);
    }
}
