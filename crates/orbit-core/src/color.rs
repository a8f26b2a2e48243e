//! RGB colors authored as sRGB hex values.

use glam::{Vec3, Vec4};

/// An sRGB color with components in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self { r, g, b }
    }

    /// Linear-light components for shading. The surface is sRGB, so the GPU
    /// re-encodes on write.
    pub fn to_linear(self) -> Vec3 {
        Vec3::new(
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        )
    }

    #[inline]
    pub fn to_linear_rgba(self, alpha: f32) -> Vec4 {
        self.to_linear().extend(alpha)
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_channels_are_split_in_order() {
        let c = Color::from_hex(0x800080);
        assert!((c.r - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn linear_keeps_endpoints_and_darkens_midtones() {
        let lin = Color::from_hex(0xff0000).to_linear();
        assert!((lin.x - 1.0).abs() < 1e-6);
        assert_eq!(lin.y, 0.0);
        let mid = Color::new(0.5, 0.5, 0.5).to_linear();
        assert!(mid.x < 0.25 && mid.x > 0.2);
    }
}
