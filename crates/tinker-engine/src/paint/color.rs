/// Straight-alpha RGBA color with `f32` components in `[0, 1]`.
///
/// The renderer premultiplies at the shader boundary, so CPU-side code can
/// stay in the straight representation that color literals use.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    /// Opaque color from `f32` components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Opaque color from a packed `0xRRGGBB` literal.
    #[inline]
    pub fn from_rgb_u32(rgb: u32) -> Self {
        Self::from_srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to `[0, 1]`. Intended for user-provided inputs.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_rgb_red() {
        assert_eq!(Color::from_rgb_u32(0xff0000), Color::RED);
    }

    #[test]
    fn packed_rgb_splits_channels() {
        let c = Color::from_rgb_u32(0x102030);
        assert!((c.r - 16.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 32.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 48.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn black_is_zero_rgb_full_alpha() {
        assert_eq!(Color::from_rgb_u32(0x000000), Color::BLACK);
        assert_eq!(Color::BLACK.a, 1.0);
    }

    #[test]
    fn clamped_bounds_channels() {
        let c = Color::rgba(2.0, -1.0, 0.5, 3.0).clamped();
        assert_eq!(c, Color::rgba(1.0, 0.0, 0.5, 1.0));
    }
}
