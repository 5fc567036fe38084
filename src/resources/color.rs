/// An RGB color with components in `[0, 1]`.
///
/// Colors are usually authored as 24-bit hex values (`0xRRGGBB`), which is
/// how palettes and preview colors appear in [`SandboxSettings`](crate::settings::SandboxSettings).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value. The top byte is ignored.
    #[must_use]
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self { r, g, b }
    }

    /// Packs the color back into `0xRRGGBB`, rounding each channel.
    #[must_use]
    pub fn to_hex(self) -> u32 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_channels_are_split_in_rgb_order() {
        let c = Color::from_hex(0xFF8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn palette_values_survive_hex_conversion() {
        for hex in [0x01295F, 0xFFB30F, 0xFD151B, 0x009F00, 0x9F0000] {
            assert_eq!(Color::from_hex(hex).to_hex(), hex);
        }
    }
}
