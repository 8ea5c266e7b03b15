//! Color representation

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);

    /// Platform "destructive" red used for delete-style actions.
    pub const DESTRUCTIVE_RED: Color = Color::from_rgb_u8(0xFF, 0x3B, 0x30);
    /// Neutral gray used for default-style actions.
    pub const ACTION_GRAY: Color = Color::from_rgb_u8(0xC7, 0xC7, 0xCC);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgb_u8_normalizes_channels() {
        let color = Color::from_rgb_u8(255, 0, 51);
        assert_eq!(color, Color(1.0, 0.0, 0.2, 1.0));
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let faded = Color::WHITE.with_alpha(0.5);
        assert_eq!(faded.a(), 0.5);
        assert_eq!(faded.0, 1.0);
    }
}
