//! Constant surface colors
//!
//! Every vertex of a generated mesh carries the same RGB triple, taken from
//! the surface descriptor. Components are linear floats in `[0, 1]`.

use serde::{Deserialize, Serialize};

/// RGB color copied into each vertex record
///
/// Serialized as a bare `[r, g, b]` array so scene files can write
/// `color = [0.0, 0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0);
    pub const ORANGE: Self = Self::new(1.0, 0.5, 0.0);
    pub const PURPLE: Self = Self::new(0.5, 0.0, 0.5);
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0);
    pub const SOFTBLUE: Self = Self::new(0.6, 0.8, 1.0);
    pub const SOFTRED: Self = Self::new(1.0, 0.6, 0.6);
    pub const SOFTGREEN: Self = Self::new(0.6, 1.0, 0.6);

    /// Create a color from RGB components
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Gray with all three channels set to `level`
    pub const fn gray(level: f32) -> Self {
        Self::new(level, level, level)
    }

    /// Components as `[r, g, b]`
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 3]> for Color {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [f32; 3] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_sets_all_channels() {
        let gray = Color::gray(0.7);
        assert_eq!(gray.to_array(), [0.7, 0.7, 0.7]);
    }

    #[test]
    fn test_array_conversion() {
        let color: Color = [0.1, 0.2, 0.3].into();
        assert_eq!(color, Color::new(0.1, 0.2, 0.3));

        let array: [f32; 3] = Color::BLUE.into();
        assert_eq!(array, [0.0, 0.0, 1.0]);
    }
}
