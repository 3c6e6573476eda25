use image::Rgb;

use crate::math::vec::{RgbAsVec3Ext, Vec3, Vec3AsRgbExt};

pub type Color = Rgb<f32>;

pub const WHITE: Color = Rgb([1.0, 1.0, 1.0]);
pub const BLACK: Color = Rgb([0.0, 0.0, 0.0]);
pub const RED: Color = Rgb([1.0, 0.0, 0.0]);
pub const GREEN: Color = Rgb([0.0, 1.0, 0.0]);
pub const BLUE: Color = Rgb([0.0, 0.0, 1.0]);

pub fn gray(c: f32) -> Color {
    Rgb([c, c, c])
}

pub fn clamp(color: Color) -> Color {
    color.vec().clamp(Vec3::ZERO, Vec3::ONE).rgb()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds_channels() {
        let c = clamp(Rgb([1.5, -0.25, 0.5]));
        assert_eq!(c, Rgb([1.0, 0.0, 0.5]));
    }

    #[test]
    fn gray_is_uniform() {
        assert_eq!(gray(0.25), Rgb([0.25, 0.25, 0.25]));
    }
}
