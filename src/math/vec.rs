pub use glam::Vec3;
use image::Rgb;

pub trait RgbAsVec3Ext {
    fn vec(&self) -> Vec3;
}

impl RgbAsVec3Ext for Rgb<f32> {
    fn vec(&self) -> Vec3 {
        Vec3::from_array(self.0)
    }
}

pub trait Vec3AsRgbExt {
    fn rgb(&self) -> Rgb<f32>;
}

impl Vec3AsRgbExt for Vec3 {
    fn rgb(&self) -> Rgb<f32> {
        Rgb(self.to_array())
    }
}

pub trait ReflectVecExt {
    /// Mirror `self` across the plane whose normal is `normal`.
    fn reflect(self, normal: Vec3) -> Vec3;
}

impl ReflectVecExt for Vec3 {
    fn reflect(self, normal: Vec3) -> Vec3 {
        self - 2.0 * self.dot(normal) * normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_vec_roundtrip() {
        let rgb = Rgb([0.1, 0.2, 0.3]);
        assert_eq!(rgb.vec().rgb(), rgb);
    }

    #[test]
    fn reflect_flips_the_normal_component() {
        let down = Vec3::new(1.0, -1.0, 0.0).normalize();
        let reflected = down.reflect(Vec3::Y);
        assert!(reflected.distance(Vec3::new(1.0, 1.0, 0.0).normalize()) < 1e-6);
    }

    #[test]
    fn reflect_keeps_length() {
        let v = Vec3::new(0.3, -0.8, 0.2);
        assert!((v.reflect(Vec3::Y).length() - v.length()).abs() < 1e-6);
    }
}
