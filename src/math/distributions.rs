use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

use super::vec::Vec3;

/// Random direction in the hemisphere around `normal`, biased toward it.
///
/// Candidates are drawn with two coordinates in [-1, 1] and the
/// normal-aligned one in [0, 1] until one falls inside the unit ball and is
/// not the zero vector, then rotated into a tangent frame and normalized.
pub struct HemisphereAroundNormal(pub Vec3);

impl Distribution<Vec3> for HemisphereAroundNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let tangential = Uniform::new(-1.0f32, 1.0);
        let radial = Uniform::new(0.0f32, 1.0);
        let (x, y, z) = loop {
            let x = tangential.sample(rng);
            let y = tangential.sample(rng);
            let z = radial.sample(rng);
            if x * x + y * y + z * z <= 1.0 && (x, y, z) != (0.0, 0.0, 0.0) {
                break (x, y, z);
            }
        };

        let normal = self.0;
        let (tangential_x, tangential_y) = if normal == Vec3::Z || normal == Vec3::NEG_Z {
            (Vec3::X, Vec3::Y)
        } else {
            let tangential_x = normal.cross(Vec3::Z).normalize();
            (tangential_x, normal.cross(tangential_x).normalize())
        };
        (tangential_x * x + tangential_y * y + normal * z).normalize()
    }
}

/// Uniform direction on the unit sphere, by the polar method.
pub struct UniformUnitSphere3;

impl Distribution<Vec3> for UniformUnitSphere3 {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let z = Uniform::new_inclusive(-1.0f32, 1.0).sample(rng);
        let phi = std::f32::consts::TAU * Uniform::new(0.0f32, 1.0).sample(rng);
        let r = f32::sqrt(1.0 - z * z);
        let (s, c) = f32::sin_cos(phi);
        Vec3::new(r * c, r * s, z)
    }
}

/// Uniform point in the unit disk, used for aperture sampling.
pub struct UnitBall2;

impl Distribution<[f32; 2]> for UnitBall2 {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f32; 2] {
        let uniform = Uniform::new(0.0f32, 1.0);
        let phi = std::f32::consts::TAU * uniform.sample(rng);
        let r = uniform.sample(rng).sqrt();
        let (s, c) = f32::sin_cos(phi);
        [r * c, r * s]
    }
}
