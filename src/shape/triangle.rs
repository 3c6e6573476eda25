use rand::distributions::{Distribution, Uniform};

use crate::{math::vec::Vec3, ray::Ray, Rng};

use super::{Shape, SurfaceSample};

/// A single triangle with a flat precomputed normal.
///
/// The normal follows the right-hand rule over `a -> b -> c`.
pub struct Triangle {
    vertices: [Vec3; 3],
    normal: Vec3,
    area: f32,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let cross = (b - a).cross(c - a);
        Self {
            vertices: [a, b, c],
            normal: cross.normalize(),
            area: cross.length() / 2.0,
        }
    }
}

impl Shape for Triangle {
    /// Moller-Trumbore intersection.
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let [a, b, c] = self.vertices;
        let edge1 = b - a;
        let edge2 = c - a;
        let p = ray.direction.cross(edge2);
        let determinant = edge1.dot(p);
        if determinant.abs() < f32::EPSILON {
            return None;
        }

        let inv_determinant = 1.0 / determinant;
        let s = ray.origin - a;
        let u = s.dot(p) * inv_determinant;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }
        let q = s.cross(edge1);
        let v = ray.direction.dot(q) * inv_determinant;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(q) * inv_determinant;
        ray.range().contains(&t).then_some(t)
    }

    fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn sample_surface(&self, rng: &mut Rng) -> Option<SurfaceSample> {
        let uniform = Uniform::new(0.0f32, 1.0);
        let mut u = uniform.sample(rng);
        let mut v = uniform.sample(rng);
        if u + v > 1.0 {
            u = 1.0 - u;
            v = 1.0 - v;
        }
        let [a, b, c] = self.vertices;
        Some(SurfaceSample {
            position: a + u * (b - a) + v * (c - a),
            normal: self.normal,
            area: self.area,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn triangle() -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, 0.0, -2.0),
            Vec3::new(1.0, 0.0, -2.0),
            Vec3::new(0.0, 2.0, -2.0),
        )
    }

    #[test]
    fn hit_through_the_center() {
        let ray = Ray::new(Vec3::new(0.0, 0.5, 0.0), Vec3::NEG_Z);
        assert_eq!(triangle().intersect(&ray), Some(2.0));
    }

    #[test]
    fn miss_outside_the_edges() {
        let ray = Ray::new(Vec3::new(2.0, 0.5, 0.0), Vec3::NEG_Z);
        assert_eq!(triangle().intersect(&ray), None);
    }

    #[test]
    fn parallel_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 0.5, 0.0), Vec3::X);
        assert_eq!(triangle().intersect(&ray), None);
    }

    #[test]
    fn normal_follows_the_winding() {
        assert!(triangle().normal(Vec3::ZERO).distance(Vec3::Z) < 1e-6);
    }

    #[test]
    fn samples_stay_in_the_triangle_plane() {
        let triangle = triangle();
        let mut rng = crate::Rng::seed_from_u64(2);
        for _ in 0..100 {
            let sample = triangle.sample_surface(&mut rng).unwrap();
            assert!((sample.position.z - -2.0).abs() < 1e-6);
            assert!(sample.position.y >= 0.0);
            assert!((sample.area - 2.0).abs() < 1e-6);
        }
    }
}
