use crate::{math::vec::Vec3, ray::Ray};

use super::Shape;

/// An infinite plane. Not surface-sampleable, so it cannot serve as an
/// area light part.
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
}

impl Shape for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denominator = ray.direction.dot(self.normal);
        if denominator.abs() < f32::EPSILON {
            return None;
        }
        let t = (self.origin - ray.origin).dot(self.normal) / denominator;
        ray.range().contains(&t).then_some(t)
    }

    fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane {
            origin: Vec3::ZERO,
            normal: Vec3::Y,
        }
    }

    #[test]
    fn hit_straight_down() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Y);
        assert_eq!(floor().intersect(&ray), Some(2.0));
    }

    #[test]
    fn parallel_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::X);
        assert_eq!(floor().intersect(&ray), None);
    }

    #[test]
    fn plane_behind_the_ray_is_not_hit() {
        let ray = Ray::new_with_range(Vec3::new(0.0, 2.0, 0.0), Vec3::Y, 1e-4..f32::INFINITY);
        assert_eq!(floor().intersect(&ray), None);
    }

    #[test]
    fn not_surface_sampleable() {
        use rand::SeedableRng;
        let mut rng = crate::Rng::seed_from_u64(1);
        assert!(floor().sample_surface(&mut rng).is_none());
    }
}
