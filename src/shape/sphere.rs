use rand::distributions::Distribution;

use crate::{
    math::{distributions::UniformUnitSphere3, vec::Vec3},
    ray::Ray,
    Rng,
};

use super::{Shape, SurfaceSample};

pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let a = ray.direction.length_squared();
        let b_half = (ray.origin - self.center).dot(ray.direction);
        let c = (ray.origin - self.center).length_squared() - self.radius * self.radius;

        let discriminant_quarter = b_half * b_half - a * c;
        if discriminant_quarter < 0.0 {
            return None;
        }

        // The near root first; the far one still counts when the ray starts
        // inside the sphere.
        let near = (-b_half - f32::sqrt(discriminant_quarter)) / a;
        let far = (-b_half + f32::sqrt(discriminant_quarter)) / a;
        let range = ray.range();
        if range.contains(&near) {
            Some(near)
        } else if range.contains(&far) {
            Some(far)
        } else {
            None
        }
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }

    fn sample_surface(&self, rng: &mut Rng) -> Option<SurfaceSample> {
        let direction = UniformUnitSphere3.sample(rng);
        Some(SurfaceSample {
            position: self.center + self.radius * direction,
            normal: direction,
            area: 4.0 * std::f32::consts::PI * self.radius * self.radius,
        })
    }
}
