use crate::{color::Color, ray::Ray, scene::Scene, Rng};

mod pathtracer;

pub use pathtracer::{schlick, Hit, Path, PathTracer};

pub trait Integrator: Send + Sync {
    /// Estimated radiance arriving at the ray origin from its direction.
    fn ray_cast(&self, scene: &Scene, ray: Ray, rng: &mut Rng) -> Color;
}
