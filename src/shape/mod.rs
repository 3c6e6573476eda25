//! The intersectable parts that things and lights are made of.

mod plane;
mod sphere;
mod triangle;

pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::Triangle;

use crate::{math::vec::Vec3, ray::Ray, Rng};

/// A uniformly drawn point on a shape's surface.
pub struct SurfaceSample {
    pub position: Vec3,
    pub normal: Vec3,
    pub area: f32,
}

pub trait Shape: Send + Sync {
    /// Distance along `ray` to the nearest intersection within the ray
    /// bounds, or `None`. A returned distance is strictly positive.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Unit outward normal at `point`, which is assumed to lie on the shape.
    fn normal(&self, point: Vec3) -> Vec3;

    /// Uniform surface sample for area-light estimation.
    ///
    /// Unbounded shapes have no meaningful surface measure and return `None`.
    fn sample_surface(&self, _rng: &mut Rng) -> Option<SurfaceSample> {
        None
    }
}
