//! Occluders ("things") and emitters ("lights"), each an aggregate of
//! intersectable parts.

use crate::{color::Color, shape::Shape};

/// How a thing's surface behaves when a path lands on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Lambertian reflection.
    Diffuse,
    /// Mirror reflection weighted by Schlick reflectance.
    Metallic,
    /// Ideal mirror.
    Reflective,
    /// Ideal dielectric refraction.
    Refractive,
}

/// An opaque or transmissive surface that can be hit but emits nothing.
pub struct Thing {
    pub label: Option<String>,
    pub parts: Vec<Box<dyn Shape>>,
    pub color: Color,
    pub interaction: Interaction,
    pub refractive_index: f32,
    /// Background surfaces are only consulted when no foreground surface
    /// is hit, e.g. an environment backdrop.
    pub background: bool,
}

/// A surface that emits radiance directly.
pub struct Light {
    pub label: Option<String>,
    pub parts: Vec<Box<dyn Shape>>,
    pub emission: Color,
    pub background: bool,
}

/// Index of a thing in its scene table. Stable for the lifetime of the
/// render, which makes it safe to keep on the nested-media stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThingId(pub usize);

/// Index of a light in its scene table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightId(pub usize);

impl std::fmt::Debug for Thing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thing")
            .field("label", &self.label)
            .field("parts", &self.parts.len())
            .field("interaction", &self.interaction)
            .finish()
    }
}

impl std::fmt::Debug for Light {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Light")
            .field("label", &self.label)
            .field("parts", &self.parts.len())
            .finish()
    }
}
