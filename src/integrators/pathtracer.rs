use glam::Vec3;
use log::trace;
use rand::distributions::{Distribution, Uniform};

use crate::{
    color::{self, Color},
    math::{
        distributions::HemisphereAroundNormal,
        vec::{ReflectVecExt, RgbAsVec3Ext, Vec3AsRgbExt},
    },
    ray::{Ray, T_MIN},
    scene::Scene,
    surface::{Interaction, LightId, ThingId},
    Rng,
};

use super::Integrator;

/// Refractive index of the surrounding medium when the path is inside
/// nothing.
const VACUUM_IOR: f32 = 1.0;

/// Reflectance of an optical boundary under the Schlick approximation.
///
/// Matched indices mean there is no boundary at all, so nothing reflects
/// at any angle. Callers are expected to pass a `cos_theta` that keeps
/// `1 - cos_theta` non-negative.
pub fn schlick(n1: f32, n2: f32, cos_theta: f32) -> f32 {
    if n1 == n2 {
        return 0.0;
    }
    let r0 = ((n1 - n2) / (n1 + n2)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cos_theta).powi(5)
}

/// What the latest intersection sweep ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Thing { thing: ThingId, part: usize },
    Light { light: LightId, part: usize },
    Miss,
}

/// The state of one light path, mutated in place from bounce to bounce.
///
/// `filter` is the accumulated multiplicative tint applied to any radiance
/// still to be collected; exact black and a negative `depth` are the two
/// terminal sentinels.
pub struct Path {
    pub position: Vec3,
    pub direction: Vec3,
    pub filter: Vec3,
    pub depth: i32,
    pub hit: Hit,
    /// Things the path is currently inside, innermost last. Entries index
    /// into the scene table, so the stack stays valid for as long as the
    /// scene does.
    pub inside: Vec<ThingId>,
    pub rr_limit: f32,
}

impl Path {
    pub fn new(ray: Ray, max_depth: u32, rr_limit: f32) -> Self {
        Self {
            position: ray.origin,
            direction: ray.direction,
            filter: color::WHITE.vec(),
            depth: max_depth as i32,
            hit: Hit::Miss,
            inside: Vec::new(),
            rr_limit,
        }
    }

    /// Estimate the radiance arriving at the path origin.
    ///
    /// One intersection sweep classifies the hit, then the loop either
    /// terminates (emitter, miss, black filter, spent budget, roulette) or
    /// bounces off the surface and sweeps again. The loop replaces the
    /// textbook recursion so native stack depth does not grow with the
    /// bounce budget; `collected` carries what the recursive formulation
    /// would have summed on the way back up.
    pub fn trace(&mut self, scene: &Scene, rng: &mut Rng) -> Color {
        crate::counter!("Paths traced");
        self.next_intersection(scene);
        let mut collected = Vec3::ZERO;
        loop {
            if self.filter == Vec3::ZERO || self.depth < 0 {
                return collected.rgb();
            }
            match self.hit {
                Hit::Light { light, .. } => {
                    // The path ends on an emitter and collects its radiance
                    // through the accumulated filter.
                    let emission = scene.lights[light.0].emission.vec();
                    return (collected + self.filter * emission).rgb();
                }
                Hit::Miss => {
                    return (collected + self.filter * scene.sky.vec()).rgb();
                }
                Hit::Thing { thing, part } => {
                    let surface = &scene.things[thing.0];
                    self.filter *= surface.color.vec();
                    self.depth -= 1;
                    let normal = surface.parts[part].normal(self.position);
                    trace!(
                        "bounce depth={} {:?} at {:?}",
                        self.depth,
                        surface.label,
                        self.position
                    );
                    match surface.interaction {
                        Interaction::Diffuse => {
                            collected += self.filter
                                * scene.direct_light(self.position, normal, rng).vec();
                            if self.depth < 1 || self.roulette(rng) {
                                return collected.rgb();
                            }
                            self.direction = HemisphereAroundNormal(normal).sample(rng);
                            self.filter *= self.direction.dot(normal);
                        }
                        Interaction::Metallic => {
                            let (n1, n2, _) = self.boundary_indices(scene, thing);
                            self.direction = self.direction.reflect(normal);
                            self.filter *= schlick(n1, n2, self.direction.dot(normal));
                            if self.depth < 1 || self.roulette(rng) {
                                return collected.rgb();
                            }
                        }
                        Interaction::Reflective => {
                            if self.depth < 1 || self.roulette(rng) {
                                return collected.rgb();
                            }
                            self.direction = self.direction.reflect(normal);
                        }
                        Interaction::Refractive => {
                            if self.depth < 1 || self.roulette(rng) {
                                return collected.rgb();
                            }
                            self.refract(scene, thing, normal);
                        }
                    }
                    self.next_intersection(scene);
                }
            }
        }
    }

    /// Advance to the nearest surface along `direction` and classify it.
    ///
    /// Foreground surfaces first; the background sweep only runs when the
    /// foreground one finds nothing. Within a sweep things are ranked
    /// before lights and a light steals the nearest hit only by being
    /// strictly closer, so equal distances keep whichever surface was
    /// recorded first.
    pub fn next_intersection(&mut self, scene: &Scene) {
        self.hit = Hit::Miss;
        let ray = Ray::new_with_range(self.position, self.direction, T_MIN..f32::INFINITY);
        let mut nearest = f32::INFINITY;

        for background in [false, true] {
            for (i, thing) in scene.things.iter().enumerate() {
                if thing.background != background {
                    continue;
                }
                for (j, part) in thing.parts.iter().enumerate() {
                    if let Some(t) = part.intersect(&ray) {
                        if t < nearest {
                            nearest = t;
                            self.hit = Hit::Thing {
                                thing: ThingId(i),
                                part: j,
                            };
                        }
                    }
                }
            }
            for (i, light) in scene.lights.iter().enumerate() {
                if light.background != background {
                    continue;
                }
                for (j, part) in light.parts.iter().enumerate() {
                    if let Some(t) = part.intersect(&ray) {
                        if t < nearest {
                            nearest = t;
                            self.hit = Hit::Light {
                                light: LightId(i),
                                part: j,
                            };
                        }
                    }
                }
            }
            if self.hit != Hit::Miss {
                self.position = ray.at(nearest);
                return;
            }
        }

        // Missed everything: the path now points at infinity.
        self.position = ray.at_unchecked(nearest);
    }

    /// Decide whether to kill the path early.
    ///
    /// Paths whose filter still carries at least `rr_limit` in some channel
    /// always survive. Dimmer paths survive with probability proportional
    /// to their brightest channel and are rescaled so the estimator stays
    /// unbiased.
    fn roulette(&mut self, rng: &mut Rng) -> bool {
        let brightest = self.filter.max_element();
        if self.rr_limit <= brightest {
            return false;
        }
        if brightest <= 0.0 {
            // Nothing left to carry.
            crate::counter!("Roulette kills");
            return true;
        }
        if brightest < Uniform::new(0.0, self.rr_limit).sample(rng) {
            crate::counter!("Roulette kills");
            return true;
        }
        self.filter *= self.rr_limit / brightest;
        false
    }

    /// Refractive indices on either side of the boundary being crossed.
    ///
    /// `n1` belongs to the medium the path travels in: the top of the media
    /// stack, or vacuum. `n2` belongs to the medium behind the surface: the
    /// hit thing when entering, or, when exiting the thing on top of the
    /// stack, whatever medium lies beneath it.
    fn boundary_indices(&self, scene: &Scene, hit: ThingId) -> (f32, f32, bool) {
        let entering = self.inside.last() != Some(&hit);
        let n1 = match self.inside.last() {
            Some(id) => scene.things[id.0].refractive_index,
            None => VACUUM_IOR,
        };
        let n2 = if entering {
            scene.things[hit.0].refractive_index
        } else {
            match self.inside.len().checked_sub(2) {
                Some(below) => scene.things[self.inside[below].0].refractive_index,
                None => VACUUM_IOR,
            }
        };
        (n1, n2, entering)
    }

    /// Snell refraction through the hit boundary, with the media stack
    /// tracking which dielectric the path is inside.
    ///
    /// Total internal reflection turns the boundary into a mirror and
    /// leaves the stack untouched: the path never changes medium.
    fn refract(&mut self, scene: &Scene, hit: ThingId, normal: Vec3) {
        let (n1, n2, entering) = self.boundary_indices(scene, hit);
        let eta = n1 / n2;
        let cos_theta1 = self.direction.dot(normal).abs();
        let sin_theta2_squared = eta * eta * (1.0 - cos_theta1 * cos_theta1);
        if sin_theta2_squared > 1.0 {
            self.direction = self.direction.reflect(normal);
            return;
        }

        let cos_theta2 = f32::sqrt(1.0 - sin_theta2_squared);
        let orientation = if self.direction.dot(normal) < 0.0 {
            1.0
        } else {
            -1.0
        };
        self.direction =
            eta * self.direction + orientation * (eta * cos_theta1 - cos_theta2) * normal;
        if entering {
            self.inside.push(hit);
        } else {
            self.inside.pop();
        }
    }
}

/// The unidirectional path-tracing integrator.
pub struct PathTracer {
    /// Bounce budget for every path.
    pub max_depth: u32,
    /// Roulette threshold; `0.0` disables stochastic termination.
    pub rr_limit: f32,
}

impl Default for PathTracer {
    fn default() -> Self {
        Self {
            max_depth: 12,
            rr_limit: 0.25,
        }
    }
}

impl Integrator for PathTracer {
    fn ray_cast(&self, scene: &Scene, ray: Ray, rng: &mut Rng) -> Color {
        Path::new(ray, self.max_depth, self.rr_limit).trace(scene, rng)
    }
}
