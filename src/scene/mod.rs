pub mod examples;

use std::f32::consts::PI;

use crate::{
    color::Color,
    math::vec::{RgbAsVec3Ext, Vec3, Vec3AsRgbExt},
    ray::{Ray, T_MIN},
    surface::{Light, LightId, Thing, ThingId},
    Rng,
};

/// The immutable world a render runs against: ordered tables of occluders
/// and emitters, plus the sky color returned when a path escapes everything.
///
/// Iteration order of the tables is part of the traversal contract (it
/// decides equal-distance ties), so the tables only ever grow by insertion.
pub struct Scene {
    pub things: Vec<Thing>,
    pub lights: Vec<Light>,
    pub sky: Color,
}

impl Scene {
    pub fn new(sky: Color) -> Self {
        Self {
            things: Vec::new(),
            lights: Vec::new(),
            sky,
        }
    }

    /// Insert an occluder and return its stable id.
    pub fn insert_thing(&mut self, thing: Thing) -> ThingId {
        self.things.push(thing);
        ThingId(self.things.len() - 1)
    }

    /// Insert an emitter and return its stable id.
    pub fn insert_light(&mut self, light: Light) -> LightId {
        self.lights.push(light);
        LightId(self.lights.len() - 1)
    }

    /// Estimated radiance arriving at `point` directly from visible
    /// emitters, one uniform surface sample per sampleable light part.
    ///
    /// Background lights are handled by the miss path of the tracer, not
    /// by shadow rays, and are skipped here.
    pub fn direct_light(&self, point: Vec3, normal: Vec3, rng: &mut Rng) -> Color {
        let mut total = Vec3::ZERO;
        for light in &self.lights {
            if light.background {
                continue;
            }
            for part in &light.parts {
                let Some(sample) = part.sample_surface(rng) else {
                    crate::warn_once!("skipping a light part that cannot be surface-sampled");
                    continue;
                };
                let to_light = sample.position - point;
                let distance_squared = to_light.length_squared();
                if distance_squared <= T_MIN * T_MIN {
                    continue;
                }
                let distance = distance_squared.sqrt();
                let direction = to_light / distance;
                let cos_surface = normal.dot(direction);
                if cos_surface <= 0.0 {
                    continue;
                }
                let cos_light = sample.normal.dot(-direction);
                if cos_light <= 0.0 {
                    continue;
                }
                if self.occluded(point, direction, distance) {
                    continue;
                }
                total += light.emission.vec()
                    * (cos_surface * cos_light * sample.area / (PI * distance_squared));
            }
        }
        total.rgb()
    }

    /// Whether any foreground thing blocks the segment from `point` along
    /// `direction` up to `distance`.
    fn occluded(&self, point: Vec3, direction: Vec3, distance: f32) -> bool {
        if distance <= 2.0 * T_MIN {
            return false;
        }
        let shadow_ray = Ray::new_with_range(point, direction, T_MIN..distance - T_MIN);
        self.things
            .iter()
            .filter(|thing| !thing.background)
            .flat_map(|thing| thing.parts.iter())
            .any(|part| part.intersect(&shadow_ray).is_some())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use crate::{
        color::{self, Color},
        shape::Sphere,
        surface::Interaction,
    };

    use super::*;

    fn light_overhead(emission: Color) -> Light {
        Light {
            label: Some("overhead".to_owned()),
            parts: vec![Box::new(Sphere {
                center: Vec3::new(0.0, 5.0, 0.0),
                radius: 0.5,
            })],
            emission,
            background: false,
        }
    }

    fn blocker() -> Thing {
        Thing {
            label: Some("blocker".to_owned()),
            parts: vec![Box::new(Sphere {
                center: Vec3::new(0.0, 2.5, 0.0),
                radius: 1.0,
            })],
            color: color::gray(0.5),
            interaction: Interaction::Diffuse,
            refractive_index: 1.0,
            background: false,
        }
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut scene = Scene::new(color::BLACK);
        assert_eq!(scene.insert_light(light_overhead(color::WHITE)), LightId(0));
        assert_eq!(scene.insert_thing(blocker()), ThingId(0));
        assert_eq!(scene.insert_thing(blocker()), ThingId(1));
    }

    #[test]
    fn unoccluded_light_contributes() {
        let mut scene = Scene::new(color::BLACK);
        scene.insert_light(light_overhead(color::gray(10.0)));
        let mut rng = crate::Rng::seed_from_u64(11);
        // A single uniform sample may land on the far side of the light
        // sphere; a handful of estimates is enough to see it.
        let mut total = 0.0;
        for _ in 0..20 {
            let incident = scene.direct_light(Vec3::ZERO, Vec3::Y, &mut rng);
            assert!(incident.0.iter().all(|&channel| channel >= 0.0));
            total += incident.0[0];
        }
        assert!(total > 0.0);
    }

    #[test]
    fn occluder_blocks_the_light() {
        let mut scene = Scene::new(color::BLACK);
        scene.insert_light(light_overhead(color::gray(10.0)));
        scene.insert_thing(blocker());
        let mut rng = crate::Rng::seed_from_u64(11);
        assert_eq!(
            scene.direct_light(Vec3::ZERO, Vec3::Y, &mut rng),
            color::BLACK
        );
    }

    #[test]
    fn surface_facing_away_receives_nothing() {
        let mut scene = Scene::new(color::BLACK);
        scene.insert_light(light_overhead(color::gray(10.0)));
        let mut rng = crate::Rng::seed_from_u64(11);
        assert_eq!(
            scene.direct_light(Vec3::ZERO, Vec3::NEG_Y, &mut rng),
            color::BLACK
        );
    }

    #[test]
    fn background_lights_are_left_to_the_miss_path() {
        let mut scene = Scene::new(color::BLACK);
        let mut sky_dome = light_overhead(color::gray(10.0));
        sky_dome.background = true;
        scene.insert_light(sky_dome);
        let mut rng = crate::Rng::seed_from_u64(11);
        assert_eq!(
            scene.direct_light(Vec3::ZERO, Vec3::Y, &mut rng),
            color::BLACK
        );
    }
}
