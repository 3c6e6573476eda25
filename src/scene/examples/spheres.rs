use image::Rgb;

use crate::{
    color,
    math::vec::Vec3,
    scene::Scene,
    shape::{Plane, Sphere},
    surface::{Interaction, Light, Thing},
};

/// An open-air arrangement: spheres of every interaction kind on a plane,
/// a bright sun sphere and an enveloping background dome.
pub struct SpheresScene;

impl From<SpheresScene> for Scene {
    fn from(_: SpheresScene) -> Self {
        let mut scene = Scene::new(Rgb([0.6, 0.75, 0.9]));

        scene.insert_thing(Thing {
            label: Some("ground".to_owned()),
            parts: vec![Box::new(Plane {
                origin: Vec3::ZERO,
                normal: Vec3::Y,
            })],
            color: color::gray(0.7),
            interaction: Interaction::Diffuse,
            refractive_index: 1.0,
            background: false,
        });
        scene.insert_thing(Thing {
            label: Some("matte sphere".to_owned()),
            parts: vec![Box::new(Sphere {
                center: Vec3::new(-1.6, 0.5, -0.5),
                radius: 0.5,
            })],
            color: Rgb([0.8, 0.3, 0.3]),
            interaction: Interaction::Diffuse,
            refractive_index: 1.0,
            background: false,
        });
        scene.insert_thing(Thing {
            label: Some("glass sphere".to_owned()),
            parts: vec![Box::new(Sphere {
                center: Vec3::new(0.0, 0.6, 0.0),
                radius: 0.6,
            })],
            color: color::WHITE,
            interaction: Interaction::Refractive,
            refractive_index: 1.52,
            background: false,
        });
        scene.insert_thing(Thing {
            label: Some("metal sphere".to_owned()),
            parts: vec![Box::new(Sphere {
                center: Vec3::new(1.6, 0.5, -0.5),
                radius: 0.5,
            })],
            color: Rgb([0.8, 0.8, 0.6]),
            interaction: Interaction::Metallic,
            refractive_index: 2.5,
            background: false,
        });
        scene.insert_thing(Thing {
            label: Some("mirror sphere".to_owned()),
            parts: vec![Box::new(Sphere {
                center: Vec3::new(0.6, 0.3, 1.2),
                radius: 0.3,
            })],
            color: color::WHITE,
            interaction: Interaction::Reflective,
            refractive_index: 1.0,
            background: false,
        });

        scene.insert_light(Light {
            label: Some("sun".to_owned()),
            parts: vec![Box::new(Sphere {
                center: Vec3::new(6.0, 8.0, 4.0),
                radius: 1.5,
            })],
            emission: color::gray(40.0),
            background: false,
        });
        scene.insert_light(Light {
            label: Some("sky dome".to_owned()),
            parts: vec![Box::new(Sphere {
                center: Vec3::ZERO,
                radius: 200.0,
            })],
            emission: color::gray(0.8),
            background: true,
        });

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_dome_is_the_only_background_surface() {
        let scene: Scene = SpheresScene.into();
        assert!(scene.things.iter().all(|thing| !thing.background));
        let backgrounds: Vec<_> = scene
            .lights
            .iter()
            .filter(|light| light.background)
            .collect();
        assert_eq!(backgrounds.len(), 1);
        assert_eq!(backgrounds[0].label.as_deref(), Some("sky dome"));
    }
}
