use image::Rgb;

use crate::{
    color::{self, Color},
    math::vec::Vec3,
    scene::Scene,
    shape::{Plane, Shape, Sphere, Triangle},
    surface::{Interaction, Light, Thing},
};

/// A closed cornell-style box: colored side walls, three spheres covering
/// the specular interactions, and a rectangular ceiling light.
pub struct CornellBoxScene;

impl From<CornellBoxScene> for Scene {
    fn from(_: CornellBoxScene) -> Self {
        let mut scene = Scene::new(color::BLACK);

        let mut wall = |label: &str, plane: Plane, color: Color| {
            scene.insert_thing(Thing {
                label: Some(label.to_owned()),
                parts: vec![Box::new(plane)],
                color,
                interaction: Interaction::Diffuse,
                refractive_index: 1.0,
                background: false,
            });
        };
        let white = color::gray(0.75);
        wall(
            "floor",
            Plane {
                origin: Vec3::ZERO,
                normal: Vec3::Y,
            },
            white,
        );
        wall(
            "ceiling",
            Plane {
                origin: Vec3::new(0.0, 2.0, 0.0),
                normal: Vec3::NEG_Y,
            },
            white,
        );
        wall(
            "left wall",
            Plane {
                origin: Vec3::new(-2.0, 0.0, 0.0),
                normal: Vec3::X,
            },
            Rgb([0.75, 0.25, 0.25]),
        );
        wall(
            "right wall",
            Plane {
                origin: Vec3::new(2.0, 0.0, 0.0),
                normal: Vec3::NEG_X,
            },
            Rgb([0.25, 0.75, 0.25]),
        );
        wall(
            "back wall",
            Plane {
                origin: Vec3::new(0.0, 0.0, -2.0),
                normal: Vec3::Z,
            },
            white,
        );
        wall(
            "front wall",
            Plane {
                origin: Vec3::new(0.0, 0.0, 4.0),
                normal: Vec3::NEG_Z,
            },
            white,
        );

        scene.insert_thing(Thing {
            label: Some("glass sphere".to_owned()),
            parts: vec![Box::new(Sphere {
                center: Vec3::new(-0.7, 0.5, -0.5),
                radius: 0.5,
            })],
            color: color::WHITE,
            interaction: Interaction::Refractive,
            refractive_index: 1.52,
            background: false,
        });
        scene.insert_thing(Thing {
            label: Some("metal sphere".to_owned()),
            parts: vec![Box::new(Sphere {
                center: Vec3::new(0.8, 0.4, -0.8),
                radius: 0.4,
            })],
            color: Rgb([0.9, 0.75, 0.5]),
            interaction: Interaction::Metallic,
            refractive_index: 2.5,
            background: false,
        });
        scene.insert_thing(Thing {
            label: Some("mirror sphere".to_owned()),
            parts: vec![Box::new(Sphere {
                center: Vec3::new(0.1, 0.3, 0.5),
                radius: 0.3,
            })],
            color: color::WHITE,
            interaction: Interaction::Reflective,
            refractive_index: 1.0,
            background: false,
        });

        // Ceiling quad, just below the ceiling plane, facing down.
        let y = 1.999;
        let (p00, p10) = (Vec3::new(-0.5, y, -1.2), Vec3::new(0.5, y, -1.2));
        let (p01, p11) = (Vec3::new(-0.5, y, -0.2), Vec3::new(0.5, y, -0.2));
        let parts: Vec<Box<dyn Shape>> = vec![
            Box::new(Triangle::new(p00, p10, p01)),
            Box::new(Triangle::new(p11, p01, p10)),
        ];
        scene.insert_light(Light {
            label: Some("ceiling light".to_owned()),
            parts,
            emission: color::gray(18.0),
            background: false,
        });

        scene
    }
}
