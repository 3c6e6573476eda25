use glam::Quat;
use rand::distributions::Distribution;

use crate::{
    math::{distributions::UnitBall2, vec::Vec3},
    ray::Ray,
    Rng,
};

#[derive(Debug, Clone, Copy)]
pub struct PixelCoord {
    pub x: u32,
    pub y: u32,
}

/// Pixel position mapped into [-1, 1] on both axes, `vy` pointing up.
#[derive(Debug, Clone, Copy)]
pub struct ViewportCoord {
    pub vx: f32,
    pub vy: f32,
}

impl ViewportCoord {
    pub fn from_pixel_coord(camera: &Camera, coords: PixelCoord) -> Self {
        Self {
            vx: 2.0 * coords.x as f32 / (camera.width as f32 - 1.0) - 1.0,
            vy: 1.0 - 2.0 * coords.y as f32 / (camera.height as f32 - 1.0),
        }
    }
}

/// A thin-lens camera. With `aperture` zero it degenerates to a pinhole.
pub struct Camera {
    pub width: u32,
    pub height: u32,
    /// Half extent of the viewport at the focal plane, vertical.
    pub viewport_height: f32,
    /// Half extent of the viewport at the focal plane, horizontal.
    pub viewport_width: f32,
    pub focal_length: f32,
    pub origin: Vec3,
    pub rotation: Quat,
    pub aperture: f32,
}

impl Camera {
    pub fn new(
        width: u32,
        height: u32,
        vfov: f32,
        focal_length: f32,
        origin: Vec3,
        rotation: Quat,
        aperture: f32,
    ) -> Self {
        let h = f32::tan(vfov / 2.);
        let aspect_ratio = width as f32 / height as f32;
        Self {
            width,
            height,
            viewport_height: focal_length * h,
            viewport_width: focal_length * h * aspect_ratio,
            focal_length,
            origin,
            rotation,
            aperture,
        }
    }

    /// Camera looking from `origin` toward `target`, default orientation
    /// otherwise.
    pub fn look_at(
        width: u32,
        height: u32,
        vfov: f32,
        origin: Vec3,
        target: Vec3,
        aperture: f32,
    ) -> Self {
        let direction = target - origin;
        let rotation = Quat::from_rotation_arc(Vec3::NEG_Z, direction.normalize());
        Self::new(
            width,
            height,
            vfov,
            direction.length(),
            origin,
            rotation,
            aperture,
        )
    }

    pub fn ray(&self, vx: f32, vy: f32, rng: &mut Rng) -> Ray {
        let [dx, dy] = UnitBall2.sample(rng);
        let offset = self.aperture / 2.0 * Vec3::new(dx, dy, 0.0);
        let focus = Vec3::new(
            vx * self.viewport_width,
            vy * self.viewport_height,
            -self.focal_length,
        );
        Ray::new(
            self.origin + self.rotation.mul_vec3(offset),
            self.rotation.mul_vec3(focus - offset),
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn center_ray_points_forward() {
        let camera = Camera::new(
            64,
            48,
            f32::to_radians(90.0),
            1.0,
            Vec3::ZERO,
            Quat::IDENTITY,
            0.0,
        );
        let mut rng = crate::Rng::seed_from_u64(0);
        let ray = camera.ray(0.0, 0.0, &mut rng);
        assert!(ray.direction.distance(Vec3::NEG_Z) < 1e-6);
        assert_eq!(ray.origin, Vec3::ZERO);
    }

    #[test]
    fn look_at_turns_the_view() {
        let camera = Camera::look_at(
            64,
            48,
            f32::to_radians(90.0),
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 0.0),
            0.0,
        );
        let mut rng = crate::Rng::seed_from_u64(0);
        let ray = camera.ray(0.0, 0.0, &mut rng);
        assert!(ray.direction.distance(Vec3::X) < 1e-5);
    }

    #[test]
    fn viewport_covers_the_image_corners() {
        let camera = Camera::new(
            64,
            48,
            f32::to_radians(90.0),
            1.0,
            Vec3::ZERO,
            Quat::IDENTITY,
            0.0,
        );
        let top_left = ViewportCoord::from_pixel_coord(&camera, PixelCoord { x: 0, y: 0 });
        assert_eq!((top_left.vx, top_left.vy), (-1.0, 1.0));
        let bottom_right = ViewportCoord::from_pixel_coord(&camera, PixelCoord { x: 63, y: 47 });
        assert_eq!((bottom_right.vx, bottom_right.vy), (1.0, -1.0));
    }
}
