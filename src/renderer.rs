use image::Rgb32FImage;
use rand::distributions::{Distribution, Uniform};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
    camera::{Camera, PixelCoord, ViewportCoord},
    color::Color,
    integrators::Integrator,
    math::vec::{RgbAsVec3Ext, Vec3, Vec3AsRgbExt},
    progress::Progress,
    scene::Scene,
    Seed,
};

pub struct RendererOptions {
    pub samples_per_pixel: u32,
    /// Root seed; together with pixel coordinates and the sample index it
    /// fully determines every random draw of the render.
    pub seed: u64,
}

pub struct Renderer {
    pub camera: Camera,
    pub scene: Scene,
    pub integrator: Box<dyn Integrator>,
    pub options: RendererOptions,
}

impl Renderer {
    /// Average `samples_per_pixel` radiance estimates for one pixel, each
    /// from its own deterministically seeded generator.
    pub fn process_pixel(&self, coords: PixelCoord) -> Color {
        let ViewportCoord { vx, vy } = ViewportCoord::from_pixel_coord(&self.camera, coords);
        let pixel_width = 2. / (self.camera.width as f32 - 1.);
        let pixel_height = 2. / (self.camera.height as f32 - 1.);
        let distribution_x = Uniform::new(-pixel_width / 2., pixel_width / 2.);
        let distribution_y = Uniform::new(-pixel_height / 2., pixel_height / 2.);

        let mut accumulated = Vec3::ZERO;
        for sample in 0..self.options.samples_per_pixel {
            let mut rng = Seed {
                seed: self.options.seed,
                x: coords.x,
                y: coords.y,
                sample,
            }
            .into_rng();
            let dvx = distribution_x.sample(&mut rng);
            let dvy = distribution_y.sample(&mut rng);
            let camera_ray = self.camera.ray(vx + dvx, vy + dvy, &mut rng);
            accumulated += self
                .integrator
                .ray_cast(&self.scene, camera_ray, &mut rng)
                .vec();
        }
        (accumulated / self.options.samples_per_pixel as f32).rgb()
    }

    /// Render the whole image, one rayon task per pixel row.
    pub fn render(&self, progress: &Progress) -> Rgb32FImage {
        let started = std::time::Instant::now();
        let width = self.camera.width;
        let height = self.camera.height;

        let rows: Vec<Vec<Color>> = (0..height)
            .into_par_iter()
            .map(|y| {
                let row = (0..width)
                    .map(|x| self.process_pixel(PixelCoord { x, y }))
                    .collect();
                progress.inc();
                row
            })
            .collect();

        let mut image = Rgb32FImage::new(width, height);
        for (y, row) in rows.into_iter().enumerate() {
            for (x, color) in row.into_iter().enumerate() {
                image.put_pixel(x as u32, y as u32, color);
            }
        }
        progress.set_done();

        log::info!(
            "rendered {}x{} at {} spp in {:.2?}",
            width,
            height,
            self.options.samples_per_pixel,
            started.elapsed()
        );
        #[cfg(feature = "counter")]
        crate::utils::counter::report();

        image
    }
}
