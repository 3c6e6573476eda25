pub mod camera;
pub mod color;
pub mod integrators;
pub mod math;
pub mod output;
pub mod progress;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod surface;
pub mod utils;

pub use rand_xoshiro::Xoshiro256StarStar as Rng;

/// Identifies a single sample of a single pixel.
///
/// Hashing the whole struct into the generator seed makes a render
/// deterministic: the output only depends on (seed, x, y, sample).
#[derive(Debug, Copy, Clone, Hash)]
pub struct Seed {
    pub seed: u64,
    pub x: u32,
    pub y: u32,
    pub sample: u32,
}

impl Seed {
    pub fn into_rng(self) -> Rng {
        use std::hash::{DefaultHasher, Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        <Rng as rand::SeedableRng>::seed_from_u64(hasher.finish())
    }
}
