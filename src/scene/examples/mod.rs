//! Ready-made scenes, handy for tests and quick renders.

mod cornell;
mod spheres;

pub use cornell::CornellBoxScene;
pub use spheres::SpheresScene;
