use std::ops::{Range, RangeInclusive};

use crate::math::vec::Vec3;

/// Minimum travel distance before a ray may register a hit again.
///
/// Shared by the intersection sweep and the shadow rays so a bounce never
/// re-hits the surface it just left.
pub const T_MIN: f32 = 1e-4;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub bounds: (f32, f32),
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            bounds: (0.0, f32::INFINITY),
        }
    }

    pub fn new_with_range(origin: Vec3, direction: Vec3, range: Range<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            bounds: (range.start, range.end),
        }
    }

    pub fn range(&self) -> RangeInclusive<f32> {
        self.bounds.0..=self.bounds.1
    }

    pub fn at(&self, t: f32) -> Vec3 {
        if !self.range().contains(&t) {
            crate::error_once!("a ray has been accessed out of bounds");
        }

        self.at_unchecked(t)
    }

    pub fn at_unchecked(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}
