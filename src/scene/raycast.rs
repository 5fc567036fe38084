//! Ray casting against sphere renderables.

use glam::{Vec2, Vec3};

use crate::scene::RenderableKey;

/// Hits closer than this along the ray are ignored.
const MIN_HIT_DISTANCE: f32 = 1e-4;

/// A half-line in world space. The direction is always unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray, normalizing `direction`.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    #[inline]
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the first intersection with a sphere.
    ///
    /// Returns the far intersection when the origin is inside the sphere,
    /// and `None` if the sphere is missed or lies behind the origin.
    #[must_use]
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = center - self.origin;
        let h = self.direction.dot(oc);
        let c = oc.length_squared() - radius * radius;

        let discriminant = h * h - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let mut root = h - sqrtd;
        if root <= MIN_HIT_DISTANCE {
            root = h + sqrtd;
            if root <= MIN_HIT_DISTANCE {
                return None;
            }
        }
        Some(root)
    }
}

/// Where a pointer ray meets existing geometry.
///
/// `normal` is not guaranteed to be unit length; consumers normalize it
/// before use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub point: Vec3,
    pub normal: Vec3,
    /// The renderable that was hit.
    pub source: RenderableKey,
}

impl SurfaceHit {
    #[must_use]
    pub fn new(point: Vec3, normal: Vec3, source: RenderableKey) -> Self {
        Self {
            point,
            normal,
            source,
        }
    }
}

/// Turns a screen position into the nearest surface hit.
///
/// Implementations test committed renderables only, never previews.
pub trait Raycaster {
    /// `ndc` is in normalized device coordinates, `[-1, 1]` with +Y up.
    fn cast_ray(&self, ndc: Vec2) -> Option<SurfaceHit>;
}
