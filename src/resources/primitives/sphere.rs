use glam::Vec3;

use crate::errors::{AccreteError, Result};

/// Tessellation options handed to the renderer along with a sphere renderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SphereOptions {
    pub width_segments: u32,
    pub height_segments: u32,
}

impl SphereOptions {
    /// Tessellation used for committed spheres.
    pub const COMMITTED: Self = Self {
        width_segments: 64,
        height_segments: 64,
    };

    /// Coarser tessellation used for previews.
    pub const PREVIEW: Self = Self {
        width_segments: 30,
        height_segments: 30,
    };
}

/// A sphere used purely for overlap testing.
///
/// Volumes are immutable once created. Committed volumes live in the
/// [`CollisionIndex`](crate::placement::CollisionIndex); candidate volumes
/// are built on the fly during a single placement decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereVolume {
    center: Vec3,
    radius: f32,
}

impl SphereVolume {
    /// Creates a volume without validating it.
    ///
    /// Callers inside the crate only use this with radii derived from an
    /// already validated volume.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Creates a volume, rejecting non-finite centers and radii that are not
    /// strictly positive.
    pub fn new(center: Vec3, radius: f32) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(AccreteError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(AccreteError::InvalidCenter(center));
        }
        Ok(Self { center, radius })
    }

    #[inline]
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Strict overlap test: touching spheres do not intersect.
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: &SphereVolume) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }
}
