use std::borrow::Cow;

use glam::Vec3;

use crate::resources::{Color, Material, MeshBasicMaterial, MeshPhysicalMaterial, SphereOptions};

/// What a renderable stands for in the placement workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderableRole {
    /// A permanent sphere. Has a matching volume in the collision index and
    /// is a valid ray-cast target.
    Committed,
    /// The transient placement preview. Never ray-cast against and never
    /// registered for collision.
    Preview,
}

/// A sphere the renderer should draw.
///
/// Spheres are the only primitive in the scene, so a renderable is simply a
/// centre, a radius and a material plus the flags the renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Renderable {
    pub name: Cow<'static, str>,
    pub role: RenderableRole,

    pub center: Vec3,
    pub radius: f32,

    pub material: Material,
    pub segments: SphereOptions,

    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub visible: bool,
}

impl Renderable {
    /// An opaque, shadow-casting sphere with the flaked metal material.
    #[must_use]
    pub fn committed(center: Vec3, radius: f32, color: Color) -> Self {
        Self {
            name: Cow::Borrowed("Sphere"),
            role: RenderableRole::Committed,
            center,
            radius,
            material: MeshPhysicalMaterial::flaked_metal(color).into(),
            segments: SphereOptions::COMMITTED,
            cast_shadow: true,
            receive_shadow: true,
            visible: true,
        }
    }

    /// A translucent, unlit, non-shadowing preview sphere.
    #[must_use]
    pub fn preview(center: Vec3, radius: f32, color: Color, opacity: f32) -> Self {
        Self {
            name: Cow::Borrowed("PlacementPreview"),
            role: RenderableRole::Preview,
            center,
            radius,
            material: MeshBasicMaterial::new(color).with_opacity(opacity).into(),
            segments: SphereOptions::PREVIEW,
            cast_shadow: false,
            receive_shadow: false,
            visible: true,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_preview(&self) -> bool {
        self.role == RenderableRole::Preview
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.material.color()
    }
}
