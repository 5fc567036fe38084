use glam::Vec2;

use crate::resources::color::Color;

// ============================================================================
// Texture references
// ============================================================================

/// A CPU-side description of a procedural texture used by sphere materials.
///
/// Decoding and uploading are the renderer's job; the scene only records
/// which texture a material wants and how it is tiled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextureRef {
    /// Metallic flake noise, used as normal map and clearcoat roughness map.
    Flakes {
        /// Horizontal / vertical repeat count (wrap mode is always repeat).
        repeat: Vec2,
    },
}

impl TextureRef {
    #[must_use]
    pub fn flakes() -> Self {
        Self::Flakes {
            repeat: Vec2::new(10.0, 6.0),
        }
    }
}

// ============================================================================
// Specific Materials
// ============================================================================

// MeshBasicMaterial
// ----------------------------------------------------------------------------
/// Unlit material. Used for placement previews.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBasicMaterial {
    pub color: Color,
    pub opacity: f32,
    pub transparent: bool,
}

impl MeshBasicMaterial {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
            transparent: false,
        }
    }

    /// Makes the material translucent with the given opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self.transparent = self.opacity < 1.0;
        self
    }
}

impl Default for MeshBasicMaterial {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

// MeshPhysicalMaterial
// ----------------------------------------------------------------------------
/// Clear-coated metallic PBR material. Used for committed spheres.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshPhysicalMaterial {
    pub color: Color,
    pub metalness: f32,
    pub roughness: f32,

    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub clearcoat_roughness_map: Option<TextureRef>,

    pub normal_map: Option<TextureRef>,
    pub normal_scale: Vec2,

    pub env_map_intensity: f32,

    pub sheen: f32,
    pub sheen_color: Color,
}

impl MeshPhysicalMaterial {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            metalness: 0.0,
            roughness: 1.0,
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
            clearcoat_roughness_map: None,
            normal_map: None,
            normal_scale: Vec2::ONE,
            env_map_intensity: 1.0,
            sheen: 0.0,
            sheen_color: Color::BLACK,
        }
    }

    /// The flaked, clear-coated metal look every committed sphere shares.
    /// Only the base color varies between spheres.
    #[must_use]
    pub fn flaked_metal(color: Color) -> Self {
        let flakes = TextureRef::flakes();
        Self {
            color,
            metalness: 0.9,
            roughness: 0.5,
            clearcoat: 1.0,
            clearcoat_roughness: 0.2,
            clearcoat_roughness_map: Some(flakes),
            normal_map: Some(flakes),
            normal_scale: Vec2::splat(0.15),
            env_map_intensity: 0.7,
            sheen: 0.2,
            sheen_color: Color::from_hex(0x0000FF),
        }
    }
}

impl Default for MeshPhysicalMaterial {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

// ============================================================================
// Material wrapper
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Basic(MeshBasicMaterial),
    Physical(MeshPhysicalMaterial),
}

impl Material {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Basic(m) => m.color,
            Self::Physical(m) => m.color,
        }
    }

    #[must_use]
    pub fn is_transparent(&self) -> bool {
        match self {
            Self::Basic(m) => m.transparent,
            Self::Physical(_) => false,
        }
    }
}

impl From<MeshBasicMaterial> for Material {
    fn from(m: MeshBasicMaterial) -> Self {
        Self::Basic(m)
    }
}

impl From<MeshPhysicalMaterial> for Material {
    fn from(m: MeshPhysicalMaterial) -> Self {
        Self::Physical(m)
    }
}
