//! Core resource definitions
//!
//! CPU-side data handed to the renderer, independent of any GPU backend:
//! - Color: RGB colors authored as hex values
//! - Material: material descriptors for committed spheres and previews
//! - Primitives: sphere collision volumes and tessellation options
//! - Input: platform-agnostic pointer state

pub mod color;
pub mod input;
pub mod material;
pub mod primitives;

pub use color::Color;
pub use input::{ButtonState, Input, MouseButton, screen_to_ndc};
pub use material::{Material, MeshBasicMaterial, MeshPhysicalMaterial, TextureRef};
pub use primitives::{SphereOptions, SphereVolume};
