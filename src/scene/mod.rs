//! Scene graph module
//!
//! Holds everything the renderer needs to know about the sphere cluster:
//! - Scene: the renderable container and the [`SceneGraph`] seam
//! - Renderable: a sphere with its material and role (committed / preview)
//! - Camera: look-at camera with cached matrices
//! - Raycast: ray/sphere intersection and the [`Raycaster`] seam

pub mod camera;
pub mod raycast;
pub mod renderable;
pub mod scene;

pub use camera::{Camera, ProjectionType};
pub use raycast::{Ray, Raycaster, SurfaceHit};
pub use renderable::{Renderable, RenderableRole};
pub use scene::{Fog, Scene, SceneGraph};

use slotmap::new_key_type;

new_key_type! {
    /// Handle to a renderable inside a [`Scene`].
    pub struct RenderableKey;
}
