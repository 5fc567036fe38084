#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod app;
pub mod errors;
pub mod placement;
pub mod resources;
pub mod scene;
pub mod settings;

pub use app::{Feedback, PointerEvent, Sandbox};
pub use errors::{AccreteError, Result};
pub use placement::{CollisionIndex, ColorPicker, CommitOutcome, HoverOutcome, PlacementSession};
pub use resources::{Color, SphereVolume};
pub use scene::{Camera, Raycaster, Renderable, RenderableKey, Scene, SceneGraph, SurfaceHit};
pub use settings::{PlacementSettings, SandboxSettings};
