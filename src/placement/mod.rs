//! Sphere placement and collision feedback
//!
//! - [`CollisionIndex`]: append-only set of committed sphere volumes
//! - [`ColorPicker`]: uniform choice over the three-color palette
//! - [`PlacementSession`]: turns surface hits into previews and commits

pub mod collision;
pub mod palette;
pub mod session;

pub use collision::CollisionIndex;
pub use palette::ColorPicker;
pub use session::{CommitOutcome, HoverOutcome, PlacementCandidate, PlacementSession, RejectReason};
