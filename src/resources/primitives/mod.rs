pub mod sphere;

pub use sphere::{SphereOptions, SphereVolume};
