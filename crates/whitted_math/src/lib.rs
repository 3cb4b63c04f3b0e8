// Re-export glam for convenience
pub use glam::*;

// Whitted math types
mod optics;
mod ray;
pub use optics::{reflect, refract, TOTAL_INTERNAL_REFLECTION};
pub use ray::Ray;
