//! Whitted Core - Scene description for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Primitive` (`Sphere`, `Cube`, `Triangle`),
//!   `Material`, `Light`
//! - **Scene files**: JSON scene loading
//!
//! # Example
//!
//! ```ignore
//! use whitted_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} primitives, {} lights",
//!     scene.primitive_count(),
//!     scene.light_count());
//! ```

pub mod loader;
pub mod material;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use material::{Color, Light, Material};
pub use scene::{Cube, Primitive, Scene, Sphere, Triangle};
