//! Whitted Renderer - CPU recursive ray tracing
//!
//! A deterministic Whitted-style ray tracer: hard shadows, mirror
//! reflection and refraction on spheres, boxes and triangles above an
//! infinite checkerboard floor.
//!
//! Frames are rendered in row bands on a rayon pool and written as binary
//! PPM or PNG.

mod bucket;
mod camera;
mod cube;
mod error;
mod hittable;
mod intersect;
mod output;
mod renderer;
mod sampler;
mod shading;
mod sphere;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, Bucket};
pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable};
pub use intersect::{checker_color, scene_intersect, FLOOR_HEIGHT, HORIZON};
pub use output::{encode_ppm, save_image, OutputFormat};
pub use renderer::{color_to_rgb, render, render_to_file, tone_map, ImageBuffer, RenderConfig, DEFAULT_FOV};
pub use sampler::{antialias, render_pixel, SAMPLE_OFFSETS};
pub use shading::{cast_ray, direct_lighting, BACKGROUND, MAX_DEPTH};

/// Re-export scene and math types
pub use whitted_core::{Color, Scene};
pub use whitted_math::{Ray, Vec3};
