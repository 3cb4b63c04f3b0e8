//! Parallel frame renderer.
//!
//! Implements the full frame pass:
//! - Row bands rendered on a fixed rayon pool, one band per worker
//! - Tone mapping by the brightest channel
//! - 8-bit quantization for output

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket};
use crate::camera::Camera;
use crate::error::{RenderError, RenderResult};
use crate::output::save_image;
use whitted_core::{Color, Scene};

/// Default vertical field of view, π/3 rounded to f32 so pixel directions
/// match renders made with a single-precision angle.
pub const DEFAULT_FOV: f64 = (std::f32::consts::PI / 3.0) as f64;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Vertical field of view in radians
    pub fov: f64,
    /// Worker count, `None` uses every available core
    pub threads: Option<usize>,
    /// Trace five samples per pixel instead of one
    pub antialias: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fov: DEFAULT_FOV,
            threads: None,
            antialias: true,
        }
    }
}

impl RenderConfig {
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    /// Number of row bands to render in parallel.
    pub fn worker_count(&self) -> usize {
        match self.threads {
            Some(n) => n.max(1),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }

    /// Camera matching this configuration.
    pub fn camera(&self) -> Camera {
        Camera::new(self.width, self.height, self.fov)
    }
}

/// Scale a color down so its brightest channel is at most 1.
///
/// Hue is preserved; colors already in range pass through untouched.
#[inline]
pub fn tone_map(color: Color) -> Color {
    let max = color.max_element();
    if max > 1.0 {
        color / max
    } else {
        color
    }
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = tone_map(color).clamp(Color::ZERO, Color::ONE);
    [
        (255.0 * c.x) as u8,
        (255.0 * c.y) as u8,
        (255.0 * c.z) as u8,
    ]
}

/// Framebuffer of linear colors, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Tone-mapped, quantized RGB bytes in row order.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Render the entire scene to an image buffer.
///
/// The rows are split into one band per worker and every band is traced on
/// its own thread, writing only its slice of the framebuffer. Returns once
/// all bands are finished.
pub fn render(scene: &Scene, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    if config.width == 0 || config.height == 0 {
        return Err(RenderError::InvalidResolution {
            width: config.width,
            height: config.height,
        });
    }

    let workers = config.worker_count();
    let camera = config.camera();
    let buckets = generate_buckets(config.height, workers);

    log::info!(
        "Rendering {}x{} with {} workers ({} primitives, {} lights)",
        config.width,
        config.height,
        workers,
        scene.primitive_count(),
        scene.light_count()
    );
    let start = Instant::now();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    let mut image = ImageBuffer::new(config.width, config.height);
    let row_len = config.width as usize;

    // Carve the framebuffer into one disjoint slice per band
    let mut jobs = Vec::with_capacity(buckets.len());
    let mut rest: &mut [Color] = &mut image.pixels;
    for bucket in &buckets {
        let (band, tail) = std::mem::take(&mut rest).split_at_mut(bucket.row_count() as usize * row_len);
        jobs.push((bucket, band));
        rest = tail;
    }

    pool.install(|| {
        jobs.into_par_iter().for_each(|(bucket, pixels)| {
            log::debug!(
                "Worker {} rendering rows {}..{}",
                bucket.index,
                bucket.start_row,
                bucket.end_row
            );
            render_bucket(bucket, &camera, scene, config.antialias, pixels);
        });
    });

    log::info!("Render finished in {:.2?}", start.elapsed());
    Ok(image)
}

/// Render the scene and write it to `path`.
///
/// The format is picked from the file extension (`.ppm` or `.png`).
pub fn render_to_file(scene: &Scene, config: &RenderConfig, path: impl AsRef<Path>) -> RenderResult<()> {
    let path = path.as_ref();
    let image = render(scene, config)?;
    save_image(path, &image)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
