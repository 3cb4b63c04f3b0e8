//! Row-band partitioning for parallel rendering.
//!
//! The image is split into contiguous bands of whole rows, one per worker.
//! Each band maps to its own disjoint slice of the framebuffer, so workers
//! never write the same pixel and need no locking.

use std::ops::Range;

use crate::camera::Camera;
use crate::sampler::render_pixel;
use whitted_core::{Color, Scene};

/// A contiguous band of image rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// First row of the band
    pub start_row: u32,
    /// One past the last row of the band
    pub end_row: u32,
    /// Index of this bucket (worker slot)
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(start_row: u32, end_row: u32, index: usize) -> Self {
        Self {
            start_row,
            end_row,
            index,
        }
    }

    /// Number of rows in the band.
    pub fn row_count(&self) -> u32 {
        self.end_row - self.start_row
    }

    /// The band's rows as a range.
    pub fn rows(&self) -> Range<u32> {
        self.start_row..self.end_row
    }
}

/// Split `height` rows into `workers` bands.
///
/// Every band gets `height / workers` rows and the last band also takes the
/// remainder. With more workers than rows the leading bands are empty.
pub fn generate_buckets(height: u32, workers: usize) -> Vec<Bucket> {
    let workers = workers.max(1);
    let portion = height / workers as u32;

    (0..workers)
        .map(|index| {
            let start = portion * index as u32;
            let end = if index == workers - 1 {
                height
            } else {
                start + portion
            };
            Bucket::new(start, end, index)
        })
        .collect()
}

/// Render every pixel of `bucket` into `pixels`.
///
/// `pixels` is the bucket's slice of the framebuffer, row-major, starting at
/// column 0 of `bucket.start_row`.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    scene: &Scene,
    antialias: bool,
    pixels: &mut [Color],
) {
    let width = camera.image_width as usize;
    debug_assert_eq!(pixels.len(), bucket.row_count() as usize * width);

    for (j, row) in bucket.rows().zip(pixels.chunks_exact_mut(width)) {
        for (i, pixel) in row.iter_mut().enumerate() {
            *pixel = render_pixel(camera, scene, i as u32, j, antialias);
        }
    }
}
