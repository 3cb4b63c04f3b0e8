//! Pinhole camera at the origin looking down -Z.

use glam::DVec3;

/// Camera for generating primary ray directions.
///
/// Directions are produced in pixel units on an image plane at distance
/// `height / (2 tan(fov / 2))`, before normalization. The y axis is negated
/// so row 0 is the top of the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    /// Vertical field of view in radians
    pub fov: f64,
    // Cached image plane distance
    focal: f64,
}

impl Camera {
    /// Create a camera for the given resolution and field of view.
    pub fn new(image_width: u32, image_height: u32, fov: f64) -> Self {
        let focal = image_height as f64 / (2.0 * (fov / 2.0).tan());
        Self {
            image_width,
            image_height,
            fov,
            focal,
        }
    }

    /// Unnormalized direction through the center of pixel (i, j).
    pub fn pixel_direction(&self, i: u32, j: u32) -> DVec3 {
        let x = (i as f64 + 0.5) - self.image_width as f64 / 2.0;
        let y = -(j as f64 + 0.5) + self.image_height as f64 / 2.0;
        DVec3::new(x, y, -self.focal)
    }
}
