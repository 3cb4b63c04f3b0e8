//! Fixed five-tap anti-aliasing.
//!
//! Every pixel traces the same five primary rays: the pixel direction and
//! four variants nudged by half a unit in direction space. There is no
//! randomness, so renders are reproducible bit for bit.

use glam::DVec3;

use crate::camera::Camera;
use crate::shading::cast_ray;
use whitted_core::{Color, Scene};
use whitted_math::{Ray, Vec3};

/// Offsets added to the pixel direction before normalization.
///
/// The pattern has no -x or -y tap. Renders are compared byte for byte
/// against existing output, so it stays as is.
pub const SAMPLE_OFFSETS: [DVec3; 5] = [
    DVec3::ZERO,
    DVec3::new(0.5, 0.0, 0.0),
    DVec3::new(0.0, 0.5, 0.0),
    DVec3::new(0.0, 0.0, 0.5),
    DVec3::new(0.0, 0.0, -0.5),
];

/// Trace one primary ray from the camera origin along `direction`.
#[inline]
fn trace_primary(direction: DVec3, scene: &Scene) -> Color {
    let ray = Ray::new(Vec3::ZERO, direction.as_vec3().normalize());
    cast_ray(&ray, scene, 0)
}

/// Average color of the five fixed sample directions around `direction`.
pub fn antialias(direction: DVec3, scene: &Scene) -> Color {
    let mut sum = Color::ZERO;
    for offset in SAMPLE_OFFSETS {
        sum += trace_primary(direction + offset, scene);
    }
    sum / SAMPLE_OFFSETS.len() as f32
}

/// Color of pixel (i, j).
///
/// With `antialias` off only the center ray is traced.
pub fn render_pixel(camera: &Camera, scene: &Scene, i: u32, j: u32, antialias_enabled: bool) -> Color {
    let direction = camera.pixel_direction(i, j);
    if antialias_enabled {
        antialias(direction, scene)
    } else {
        trace_primary(direction, scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shading::BACKGROUND;
    use whitted_core::{Material, Sphere};

    #[test]
    fn test_empty_scene_is_background() {
        let scene = Scene::new().with_checkerboard(false);
        let color = antialias(DVec3::new(0.0, 0.0, -1.0), &scene);

        assert!((color - BACKGROUND).length() < 1e-6);
    }

    #[test]
    fn test_average_of_five_taps() {
        let mut scene = Scene::new().with_checkerboard(false);
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0, Material::matte(Color::ONE)));

        let direction = DVec3::new(0.0, 0.0, -1.0);
        let expected = SAMPLE_OFFSETS
            .iter()
            .map(|o| trace_primary(direction + *o, &scene))
            .fold(Color::ZERO, |acc, c| acc + c)
            / 5.0;

        assert_eq!(antialias(direction, &scene), expected);
    }

    #[test]
    fn test_edge_pixel_blends_hit_and_miss() {
        let mut scene = Scene::new().with_checkerboard(false);
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0, Material::matte(Color::ZERO)));

        // Just outside the silhouette (tan = 0.2041): only the +x tap lands
        // on the black sphere, the other four see background.
        let direction = DVec3::new(-17.9, 0.0, -86.6);
        let color = antialias(direction, &scene);

        assert!((color - BACKGROUND * 0.8).length() < 1e-6);
    }

    #[test]
    fn test_single_sample_mode() {
        let scene = Scene::new().with_checkerboard(false);
        let camera = Camera::new(16, 9, std::f64::consts::PI / 3.0);

        assert_eq!(render_pixel(&camera, &scene, 3, 3, false), BACKGROUND);
    }
}
