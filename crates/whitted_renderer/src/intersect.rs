//! Nearest-hit search over the whole scene.
//!
//! Every primitive is tested in turn (no acceleration structure), then the
//! infinite checkerboard floor competes with the nearest primitive hit.

use crate::hittable::{HitRecord, Hittable};
use whitted_core::{Color, Material, Primitive, Scene};
use whitted_math::{Ray, Vec3};

/// Height of the checkerboard plane (y = FLOOR_HEIGHT).
pub const FLOOR_HEIGHT: f32 = -4.0;

/// Hits at or beyond this distance count as background.
pub const HORIZON: f32 = 1000.0;

/// Rays flatter than this never hit the floor.
const FLOOR_PARALLEL_EPSILON: f32 = 1e-3;

/// Find the nearest hit of `ray` in `scene`.
///
/// Returns `None` when nothing is hit closer than [`HORIZON`].
pub fn scene_intersect(ray: &Ray, scene: &Scene) -> Option<HitRecord> {
    let mut nearest = f32::MAX;
    let mut closest: Option<&Primitive> = None;

    for primitive in &scene.primitives {
        if let Some(t) = primitive.ray_intersect(ray) {
            if t < nearest {
                nearest = t;
                closest = Some(primitive);
            }
        }
    }

    let mut hit = closest.map(|primitive| primitive.hit_record(ray, nearest));

    if scene.checkerboard && ray.direction.y.abs() > FLOOR_PARALLEL_EPSILON {
        let d = -(ray.origin.y - FLOOR_HEIGHT) / ray.direction.y;
        if d > 0.0 && d < nearest {
            nearest = d;
            hit = Some(floor_hit(ray.at(d)));
        }
    }

    if nearest < HORIZON {
        hit
    } else {
        None
    }
}

/// Hit record for a point on the checkerboard floor.
fn floor_hit(point: Vec3) -> HitRecord {
    HitRecord {
        point,
        normal: Vec3::Y,
        material: Material::matte(checker_color(point)),
    }
}

/// Two-tone checker pattern with 2-unit squares.
pub fn checker_color(point: Vec3) -> Color {
    let cell = (0.5 * point.x + 1000.0) as i32 + (0.5 * point.z) as i32;
    if cell & 1 == 1 {
        Color::new(0.1, 0.1, 0.1)
    } else {
        Color::new(0.3, 0.2, 0.1)
    }
}
