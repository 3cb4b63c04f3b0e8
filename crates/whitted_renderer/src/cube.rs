//! Axis-aligned box intersection.
//!
//! Slab method: the ray's sign bits select which bound is the near plane on
//! each axis, so the [t_min, t_max] window narrows without per-axis branches.

use crate::hittable::{HitRecord, Hittable};
use whitted_core::Cube;
use whitted_math::{Ray, Vec3};

/// Outward normal of the face of `cube` closest to `point`.
fn face_normal(cube: &Cube, point: Vec3) -> Vec3 {
    let mut best = f32::INFINITY;
    let mut normal = Vec3::Y;

    for axis in 0..3 {
        for (bound, side) in [(cube.bounds[0][axis], -1.0), (cube.bounds[1][axis], 1.0)] {
            let distance = (point[axis] - bound).abs();
            if distance < best {
                best = distance;
                normal = Vec3::ZERO;
                normal[axis] = side;
            }
        }
    }

    normal
}

impl Hittable for Cube {
    fn ray_intersect(&self, ray: &Ray) -> Option<f32> {
        let b = &self.bounds;
        let o = ray.origin;
        let inv = ray.inv_direction;
        let s = ray.sign;

        // X
        let mut t_min = (b[s[0]].x - o.x) * inv.x;
        let mut t_max = (b[1 - s[0]].x - o.x) * inv.x;

        // Y
        let ty_min = (b[s[1]].y - o.y) * inv.y;
        let ty_max = (b[1 - s[1]].y - o.y) * inv.y;
        if t_min > ty_max || ty_min > t_max {
            return None;
        }
        if ty_min > t_min {
            t_min = ty_min;
        }
        if ty_max < t_max {
            t_max = ty_max;
        }

        // Z
        let tz_min = (b[s[2]].z - o.z) * inv.z;
        let tz_max = (b[1 - s[2]].z - o.z) * inv.z;
        if t_min > tz_max || tz_min > t_max {
            return None;
        }
        if tz_min > t_min {
            t_min = tz_min;
        }
        if tz_max < t_max {
            t_max = tz_max;
        }

        // Origin inside the box: report the exit
        if t_min >= 0.0 {
            Some(t_min)
        } else if t_max >= 0.0 {
            Some(t_max)
        } else {
            None
        }
    }

    fn hit_record(&self, ray: &Ray, t: f32) -> HitRecord {
        let point = ray.at(t);
        HitRecord {
            point,
            normal: face_normal(self, point),
            material: self.material,
        }
    }
}
