//! Triangle intersection.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::hittable::{HitRecord, Hittable};
use whitted_core::Triangle;
use whitted_math::Ray;

const EPSILON: f32 = 1e-7;

impl Hittable for Triangle {
    fn ray_intersect(&self, ray: &Ray) -> Option<f32> {
        let edge1 = self.p1 - self.p0;
        let edge2 = self.p2 - self.p0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.p0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        // Line hit behind (or at) the origin is not a ray hit
        let t = f * edge2.dot(q);
        if t > EPSILON {
            Some(t)
        } else {
            None
        }
    }

    fn hit_record(&self, ray: &Ray, t: f32) -> HitRecord {
        HitRecord {
            point: ray.at(t),
            normal: self.normal(),
            material: self.material,
        }
    }
}
