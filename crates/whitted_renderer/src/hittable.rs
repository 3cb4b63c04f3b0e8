//! Hittable trait and HitRecord for ray-object intersection.

use whitted_core::{Material, Primitive};
use whitted_math::{Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub point: Vec3,
    /// Outward surface normal at the intersection (unit length)
    pub normal: Vec3,
    /// Material at the intersection point, copied out of the shape
    pub material: Material,
}

/// Trait for objects that can be hit by rays.
///
/// Intersection is split in two so the scene scan only pays for the
/// distance test; the hit attributes are resolved once for the winner.
pub trait Hittable: Send + Sync {
    /// Distance along the ray to the nearest hit in front of the origin.
    fn ray_intersect(&self, ray: &Ray) -> Option<f32>;

    /// Resolve point, normal and material for a hit at distance `t`.
    fn hit_record(&self, ray: &Ray, t: f32) -> HitRecord;
}

impl Hittable for Primitive {
    fn ray_intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Primitive::Sphere(s) => s.ray_intersect(ray),
            Primitive::Cube(c) => c.ray_intersect(ray),
            Primitive::Triangle(t) => t.ray_intersect(ray),
        }
    }

    fn hit_record(&self, ray: &Ray, t: f32) -> HitRecord {
        match self {
            Primitive::Sphere(s) => s.hit_record(ray, t),
            Primitive::Cube(c) => c.hit_record(ray, t),
            Primitive::Triangle(tri) => tri.hit_record(ray, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_core::{Cube, Sphere, Triangle};

    #[test]
    fn test_primitive_dispatch() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
        let primitives: Vec<Primitive> = vec![
            Sphere::new(Vec3::ZERO, 1.0, Material::ivory()).into(),
            Cube::new(Vec3::splat(-1.0), Vec3::splat(1.0), Material::glass()).into(),
            Triangle::new(
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Material::mirror(),
            )
            .into(),
        ];

        let distances: Vec<_> = primitives.iter().map(|p| p.ray_intersect(&ray)).collect();
        assert_eq!(distances, vec![Some(4.0), Some(4.0), Some(5.0)]);

        for primitive in &primitives {
            let t = primitive.ray_intersect(&ray).unwrap();
            let rec = primitive.hit_record(&ray, t);
            assert_eq!(rec.material, *primitive.material());
            assert_eq!(rec.normal, Vec3::Z);
        }
    }
}
