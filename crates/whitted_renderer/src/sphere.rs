//! Sphere intersection.

use crate::hittable::{HitRecord, Hittable};
use whitted_core::Sphere;
use whitted_math::Ray;

impl Hittable for Sphere {
    fn ray_intersect(&self, ray: &Ray) -> Option<f32> {
        let l = self.center - ray.origin();
        let tca = l.dot(ray.direction());
        let d2 = l.dot(l) - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();

        // Near root first, far root when the origin is inside the sphere
        let mut t0 = tca - thc;
        if t0 < 0.0 {
            t0 = tca + thc;
        }
        if t0 < 0.0 {
            return None;
        }

        Some(t0)
    }

    fn hit_record(&self, ray: &Ray, t: f32) -> HitRecord {
        let point = ray.at(t);
        HitRecord {
            point,
            normal: (point - self.center).normalize(),
            material: self.material,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_core::Material;
    use whitted_math::Vec3;

    fn unit_sphere_at(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Material::matte(Vec3::new(0.5, 0.5, 0.5)))
    }

    #[test]
    fn test_sphere_hit_from_outside() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -10.0), 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // center_distance - radius
        let t = sphere.ray_intersect(&ray).unwrap();
        assert!((t - 8.0).abs() < 1e-5);

        let rec = sphere.hit_record(&ray, t);
        assert!((rec.point - Vec3::new(0.0, 0.0, -8.0)).length() < 1e-5);
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_sphere_hit_from_inside_uses_far_root() {
        let sphere = unit_sphere_at(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let t = sphere.ray_intersect(&ray).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -10.0), 2.0);

        // Perpendicular distance 3 > radius 2
        let ray = Ray::new(Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(sphere.ray_intersect(&ray), None);
    }

    #[test]
    fn test_sphere_behind_ray() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -10.0), 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert_eq!(sphere.ray_intersect(&ray), None);
    }
}
