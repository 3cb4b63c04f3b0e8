//! Recursive Whitted light transport.
//!
//! Each hit combines Phong-style direct lighting (with hard shadows) and the
//! colors returned by one reflected and one refracted ray, weighted by the
//! material's albedo.

use crate::hittable::HitRecord;
use crate::intersect::scene_intersect;
use whitted_core::{Color, Scene};
use whitted_math::{reflect, refract, Ray, Vec3};

/// Deepest recursion level that still shades. Deeper rays return the
/// background, which cuts off mirror-to-mirror bounces.
pub const MAX_DEPTH: u32 = 4;

/// Pale sky blue returned for misses and truncated recursion.
pub const BACKGROUND: Color = Color::new(0.0, 127.0 / 255.0, 1.0);

/// Offset applied along the normal to secondary ray origins.
const SURFACE_EPSILON: f32 = 1e-3;

/// Compute the color seen by a ray.
///
/// `depth` is 0 for primary rays and grows by one per reflection or
/// refraction.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32) -> Color {
    if depth > MAX_DEPTH {
        return BACKGROUND;
    }

    let Some(hit) = scene_intersect(ray, scene) else {
        return BACKGROUND;
    };

    let material = &hit.material;
    let [kd, ks, kr, kt] = material.albedo;

    // Zero-weight branches cannot contribute, skip tracing them
    let reflect_color = if kr != 0.0 {
        let dir = reflect(ray.direction(), hit.normal).normalize();
        let origin = offset_origin(hit.point, hit.normal, dir);
        cast_ray(&Ray::new(origin, dir), scene, depth + 1)
    } else {
        Color::ZERO
    };

    let refract_color = if kt != 0.0 {
        let dir = refract(ray.direction(), hit.normal, material.refractive_index).normalize();
        let origin = offset_origin(hit.point, hit.normal, dir);
        cast_ray(&Ray::new(origin, dir), scene, depth + 1)
    } else {
        Color::ZERO
    };

    let (diffuse, specular) = direct_lighting(&hit, ray.direction(), scene);

    material.diffuse_color * diffuse * kd
        + Color::ONE * specular * ks
        + reflect_color * kr
        + refract_color * kt
}

/// Accumulated diffuse and specular light intensity at a hit point.
///
/// Lights blocked by anything closer than the light itself contribute
/// nothing.
pub fn direct_lighting(hit: &HitRecord, view_dir: Vec3, scene: &Scene) -> (f32, f32) {
    let mut diffuse = 0.0;
    let mut specular = 0.0;

    for light in &scene.lights {
        let to_light = light.position - hit.point;
        let light_distance = to_light.length();
        let light_dir = to_light.normalize();

        let shadow_origin = offset_origin(hit.point, hit.normal, light_dir);
        if let Some(blocker) = scene_intersect(&Ray::new(shadow_origin, light_dir), scene) {
            if (blocker.point - shadow_origin).length() < light_distance {
                continue;
            }
        }

        diffuse += light.intensity * light_dir.dot(hit.normal).max(0.0);
        specular += (-reflect(-light_dir, hit.normal))
            .dot(view_dir)
            .max(0.0)
            .powf(hit.material.specular_exponent)
            * light.intensity;
    }

    (diffuse, specular)
}

/// Nudge `point` off the surface toward the side `dir` leaves from.
#[inline]
fn offset_origin(point: Vec3, normal: Vec3, dir: Vec3) -> Vec3 {
    if dir.dot(normal) < 0.0 {
        point - normal * SURFACE_EPSILON
    } else {
        point + normal * SURFACE_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_core::{Cube, Light, Material, Sphere};

    fn lit_sphere_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            2.0,
            Material::matte(Color::new(0.4, 0.4, 0.3)),
        ));
        scene.add_light(Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5));
        scene
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = lit_sphere_scene();
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        assert_eq!(cast_ray(&ray, &scene, 0), BACKGROUND);
    }

    #[test]
    fn test_depth_limit_returns_background() {
        let scene = lit_sphere_scene();
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        assert_ne!(cast_ray(&ray, &scene, 0), BACKGROUND);
        assert_eq!(cast_ray(&ray, &scene, MAX_DEPTH + 1), BACKGROUND);
        assert_eq!(cast_ray(&ray, &scene, 5), BACKGROUND);
    }

    #[test]
    fn test_depth_limit_with_facing_mirrors() {
        let mut scene = Scene::new().with_checkerboard(false);
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0, Material::mirror()));
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, 10.0), 2.0, Material::mirror()));
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        // Terminates despite the infinite bounce chain
        let color = cast_ray(&ray, &scene, 0);
        assert!(color.is_finite());
        assert_eq!(cast_ray(&ray, &scene, 5), BACKGROUND);
    }

    #[test]
    fn test_matte_shading_matches_lambert() {
        let scene = lit_sphere_scene();
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        let hit = scene_intersect(&ray, &scene).unwrap();
        let light_dir = (scene.lights[0].position - hit.point).normalize();
        let expected = Color::new(0.4, 0.4, 0.3) * 1.5 * light_dir.dot(hit.normal);

        let color = cast_ray(&ray, &scene, 0);
        assert!((color - expected).length() < 1e-5);
    }

    #[test]
    fn test_occluder_zeroes_light_contribution() {
        let mut scene = Scene::new().with_checkerboard(false);
        scene.add(Cube::new(
            Vec3::new(-10.0, -1.0, -20.0),
            Vec3::new(10.0, 0.0, 0.0),
            Material::ivory(),
        ));
        scene.add_light(Light::new(Vec3::new(0.0, 10.0, -5.0), 1.0));

        let hit = HitRecord {
            point: Vec3::new(0.0, 0.0, -5.0),
            normal: Vec3::Y,
            material: Material::ivory(),
        };
        let view_dir = Vec3::new(0.0, -1.0, -1.0).normalize();

        let (diffuse, specular) = direct_lighting(&hit, view_dir, &scene);
        assert!((diffuse - 1.0).abs() < 1e-5);
        assert!(specular > 0.0);

        scene.add(Sphere::new(Vec3::new(0.0, 5.0, -5.0), 1.0, Material::red_rubber()));
        assert_eq!(direct_lighting(&hit, view_dir, &scene), (0.0, 0.0));
    }

    #[test]
    fn test_occluder_behind_light_does_not_shadow() {
        let mut scene = Scene::new().with_checkerboard(false);
        scene.add_light(Light::new(Vec3::new(0.0, 10.0, -5.0), 1.0));
        scene.add(Sphere::new(Vec3::new(0.0, 20.0, -5.0), 1.0, Material::red_rubber()));

        let hit = HitRecord {
            point: Vec3::new(0.0, 0.0, -5.0),
            normal: Vec3::Y,
            material: Material::matte(Color::ONE),
        };

        let (diffuse, _) = direct_lighting(&hit, -Vec3::Y, &scene);
        assert!((diffuse - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_glass_sphere_scales_background() {
        let mut scene = Scene::new().with_checkerboard(false);
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0, Material::glass()));
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        // No lights and no floor: every leaf of the ray tree is background,
        // so the result is the background scaled by the albedo weights.
        let color = cast_ray(&ray, &scene, 0);
        let scale = color.z / BACKGROUND.z;
        assert!(scale > 0.7 && scale < 0.9, "scale {}", scale);
        assert!((color - BACKGROUND * scale).length() < 1e-4);
    }
}
