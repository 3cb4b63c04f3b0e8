//! Mirror reflection and Snell refraction of direction vectors.

use crate::Vec3;

/// Direction returned by [`refract`] under total internal reflection.
///
/// It has no physical meaning. Callers still trace it, which adds a small
/// non-physical contribution instead of a second reflection.
pub const TOTAL_INTERNAL_REFLECTION: Vec3 = Vec3::X;

/// Reflect `incident` about the surface normal `normal`.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - normal * 2.0 * incident.dot(normal)
}

/// Refract `incident` through a surface with outward `normal`.
///
/// `eta_t` is the refractive index of the medium behind the surface and the
/// outside medium is taken as air (1.0). A ray arriving from inside the
/// object (negative cosine of incidence) flips the normal and swaps the two
/// indices.
pub fn refract(incident: Vec3, normal: Vec3, eta_t: f32) -> Vec3 {
    let mut normal = normal;
    let mut eta_i = 1.0;
    let mut eta_t = eta_t;

    let mut cos_i = -incident.dot(normal).clamp(-1.0, 1.0);
    if cos_i < 0.0 {
        cos_i = -cos_i;
        normal = -normal;
        std::mem::swap(&mut eta_i, &mut eta_t);
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return TOTAL_INTERNAL_REFLECTION;
    }

    incident * eta + normal * (eta * cos_i - k.sqrt())
}
