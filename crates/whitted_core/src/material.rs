//! Surface materials and point lights.

use serde::{Deserialize, Serialize};
use whitted_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// A Phong-style material for Whitted shading.
///
/// The four albedo weights scale, in order, the diffuse term, the specular
/// highlight, the reflected color and the refracted color. They are not
/// normalized; a mirror typically carries a large specular weight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Diffuse color (RGB, 0-1)
    pub diffuse_color: Color,

    /// Weights for diffuse, specular, reflection and refraction
    pub albedo: [f32; 4],

    /// Phong exponent of the specular highlight
    pub specular_exponent: f32,

    /// Index of refraction (1.0 = air, 1.5 = glass)
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse_color: Color::ZERO,
            albedo: [1.0, 0.0, 0.0, 0.0],
            specular_exponent: 0.0,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    /// Create a new material.
    pub fn new(
        diffuse_color: Color,
        albedo: [f32; 4],
        specular_exponent: f32,
        refractive_index: f32,
    ) -> Self {
        Self {
            diffuse_color,
            albedo,
            specular_exponent,
            refractive_index,
        }
    }

    /// Purely diffuse material with no highlight, reflection or refraction.
    pub fn matte(diffuse_color: Color) -> Self {
        Self {
            diffuse_color,
            ..Default::default()
        }
    }

    pub fn ivory() -> Self {
        Self::new(Color::new(0.4, 0.4, 0.3), [0.6, 0.3, 0.1, 0.0], 50.0, 1.0)
    }

    pub fn glass() -> Self {
        Self::new(Color::new(0.6, 0.7, 0.8), [0.0, 0.5, 0.1, 0.8], 125.0, 1.5)
    }

    pub fn red_rubber() -> Self {
        Self::new(Color::new(0.3, 0.1, 0.1), [0.9, 0.1, 0.0, 0.0], 10.0, 1.0)
    }

    pub fn mirror() -> Self {
        Self::new(Color::new(1.0, 1.0, 1.0), [0.0, 10.0, 0.8, 0.0], 1425.0, 1.0)
    }

    /// Look up a built-in material by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "ivory" => Some(Self::ivory()),
            "glass" => Some(Self::glass()),
            "red_rubber" => Some(Self::red_rubber()),
            "mirror" => Some(Self::mirror()),
            _ => None,
        }
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material_is_fully_diffuse() {
        let material = Material::default();
        assert_eq!(material.albedo, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(material.refractive_index, 1.0);
    }

    #[test]
    fn test_presets() {
        assert_eq!(Material::preset("glass"), Some(Material::glass()));
        assert_eq!(Material::preset("mirror").map(|m| m.albedo[2]), Some(0.8));
        assert_eq!(Material::preset("velvet"), None);
    }

    #[test]
    fn test_material_partial_json_uses_defaults() {
        let material: Material =
            serde_json::from_str(r#"{ "diffuse_color": [0.2, 0.4, 0.6] }"#).unwrap();

        assert_eq!(material.diffuse_color, Color::new(0.2, 0.4, 0.6));
        assert_eq!(material.albedo, [1.0, 0.0, 0.0, 0.0]);
    }
}
