//! Scene file loading.
//!
//! Scenes are described in JSON:
//!
//! ```json
//! {
//!   "materials": { "bronze": { "diffuse_color": [0.5, 0.3, 0.1] } },
//!   "primitives": [
//!     { "type": "sphere", "center": [0, 0, -10], "radius": 2, "material": "bronze" },
//!     { "type": "cube", "min": [-1, -4, -8], "max": [1, -2, -6], "material": "ivory" },
//!     { "type": "triangle", "vertices": [[0, 0, -5], [1, 0, -5], [0, 1, -5]],
//!       "material": { "diffuse_color": [1, 0, 0] } }
//!   ],
//!   "lights": [ { "position": [-20, 20, 20], "intensity": 1.5 } ],
//!   "checkerboard": true
//! }
//! ```
//!
//! A material is either inline or a name, resolved first against the file's
//! `materials` table and then against the built-in presets.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use whitted_math::Vec3;

use crate::material::{Light, Material};
use crate::scene::{Cube, Primitive, Scene, Sphere, Triangle};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid primitive #{index}: {message}")]
    InvalidPrimitive { index: usize, message: String },

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Deserialize, Debug)]
struct SceneFile {
    #[serde(default)]
    materials: HashMap<String, Material>,
    #[serde(default)]
    primitives: Vec<PrimitiveDesc>,
    #[serde(default)]
    lights: Vec<Light>,
    #[serde(default = "default_checkerboard")]
    checkerboard: bool,
}

fn default_checkerboard() -> bool {
    true
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum MaterialRef {
    Named(String),
    Inline(Material),
}

impl Default for MaterialRef {
    fn default() -> Self {
        MaterialRef::Inline(Material::default())
    }
}

#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "lowercase")]
enum PrimitiveDesc {
    Sphere {
        center: Vec3,
        radius: f32,
        #[serde(default)]
        material: MaterialRef,
    },
    Cube {
        min: Vec3,
        max: Vec3,
        #[serde(default)]
        material: MaterialRef,
    },
    Triangle {
        vertices: [Vec3; 3],
        #[serde(default)]
        material: MaterialRef,
    },
}

/// Load a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let scene = load_scene_from_str(&content)?;

    log::info!(
        "Loaded scene {:?}: {} primitives, {} lights",
        path,
        scene.primitive_count(),
        scene.light_count()
    );

    Ok(scene)
}

/// Load a scene from a JSON string (useful for testing).
pub fn load_scene_from_str(content: &str) -> LoadResult<Scene> {
    let file: SceneFile = serde_json::from_str(content)?;

    let mut scene = Scene::new().with_checkerboard(file.checkerboard);
    for (index, desc) in file.primitives.into_iter().enumerate() {
        scene.add(build_primitive(index, desc, &file.materials)?);
    }
    for light in file.lights {
        scene.add_light(light);
    }

    Ok(scene)
}

fn resolve_material(
    material: MaterialRef,
    table: &HashMap<String, Material>,
) -> LoadResult<Material> {
    match material {
        MaterialRef::Inline(material) => Ok(material),
        MaterialRef::Named(name) => table
            .get(&name)
            .copied()
            .or_else(|| Material::preset(&name))
            .ok_or(LoadError::UnknownMaterial(name)),
    }
}

fn build_primitive(
    index: usize,
    desc: PrimitiveDesc,
    table: &HashMap<String, Material>,
) -> LoadResult<Primitive> {
    let primitive: Primitive = match desc {
        PrimitiveDesc::Sphere {
            center,
            radius,
            material,
        } => {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(LoadError::InvalidPrimitive {
                    index,
                    message: format!("sphere radius must be positive, got {}", radius),
                });
            }
            Sphere::new(center, radius, resolve_material(material, table)?).into()
        }
        PrimitiveDesc::Cube { min, max, material } => {
            Cube::new(min, max, resolve_material(material, table)?).into()
        }
        PrimitiveDesc::Triangle { vertices, material } => {
            let [p0, p1, p2] = vertices;
            let triangle = Triangle::new(p0, p1, p2, resolve_material(material, table)?);
            if triangle.doubled_area() == 0.0 {
                log::warn!("Triangle #{} is degenerate and will never be hit", index);
            }
            triangle.into()
        }
    };

    log::debug!("Primitive #{}: {}", index, primitive.kind());
    Ok(primitive)
}
