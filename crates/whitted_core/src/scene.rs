//! Scene types for the Whitted tracer.
//!
//! A scene is a flat list of primitives and point lights. It is built once
//! and stays read-only while the renderer walks it from many threads.

use whitted_math::Vec3;

use crate::material::{Light, Material};

/// A sphere primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// An axis-aligned box.
///
/// `bounds[0]` holds the minimum corner and `bounds[1]` the maximum corner,
/// so a ray's sign bit indexes the near slab directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Cube {
    pub bounds: [Vec3; 2],
    pub material: Material,
}

impl Cube {
    /// Create a box from any two opposite corners.
    pub fn new(a: Vec3, b: Vec3, material: Material) -> Self {
        Self {
            bounds: [a.min(b), a.max(b)],
            material,
        }
    }
}

/// A triangle primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub p0: Vec3,
    pub p1: Vec3,
    pub p2: Vec3,
    pub material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3, material: Material) -> Self {
        Self {
            p0,
            p1,
            p2,
            material,
        }
    }

    /// Face normal from the winding order (p0, p1, p2), unit length.
    pub fn normal(&self) -> Vec3 {
        (self.p1 - self.p0).cross(self.p2 - self.p0).normalize()
    }

    /// Twice the triangle area.
    pub fn doubled_area(&self) -> f32 {
        (self.p1 - self.p0).cross(self.p2 - self.p0).length()
    }
}

/// The closed set of shapes the tracer knows how to intersect.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Cube(Cube),
    Triangle(Triangle),
}

impl Primitive {
    /// Material of the underlying shape.
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(s) => &s.material,
            Primitive::Cube(c) => &c.material,
            Primitive::Triangle(t) => &t.material,
        }
    }

    /// Short name of the shape kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Cube(_) => "cube",
            Primitive::Triangle(_) => "triangle",
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Cube> for Primitive {
    fn from(cube: Cube) -> Self {
        Primitive::Cube(cube)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}

/// A complete scene: primitives, lights and the optional checkerboard floor.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Primitives, intersected in order
    pub primitives: Vec<Primitive>,

    /// Point lights
    pub lights: Vec<Light>,

    /// Whether the infinite checkerboard ground plane is present
    pub checkerboard: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene with the checkerboard floor enabled.
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
            lights: Vec::new(),
            checkerboard: true,
        }
    }

    /// Enable or disable the checkerboard floor.
    pub fn with_checkerboard(mut self, enabled: bool) -> Self {
        self.checkerboard = enabled;
        self
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Get primitive count.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// The built-in demo scene: four spheres, a box, a triangle and three lights.
    pub fn demo() -> Self {
        let mut scene = Scene::new();

        scene.add(Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, Material::ivory()));
        scene.add(Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, Material::glass()));
        scene.add(Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, Material::red_rubber()));
        scene.add(Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, Material::mirror()));
        scene.add(Cube::new(
            Vec3::new(3.0, -4.0, -12.0),
            Vec3::new(5.0, -2.0, -10.0),
            Material::ivory(),
        ));
        scene.add(Triangle::new(
            Vec3::new(-9.0, -4.0, -20.0),
            Vec3::new(-5.0, -4.0, -20.0),
            Vec3::new(-7.0, 2.0, -22.0),
            Material::red_rubber(),
        ));

        scene.add_light(Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5));
        scene.add_light(Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8));
        scene.add_light(Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7));

        scene
    }
}
