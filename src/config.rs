//! Run configuration.
//!
//! Everything the demo draws is fixed at startup: window parameters, shader
//! sources, triangle geometry and clear colors all live here as immutable
//! configuration handed to the setup path, not as globals scattered through
//! the render code.

use bytemuck::{Pod, Zeroable};

/// Linear RGBA color.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// A single vertex as the vertex shader consumes it: position only.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }
}

/// Pass-through vertex stage: position straight to clip space.
pub const VERTEX_SHADER_SRC: &str = "\
#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

/// Constant-color fragment stage (opaque orange).
pub const FRAGMENT_SHADER_SRC: &str = "\
#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
";

/// Window parameters and requested GL context version.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// (major, minor); the context is always requested as core profile.
    pub context_version: (u32, u32),
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "pruebita".to_string(),
            width: 800,
            height: 800,
            context_version: (3, 3),
        }
    }
}

/// Shader sources plus the one piece of geometry the demo owns.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub vertex_shader: String,
    pub fragment_shader: String,
    pub triangle: [Vertex; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            vertex_shader: VERTEX_SHADER_SRC.to_string(),
            fragment_shader: FRAGMENT_SHADER_SRC.to_string(),
            triangle: equilateral_triangle(),
        }
    }
}

/// The triangle centered near the origin, z = 0.
///
/// Height split: one third of 0.5·√3 below the origin, two thirds above.
pub fn equilateral_triangle() -> [Vertex; 3] {
    let sqrt3 = 3.0_f32.sqrt();
    [
        Vertex::new(-0.5, -0.5 * sqrt3 / 3.0, 0.0), // bottom left
        Vertex::new(0.5, -0.5 * sqrt3 / 3.0, 0.0),  // bottom right
        Vertex::new(0.0, 0.5 * sqrt3 * 2.0 / 3.0, 0.0), // top
    ]
}

/// Background colors.
///
/// `startup` is applied once before the loop; the first loop iteration
/// overwrites it, so it is only visible for the instant before the loop
/// takes over.
#[derive(Debug, Copy, Clone)]
pub struct ClearConfig {
    pub startup: ColorRgba,
    pub frame: ColorRgba,
}

impl Default for ClearConfig {
    fn default() -> Self {
        Self {
            startup: ColorRgba::new(0.07, 0.13, 0.17, 1.0),
            frame: ColorRgba::new(1.0, 0.5, 0.0, 1.0),
        }
    }
}

/// Top-level run configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub scene: SceneConfig,
    pub clear: ClearConfig,
}
