//! Trigon: a minimal GLFW + OpenGL 3.3 core-profile demo.
//!
//! Opens a fixed-size window, compiles one shader pair, uploads one triangle
//! and redraws it every frame until the window is closed. The library split
//! exists so the render and loop code can be driven against a recording GL
//! backend in tests.

pub mod config;
pub mod core;
pub mod gl;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
