//! Thin typed surface over the OpenGL calls this demo issues.
//!
//! `GlApi` names exactly the entry points used by the render path, so the
//! render and loop code can run against either the loaded driver bindings or
//! a recording backend in tests. This is a test seam, not a multi-backend
//! renderer.

mod api;
mod load;

#[cfg(test)]
pub mod recording;

pub use api::{BufferId, GlApi, GlError, GlResult, ProgramId, ShaderId, ShaderStage, VertexArrayId};
pub use load::LoadedGl;
