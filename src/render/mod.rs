//! GPU resource setup and the per-frame draw path.
//!
//! Everything here is generic over [`crate::gl::GlApi`] so the same code runs
//! against the loaded driver and against the recording backend in tests.

mod frame;
mod mesh;
mod pipeline;
mod scene;

pub use frame::FrameRenderer;
pub use mesh::TriangleMesh;
pub use pipeline::ShaderPipeline;
pub use scene::Scene;
