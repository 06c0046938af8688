use crate::config::SceneConfig;
use crate::gl::{GlApi, GlResult};

use super::{ShaderPipeline, TriangleMesh};

/// The demo's GPU-side state: one program, one triangle.
///
/// Created once before the frame loop, read-only during it, destroyed once
/// after it.
pub struct Scene {
    pub pipeline: ShaderPipeline,
    pub mesh: TriangleMesh,
}

impl Scene {
    pub fn create<G: GlApi>(gl: &G, config: &SceneConfig) -> GlResult<Self> {
        let pipeline = ShaderPipeline::create(gl, &config.vertex_shader, &config.fragment_shader)?;
        let mesh = TriangleMesh::upload(gl, &config.triangle);

        log::debug!(
            "scene ready: program {:?}, {} vertices",
            pipeline.program(),
            mesh.vertex_count()
        );
        Ok(Self { pipeline, mesh })
    }

    pub fn destroy<G: GlApi>(&self, gl: &G) {
        self.mesh.destroy(gl);
        self.pipeline.destroy(gl);
    }
}
