use crate::config::ColorRgba;
use crate::gl::GlApi;

use super::Scene;

/// Per-frame draw path.
///
/// One frame is: set clear color, clear, bind program, bind vertex array,
/// one draw call. Presentation belongs to the surface, not to GL.
pub struct FrameRenderer {
    clear: ColorRgba,
}

impl FrameRenderer {
    pub fn new(clear: ColorRgba) -> Self {
        Self { clear }
    }

    pub fn render<G: GlApi>(&self, gl: &G, scene: &Scene) {
        let c = self.clear;
        gl.clear_color(c.r, c.g, c.b, c.a);
        gl.clear();

        gl.use_program(scene.pipeline.program());
        gl.bind_vertex_array(Some(scene.mesh.vao()));
        gl.draw_triangles(0, scene.mesh.vertex_count());
    }
}
