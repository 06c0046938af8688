use std::mem;

use crate::config::Vertex;
use crate::gl::{BufferId, GlApi, VertexArrayId};

/// Attribute slot the vertex shader reads positions from.
const POSITION_ATTRIB: u32 = 0;

/// One static triangle: a vertex buffer plus the vertex array object
/// describing its layout. Vertex data is uploaded once and never mutated.
pub struct TriangleMesh {
    vao: VertexArrayId,
    vbo: BufferId,
    vertex_count: i32,
}

impl TriangleMesh {
    pub fn upload<G: GlApi>(gl: &G, vertices: &[Vertex]) -> Self {
        let vao = gl.gen_vertex_array();
        let vbo = gl.gen_buffer();

        // VAO first so the buffer binding and attribute layout record into it.
        gl.bind_vertex_array(Some(vao));
        gl.bind_array_buffer(Some(vbo));
        gl.array_buffer_data(bytemuck::cast_slice(vertices));

        gl.vertex_attrib_pointer_f32(
            POSITION_ATTRIB,
            3,
            false,
            mem::size_of::<Vertex>() as i32,
            0,
        );
        gl.enable_vertex_attrib(POSITION_ATTRIB);

        gl.bind_array_buffer(None);
        gl.bind_vertex_array(None);

        Self {
            vao,
            vbo,
            vertex_count: vertices.len() as i32,
        }
    }

    #[inline]
    pub fn vao(&self) -> VertexArrayId {
        self.vao
    }

    #[inline]
    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }

    pub fn destroy<G: GlApi>(&self, gl: &G) {
        gl.delete_vertex_array(self.vao);
        gl.delete_buffer(self.vbo);
    }
}
