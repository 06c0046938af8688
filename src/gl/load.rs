use std::ffi::c_void;

use gl::types::{GLboolean, GLchar, GLint, GLsizei, GLsizeiptr, GLuint};

use super::api::{
    BufferId, GlApi, GlError, GlResult, ProgramId, ShaderId, ShaderStage, VertexArrayId,
};

/// Backend over the `gl` crate's loaded function pointers.
///
/// The `gl` crate stores function pointers in process globals, so this type
/// carries no state; holding a value witnesses that `load` ran after the
/// context was made current.
pub struct LoadedGl(());

impl LoadedGl {
    /// Loads GL entry points through `loader`, typically the window's
    /// `get_proc_address`.
    pub fn load<F>(mut loader: F) -> Self
    where
        F: FnMut(&str) -> *const c_void,
    {
        gl::load_with(|symbol| loader(symbol));
        log::debug!("GL function pointers loaded");
        Self(())
    }
}

impl GlApi for LoadedGl {
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { gl::Viewport(x, y, width, height) }
    }

    fn create_shader(&self, stage: ShaderStage) -> GlResult<ShaderId> {
        let kind = match stage {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        };
        let id = unsafe { gl::CreateShader(kind) };
        if id == 0 {
            return Err(GlError::new(format!("glCreateShader({stage:?}) returned 0")));
        }
        Ok(ShaderId(id))
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        // Pointer + explicit length form; no NUL terminator required.
        let ptr = source.as_ptr() as *const GLchar;
        let len = source.len() as GLint;
        unsafe { gl::ShaderSource(shader.0, 1, &ptr, &len) }
    }

    fn compile_shader(&self, shader: ShaderId) -> GlResult<()> {
        unsafe {
            gl::CompileShader(shader.0);
            let mut status: GLint = 0;
            gl::GetShaderiv(shader.0, gl::COMPILE_STATUS, &mut status);
            if status == gl::TRUE as GLint {
                Ok(())
            } else {
                Err(GlError::new(format!(
                    "shader compilation failed: {}",
                    shader_info_log(shader.0)
                )))
            }
        }
    }

    fn delete_shader(&self, shader: ShaderId) {
        unsafe { gl::DeleteShader(shader.0) }
    }

    fn create_program(&self) -> GlResult<ProgramId> {
        let id = unsafe { gl::CreateProgram() };
        if id == 0 {
            return Err(GlError::new("glCreateProgram returned 0"));
        }
        Ok(ProgramId(id))
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        unsafe { gl::AttachShader(program.0, shader.0) }
    }

    fn link_program(&self, program: ProgramId) -> GlResult<()> {
        unsafe {
            gl::LinkProgram(program.0);
            let mut status: GLint = 0;
            gl::GetProgramiv(program.0, gl::LINK_STATUS, &mut status);
            if status == gl::TRUE as GLint {
                Ok(())
            } else {
                Err(GlError::new(format!(
                    "program link failed: {}",
                    program_info_log(program.0)
                )))
            }
        }
    }

    fn use_program(&self, program: ProgramId) {
        unsafe { gl::UseProgram(program.0) }
    }

    fn delete_program(&self, program: ProgramId) {
        unsafe { gl::DeleteProgram(program.0) }
    }

    fn gen_buffer(&self) -> BufferId {
        let mut id: GLuint = 0;
        unsafe { gl::GenBuffers(1, &mut id) }
        BufferId(id)
    }

    fn bind_array_buffer(&self, buffer: Option<BufferId>) {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, buffer.map_or(0, |b| b.0)) }
    }

    fn array_buffer_data(&self, bytes: &[u8]) {
        unsafe {
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            )
        }
    }

    fn delete_buffer(&self, buffer: BufferId) {
        unsafe { gl::DeleteBuffers(1, &buffer.0) }
    }

    fn gen_vertex_array(&self) -> VertexArrayId {
        let mut id: GLuint = 0;
        unsafe { gl::GenVertexArrays(1, &mut id) }
        VertexArrayId(id)
    }

    fn bind_vertex_array(&self, vao: Option<VertexArrayId>) {
        unsafe { gl::BindVertexArray(vao.map_or(0, |v| v.0)) }
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        components: i32,
        normalized: bool,
        stride: i32,
        offset: usize,
    ) {
        let normalized: GLboolean = if normalized { gl::TRUE } else { gl::FALSE };
        unsafe {
            gl::VertexAttribPointer(
                index,
                components,
                gl::FLOAT,
                normalized,
                stride,
                offset as *const c_void,
            )
        }
    }

    fn enable_vertex_attrib(&self, index: u32) {
        unsafe { gl::EnableVertexAttribArray(index) }
    }

    fn delete_vertex_array(&self, vao: VertexArrayId) {
        unsafe { gl::DeleteVertexArrays(1, &vao.0) }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { gl::ClearColor(r, g, b, a) }
    }

    fn clear(&self) {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) }
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        unsafe { gl::DrawArrays(gl::TRIANGLES, first, count) }
    }
}

fn shader_info_log(shader: GLuint) -> String {
    unsafe {
        let mut len: GLint = 0;
        gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
        if len <= 0 {
            return String::new();
        }
        let mut buf = vec![0u8; len as usize];
        let mut written: GLsizei = 0;
        gl::GetShaderInfoLog(shader, len, &mut written, buf.as_mut_ptr() as *mut GLchar);
        buf.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn program_info_log(program: GLuint) -> String {
    unsafe {
        let mut len: GLint = 0;
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
        if len <= 0 {
            return String::new();
        }
        let mut buf = vec![0u8; len as usize];
        let mut written: GLsizei = 0;
        gl::GetProgramInfoLog(program, len, &mut written, buf.as_mut_ptr() as *mut GLchar);
        buf.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
