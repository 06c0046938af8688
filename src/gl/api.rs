use std::fmt;

/// GL object name for a shader stage object.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderId(pub u32);

/// GL object name for a linked program.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ProgramId(pub u32);

/// GL object name for a vertex buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BufferId(pub u32);

/// GL object name for a vertex array object.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexArrayId(pub u32);

/// Shader stage selector.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// Error from a checked GL operation, carrying the driver info log when the
/// driver provides one.
#[derive(Debug, Clone, PartialEq)]
pub struct GlError {
    pub message: String,
}

impl GlError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self { message: msg.into() }
    }
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gl error: {}", self.message)
    }
}

impl std::error::Error for GlError {}

pub type GlResult<T> = Result<T, GlError>;

/// The GL entry points the demo issues, one method per call site class.
///
/// Buffer uploads always target `ARRAY_BUFFER` with `STATIC_DRAW`, and draws
/// are always `TRIANGLES`; those constants are folded into the method names
/// rather than exposed as parameters the demo never varies.
pub trait GlApi {
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);

    fn create_shader(&self, stage: ShaderStage) -> GlResult<ShaderId>;
    fn shader_source(&self, shader: ShaderId, source: &str);
    /// Compiles and checks `COMPILE_STATUS`; `Err` carries the info log.
    fn compile_shader(&self, shader: ShaderId) -> GlResult<()>;
    fn delete_shader(&self, shader: ShaderId);

    fn create_program(&self) -> GlResult<ProgramId>;
    fn attach_shader(&self, program: ProgramId, shader: ShaderId);
    /// Links and checks `LINK_STATUS`; `Err` carries the info log.
    fn link_program(&self, program: ProgramId) -> GlResult<()>;
    fn use_program(&self, program: ProgramId);
    fn delete_program(&self, program: ProgramId);

    fn gen_buffer(&self) -> BufferId;
    /// Binds to `ARRAY_BUFFER`; `None` unbinds.
    fn bind_array_buffer(&self, buffer: Option<BufferId>);
    /// Uploads `bytes` to the bound `ARRAY_BUFFER` with `STATIC_DRAW`.
    fn array_buffer_data(&self, bytes: &[u8]);
    fn delete_buffer(&self, buffer: BufferId);

    fn gen_vertex_array(&self) -> VertexArrayId;
    /// `None` unbinds.
    fn bind_vertex_array(&self, vao: Option<VertexArrayId>);
    /// Describes attribute `index` as `components` × f32 at byte `stride`
    /// and `offset` within the bound buffer.
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        components: i32,
        normalized: bool,
        stride: i32,
        offset: usize,
    );
    fn enable_vertex_attrib(&self, index: u32);
    fn delete_vertex_array(&self, vao: VertexArrayId);

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    /// Clears the color buffer.
    fn clear(&self);
    /// Draws `count` vertices starting at `first` as triangles.
    fn draw_triangles(&self, first: i32, count: i32);
}
