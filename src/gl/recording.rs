//! Recording GL backend for tests.
//!
//! Every `GlApi` call is appended to an ordered log, with monotonically
//! increasing object names handed out per `create`/`gen`. Compile and link
//! checks can be forced to fail to exercise the silent-continuation paths.

use std::cell::{Cell, RefCell};

use super::api::{
    BufferId, GlApi, GlError, GlResult, ProgramId, ShaderId, ShaderStage, VertexArrayId,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Viewport { x: i32, y: i32, width: i32, height: i32 },
    CreateShader { stage: ShaderStage, id: ShaderId },
    ShaderSource { shader: ShaderId, source: String },
    CompileShader { shader: ShaderId },
    DeleteShader { shader: ShaderId },
    CreateProgram { id: ProgramId },
    AttachShader { program: ProgramId, shader: ShaderId },
    LinkProgram { program: ProgramId },
    UseProgram { program: ProgramId },
    DeleteProgram { program: ProgramId },
    GenBuffer { id: BufferId },
    BindArrayBuffer { buffer: Option<BufferId> },
    ArrayBufferData { bytes: Vec<u8> },
    DeleteBuffer { buffer: BufferId },
    GenVertexArray { id: VertexArrayId },
    BindVertexArray { vao: Option<VertexArrayId> },
    VertexAttribPointerF32 {
        index: u32,
        components: i32,
        normalized: bool,
        stride: i32,
        offset: usize,
    },
    EnableVertexAttrib { index: u32 },
    DeleteVertexArray { vao: VertexArrayId },
    ClearColor { r: f32, g: f32, b: f32, a: f32 },
    Clear,
    DrawTriangles { first: i32, count: i32 },
}

/// Net created-minus-deleted object counts.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LiveObjects {
    pub buffers: i64,
    pub vertex_arrays: i64,
    pub programs: i64,
    pub shaders: i64,
}

#[derive(Default)]
pub struct RecordingGl {
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u32>,
    pub fail_compile: Cell<bool>,
    pub fail_link: Cell<bool>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn next_name(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Drains the log; useful for per-frame assertions.
    pub fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    /// Bytes of the most recent `ArrayBufferData` upload.
    pub fn last_buffer_upload(&self) -> Option<Vec<u8>> {
        self.calls
            .borrow()
            .iter()
            .rev()
            .find_map(|c| match c {
                Call::ArrayBufferData { bytes } => Some(bytes.clone()),
                _ => None,
            })
    }

    pub fn live_objects(&self) -> LiveObjects {
        let mut live = LiveObjects::default();
        for call in self.calls.borrow().iter() {
            match call {
                Call::GenBuffer { .. } => live.buffers += 1,
                Call::DeleteBuffer { .. } => live.buffers -= 1,
                Call::GenVertexArray { .. } => live.vertex_arrays += 1,
                Call::DeleteVertexArray { .. } => live.vertex_arrays -= 1,
                Call::CreateProgram { .. } => live.programs += 1,
                Call::DeleteProgram { .. } => live.programs -= 1,
                Call::CreateShader { .. } => live.shaders += 1,
                Call::DeleteShader { .. } => live.shaders -= 1,
                _ => {}
            }
        }
        live
    }
}

impl GlApi for RecordingGl {
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport { x, y, width, height });
    }

    fn create_shader(&self, stage: ShaderStage) -> GlResult<ShaderId> {
        let id = ShaderId(self.next_name());
        self.record(Call::CreateShader { stage, id });
        Ok(id)
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        self.record(Call::ShaderSource { shader, source: source.to_string() });
    }

    fn compile_shader(&self, shader: ShaderId) -> GlResult<()> {
        self.record(Call::CompileShader { shader });
        if self.fail_compile.get() {
            Err(GlError::new("forced compile failure"))
        } else {
            Ok(())
        }
    }

    fn delete_shader(&self, shader: ShaderId) {
        self.record(Call::DeleteShader { shader });
    }

    fn create_program(&self) -> GlResult<ProgramId> {
        let id = ProgramId(self.next_name());
        self.record(Call::CreateProgram { id });
        Ok(id)
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        self.record(Call::AttachShader { program, shader });
    }

    fn link_program(&self, program: ProgramId) -> GlResult<()> {
        self.record(Call::LinkProgram { program });
        if self.fail_link.get() {
            Err(GlError::new("forced link failure"))
        } else {
            Ok(())
        }
    }

    fn use_program(&self, program: ProgramId) {
        self.record(Call::UseProgram { program });
    }

    fn delete_program(&self, program: ProgramId) {
        self.record(Call::DeleteProgram { program });
    }

    fn gen_buffer(&self) -> BufferId {
        let id = BufferId(self.next_name());
        self.record(Call::GenBuffer { id });
        id
    }

    fn bind_array_buffer(&self, buffer: Option<BufferId>) {
        self.record(Call::BindArrayBuffer { buffer });
    }

    fn array_buffer_data(&self, bytes: &[u8]) {
        self.record(Call::ArrayBufferData { bytes: bytes.to_vec() });
    }

    fn delete_buffer(&self, buffer: BufferId) {
        self.record(Call::DeleteBuffer { buffer });
    }

    fn gen_vertex_array(&self) -> VertexArrayId {
        let id = VertexArrayId(self.next_name());
        self.record(Call::GenVertexArray { id });
        id
    }

    fn bind_vertex_array(&self, vao: Option<VertexArrayId>) {
        self.record(Call::BindVertexArray { vao });
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        components: i32,
        normalized: bool,
        stride: i32,
        offset: usize,
    ) {
        self.record(Call::VertexAttribPointerF32 { index, components, normalized, stride, offset });
    }

    fn enable_vertex_attrib(&self, index: u32) {
        self.record(Call::EnableVertexAttrib { index });
    }

    fn delete_vertex_array(&self, vao: VertexArrayId) {
        self.record(Call::DeleteVertexArray { vao });
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(Call::ClearColor { r, g, b, a });
    }

    fn clear(&self) {
        self.record(Call::Clear);
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(Call::DrawTriangles { first, count });
    }
}
