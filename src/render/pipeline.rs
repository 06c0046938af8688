use crate::gl::{GlApi, GlResult, ProgramId, ShaderId, ShaderStage};

/// A linked vertex + fragment program.
///
/// Compile and link diagnostics are surfaced through the `GlApi` results and
/// logged, but they do not abort creation: the demo keeps the original
/// behavior of drawing with whatever program object came out of the link.
/// Only object allocation failure is propagated as `Err`.
pub struct ShaderPipeline {
    program: ProgramId,
}

impl ShaderPipeline {
    pub fn create<G: GlApi>(gl: &G, vertex_src: &str, fragment_src: &str) -> GlResult<Self> {
        let vs = compile_stage(gl, ShaderStage::Vertex, vertex_src)?;
        let fs = compile_stage(gl, ShaderStage::Fragment, fragment_src)?;

        let program = gl.create_program()?;
        gl.attach_shader(program, vs);
        gl.attach_shader(program, fs);
        if let Err(err) = gl.link_program(program) {
            log::warn!("shader program link failed; drawing will continue with program {program:?}: {err}");
        }

        // The stage objects are no longer needed once attached and linked.
        gl.delete_shader(vs);
        gl.delete_shader(fs);

        Ok(Self { program })
    }

    #[inline]
    pub fn program(&self) -> ProgramId {
        self.program
    }

    pub fn destroy<G: GlApi>(&self, gl: &G) {
        gl.delete_program(self.program);
    }
}

fn compile_stage<G: GlApi>(gl: &G, stage: ShaderStage, source: &str) -> GlResult<ShaderId> {
    let shader = gl.create_shader(stage)?;
    gl.shader_source(shader, source);
    if let Err(err) = gl.compile_shader(shader) {
        log::warn!("{stage:?} shader failed to compile: {err}");
    }
    Ok(shader)
}
