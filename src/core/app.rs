use anyhow::Result;

use crate::config::AppConfig;
use crate::gl::GlApi;
use crate::render::{FrameRenderer, Scene};
use crate::time::FrameClock;
use crate::window::{Surface, WindowRuntime};

/// Runs the demo to completion: window + context setup, GPU resource
/// creation, the frame loop, then teardown in reverse order.
///
/// Returns `Err` only for the window path; GL-level diagnostics are logged
/// and execution continues.
pub fn run(config: AppConfig) -> Result<()> {
    let mut runtime = WindowRuntime::create(&config.window)?;
    let gl = runtime.load_gl();
    run_with(&gl, &mut runtime, &config)
}

/// Everything after the window exists: viewport, scene creation, startup
/// clear + present, the frame loop, teardown.
pub fn run_with<G, S>(gl: &G, surface: &mut S, config: &AppConfig) -> Result<()>
where
    G: GlApi,
    S: Surface,
{
    gl.viewport(0, 0, config.window.width as i32, config.window.height as i32);

    let scene = Scene::create(gl, &config.scene)?;

    // Startup clear: visible only until the first loop frame replaces it.
    let c = config.clear.startup;
    gl.clear_color(c.r, c.g, c.b, c.a);
    gl.clear();
    surface.present();

    let renderer = FrameRenderer::new(config.clear.frame);
    run_loop(gl, surface, &renderer, &scene);

    scene.destroy(gl);
    log::debug!("shutdown complete");
    Ok(())
}

/// Redraws until the surface reports close.
///
/// Each iteration: one rendered frame, one present, one non-blocking event
/// poll. The poll is the loop's only yield point.
pub fn run_loop<G, S>(gl: &G, surface: &mut S, renderer: &FrameRenderer, scene: &Scene)
where
    G: GlApi,
    S: Surface,
{
    let mut clock = FrameClock::new();

    while !surface.should_close() {
        renderer.render(gl, scene);
        surface.present();
        surface.pump_events();

        let ft = clock.tick();
        if ft.frame_index % 300 == 0 {
            log::trace!("frame {} dt {:.4}s", ft.frame_index, ft.dt);
        }
    }

    log::debug!("close requested, leaving frame loop");
}
