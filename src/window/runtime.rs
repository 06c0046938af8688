use anyhow::{Context as _, Result};
use glfw::{
    fail_on_errors, Context as _, Glfw, GlfwReceiver, OpenGlProfileHint, PWindow, WindowHint,
    WindowMode,
};

use crate::config::WindowConfig;
use crate::gl::LoadedGl;

use super::Surface;

/// GLFW instance + window + current GL context.
///
/// Creation is the only fatal failure path in the program; everything after
/// a successful `create` logs and carries on.
pub struct WindowRuntime {
    glfw: Glfw,
    window: PWindow,
    // Kept alive for the window's lifetime; this demo subscribes to no events.
    _events: GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl WindowRuntime {
    /// Initializes GLFW, requests a core-profile context at the configured
    /// version and opens the window with its context made current.
    pub fn create(config: &WindowConfig) -> Result<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors!())
            .context("failed to initialize GLFW")?;

        let (major, minor) = config.context_version;
        glfw.window_hint(WindowHint::ContextVersion(major, minor));
        glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, WindowMode::Windowed)
            .context("failed to create GLFW window")?;

        window.make_current();

        log::debug!(
            "window created: {}x{} \"{}\", GL {}.{} core",
            config.width,
            config.height,
            config.title,
            major,
            minor
        );

        Ok(Self { glfw, window, _events: events })
    }

    /// Loads GL function pointers through this window's context.
    pub fn load_gl(&mut self) -> LoadedGl {
        LoadedGl::load(|symbol| self.window.get_proc_address(symbol) as *const _)
    }
}

impl Surface for WindowRuntime {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn present(&mut self) {
        self.window.swap_buffers();
    }

    fn pump_events(&mut self) {
        self.glfw.poll_events();
    }
}
