//! Windowing runtime.
//!
//! Owns the GLFW instance and window, and exposes the three operations the
//! frame loop needs through [`Surface`] so the loop can be driven by a fake
//! surface in tests.

mod runtime;

pub use runtime::WindowRuntime;

/// The frame loop's view of the window.
pub trait Surface {
    /// True once the window has been asked to close.
    fn should_close(&self) -> bool;
    /// Swaps back and front buffers.
    fn present(&mut self);
    /// Dispatches pending input/window events; non-blocking.
    fn pump_events(&mut self);
}
