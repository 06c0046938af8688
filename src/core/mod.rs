//! Program lifecycle: setup, frame loop, teardown.

mod app;

pub use app::{run, run_loop, run_with};
