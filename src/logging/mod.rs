//! Logger initialization.
//!
//! Keeps the crate on the standard `log` facade; `env_logger` is the only
//! backend wired up here.

mod init;

pub use init::init_logging;
