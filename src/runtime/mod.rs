//! Application runtimes.
//!
//! The bootstrap hands control to a [`Runtime`] exactly once. Everything
//! observable (argument parsing, configuration, sockets, logging) happens
//! behind this seam.

pub mod args;
pub mod http;

use std::fmt;

use thiserror::Error;

use crate::bootstrap::EntryPoint;
use crate::config::ConfigError;

pub use args::RuntimeArgs;
pub use http::{HttpRuntime, ServerHandle};

/// Something that can take over the process for an entry point.
pub trait Runtime {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run to completion with the raw process arguments.
    fn run(self, entry: EntryPoint, args: Vec<String>) -> Result<(), Self::Error>;
}

/// Errors raised while starting or running the HTTP runtime.
///
/// `Debug` renders the same text as `Display`: this is what a failed `main`
/// shows the operator.
#[derive(Error)]
pub enum RuntimeError {
    #[error("invalid arguments: {0}")]
    Args(#[from] clap::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to build async executor: {0}")]
    Executor(#[source] std::io::Error),

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl fmt::Debug for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
