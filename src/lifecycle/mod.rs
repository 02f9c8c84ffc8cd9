//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (runtime::http):
//!     Parse args → Load config → Validate → Logging/metrics → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Trigger → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last, after config and observability are ready
//! - Shutdown has timeout: draining stops after the grace period

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
