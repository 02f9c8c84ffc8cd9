//! pets-api service library.
//!
//! # Architecture Overview
//!
//! ```text
//!   main ──▶ bootstrap::Application ──▶ runtime::Runtime (HttpRuntime)
//!                 │                          │
//!                 │ EntryPoint               ├─ config     (TOML + overrides)
//!                 │  ├─ metadata             ├─ observability (logs, metrics)
//!                 │  └─ type registry        ├─ http       (router, middleware)
//!                 ▼                          └─ lifecycle  (signals, shutdown)
//!           metadata::build_document ──▶ /swagger/pets-api-0.2.json
//! ```

pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod http;
pub mod lifecycle;
pub mod metadata;
pub mod observability;
pub mod runtime;

pub use bootstrap::{Application, EntryPoint};
pub use config::AppConfig;
pub use lifecycle::Shutdown;
pub use metadata::{ServiceMetadata, TypeRegistry, SERVICE_METADATA};
pub use runtime::{HttpRuntime, Runtime, RuntimeError, ServerHandle};
