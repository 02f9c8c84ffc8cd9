//! Compiled-in service metadata and schema registration.
//!
//! # Data Flow
//! ```text
//! SERVICE_METADATA (service.rs) ──┐
//!                                 ├─→ openapi.rs (build_document) → OpenApi
//! TypeRegistry (registry.rs) ─────┘
//! ```
//!
//! # Design Decisions
//! - Metadata is a plain constant, not derived from attributes
//! - Types whose schemas must survive are listed explicitly at startup

pub mod openapi;
pub mod registry;
pub mod service;

pub use openapi::build_document;
pub use registry::{RegisteredType, TypeRegistry};
pub use service::{ServiceMetadata, SERVICE_METADATA};
