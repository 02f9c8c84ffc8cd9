//! API document generation.

use utoipa::openapi::OpenApi as OpenApiDocument;
use utoipa::OpenApi;

use crate::http::handlers::{self, HealthResponse};
use crate::metadata::registry::TypeRegistry;
use crate::metadata::service::ServiceMetadata;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::health),
    components(schemas(HealthResponse)),
    tags((name = "management", description = "Service management endpoints"))
)]
struct ManagementApi;

/// Build the API document for `metadata`, including every schema in `registry`.
pub fn build_document(metadata: &ServiceMetadata, registry: &TypeRegistry) -> OpenApiDocument {
    let mut document = ManagementApi::openapi();
    document.info = metadata.info();
    registry.apply(document.components.get_or_insert_with(Default::default));
    document
}
