//! Process bootstrap.
//!
//! [`Application`] is the entry type: it carries the service metadata and
//! the schema registrations, and hands the process arguments to a runtime.

use std::any::type_name;

use utoipa::openapi::OpenApi as OpenApiDocument;

use crate::domain::PetHealth;
use crate::metadata::{build_document, ServiceMetadata, TypeRegistry, SERVICE_METADATA};
use crate::runtime::Runtime;

/// Everything a runtime is told about the application it runs.
#[derive(Debug, Clone)]
pub struct EntryPoint {
    /// Rust path of the entry type.
    pub name: &'static str,
    pub metadata: ServiceMetadata,
    pub types: TypeRegistry,
}

impl EntryPoint {
    /// The API document for this entry point.
    pub fn document(&self) -> OpenApiDocument {
        build_document(&self.metadata, &self.types)
    }
}

/// The application entry type.
pub struct Application;

impl Application {
    /// Describe the application: metadata plus the types whose schemas must
    /// be retained even if nothing references them.
    pub fn entry_point() -> EntryPoint {
        EntryPoint {
            name: type_name::<Self>(),
            metadata: SERVICE_METADATA,
            types: TypeRegistry::new().with::<PetHealth>(),
        }
    }

    /// Hand `args` to `runtime` unchanged and return whatever it returns.
    pub fn run<R: Runtime>(runtime: R, args: Vec<String>) -> Result<(), R::Error> {
        runtime.run(Self::entry_point(), args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_point_describes_application() {
        let entry = Application::entry_point();
        assert!(entry.name.ends_with("Application"));
        assert_eq!(entry.metadata, SERVICE_METADATA);
        assert!(entry.types.contains("PetHealth"));
    }
}
