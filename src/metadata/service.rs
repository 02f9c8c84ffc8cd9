//! Service description used for API documentation.

use utoipa::openapi::Info;

/// Title and version published in the API document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMetadata {
    pub title: &'static str,
    pub version: &'static str,
}

/// The metadata this binary is built with.
pub const SERVICE_METADATA: ServiceMetadata = ServiceMetadata {
    title: "pets-api",
    version: "0.2",
};

impl ServiceMetadata {
    /// OpenAPI `info` object for this service.
    pub fn info(&self) -> Info {
        Info::new(self.title, self.version)
    }

    /// File name the generated document is published under, `<title>-<version>.json`.
    pub fn document_name(&self) -> String {
        format!("{}-{}.json", self.title, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_in_values() {
        assert_eq!(SERVICE_METADATA.title, "pets-api");
        assert_eq!(SERVICE_METADATA.version, "0.2");
    }

    #[test]
    fn test_document_name() {
        assert_eq!(SERVICE_METADATA.document_name(), "pets-api-0.2.json");
    }

    #[test]
    fn test_info() {
        let info = SERVICE_METADATA.info();
        assert_eq!(info.title, "pets-api");
        assert_eq!(info.version, "0.2");
    }
}
