//! Registry of types whose schema metadata must be retained.
//!
//! A type listed here ends up in the generated document's component schemas
//! whether or not any endpoint refers to it.

use std::any::type_name;

use utoipa::openapi::{Components, RefOr, Schema};
use utoipa::{PartialSchema, ToSchema};

/// A type recorded in the registry.
#[derive(Debug, Clone)]
pub struct RegisteredType {
    /// Schema name as it appears under `components.schemas`.
    pub name: String,
    /// Fully qualified Rust type name.
    pub type_name: &'static str,
    pub schema: RefOr<Schema>,
    /// Schemas the type depends on.
    pub dependencies: Vec<(String, RefOr<Schema>)>,
}

/// Ordered set of registered types, unique by schema name.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<RegisteredType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`TypeRegistry::register`].
    pub fn with<T: ToSchema + 'static>(mut self) -> Self {
        self.register::<T>();
        self
    }

    /// Record `T`. Registering the same schema name twice is a no-op.
    pub fn register<T: ToSchema + 'static>(&mut self) -> &mut Self {
        let name = T::name().into_owned();
        if self.contains(&name) {
            return self;
        }

        let mut dependencies = Vec::new();
        T::schemas(&mut dependencies);

        tracing::debug!(schema = %name, rust_type = type_name::<T>(), "Registered schema type");
        self.types.push(RegisteredType {
            name,
            type_name: type_name::<T>(),
            schema: <T as PartialSchema>::schema(),
            dependencies,
        });
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredType> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Insert every registered schema, and the schemas it depends on, into `components`.
    pub fn apply(&self, components: &mut Components) {
        for registered in &self.types {
            for (name, schema) in &registered.dependencies {
                components
                    .schemas
                    .entry(name.clone())
                    .or_insert_with(|| schema.clone());
            }
            components
                .schemas
                .insert(registered.name.clone(), registered.schema.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PetHealth;

    #[derive(utoipa::ToSchema)]
    #[allow(dead_code)]
    struct Collar {
        size: u8,
        health: PetHealth,
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = TypeRegistry::new();
        registry.register::<PetHealth>().register::<PetHealth>();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names(), vec!["PetHealth"]);
        assert!(registry
            .get("PetHealth")
            .unwrap()
            .type_name
            .ends_with("PetHealth"));
    }

    #[test]
    fn test_apply_inserts_schema() {
        let registry = TypeRegistry::new().with::<PetHealth>();
        let mut components = Components::default();
        registry.apply(&mut components);

        let schema = serde_json::to_value(&components.schemas["PetHealth"]).unwrap();
        assert_eq!(
            schema["enum"],
            serde_json::json!(["VACCINATED", "REQUIRES_VACCINATION"])
        );
    }

    #[test]
    fn test_apply_includes_dependencies() {
        let registry = TypeRegistry::new().with::<Collar>();
        let mut components = Components::default();
        registry.apply(&mut components);

        assert!(components.schemas.contains_key("Collar"));
        assert!(components.schemas.contains_key("PetHealth"));
        assert!(!registry.contains("PetHealth"));
    }

    #[test]
    fn test_debug_output_names_types() {
        let registry = TypeRegistry::new().with::<PetHealth>();
        let rendered = format!("{registry:?}");
        assert!(rendered.contains("PetHealth"));
    }
}
