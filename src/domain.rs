//! Types from the pets domain that the service must describe.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Vaccination status of a pet.
///
/// Only its schema is used here; nothing in the service constructs one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PetHealth {
    Vaccinated,
    RequiresVaccination,
}
