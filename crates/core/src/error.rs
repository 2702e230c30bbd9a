/// Domain failures raised by the catalog and the team-building logic.
///
/// None of these carry HTTP semantics; the api crate maps them onto
/// status codes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Catalog ids are strings; team ids are rendered from [`crate::types::DbId`].
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Input or reference data breaks an invariant.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Two records claim the same identity.
    #[error("Conflict: {0}")]
    Conflict(String),
}
