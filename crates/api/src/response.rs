use serde::Serialize;

/// The `{ "data": ... }` envelope every successful response uses.
///
/// Catalog and team lookups wrap an `Option<T>`, so a missing record
/// serializes as `{ "data": null }`.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
