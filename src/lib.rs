//! Journal entry listing built on Axum and Sea-ORM.
//!
//! Raw query parameters are normalized (defaults and clamping), validated
//! (strict date and query-length rules), frozen into an immutable
//! [`ListEntriesCriteria`], and executed against the `entries` table with a
//! stable two-level sort and consistent pagination metadata.

pub mod constraints;
pub mod criteria;
pub mod entity;
pub mod errors;
pub mod filtering;
pub mod models;
pub mod normalize;
pub mod operations;
pub mod response;
pub mod routes;
pub mod validate;

pub use constraints::ListConstraints;
pub use criteria::{ListEntriesCriteria, SortDirection, SortField, SortKey};
pub use errors::ApiError;
pub use models::ListEntriesParams;
pub use normalize::{NormalizedParams, normalize};
pub use operations::list_entries;
pub use response::{EntryResponse, ListEntriesResponse};
pub use routes::router;
pub use validate::{ListRejection, ValidDates, validate};
