//! Criteria-to-query translation: filter conditions, the two-level sort, and
//! pagination arithmetic.
//!
//! Everything here is pure query building; execution lives in
//! [`operations`](crate::operations).

pub mod conditions;
pub mod pagination;
pub mod sort;

pub use conditions::build_filters;
pub use pagination::pages_count;
pub use sort::apply_sort;
