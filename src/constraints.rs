use crate::criteria::{SortDirection, SortField};

/// Limits and defaults applied while normalizing and validating list queries.
///
/// Passed by reference into [`normalize`](crate::normalize::normalize) and
/// [`validate`](crate::validate::validate) rather than living as global state,
/// so both stay testable with non-default bounds. The allowed sort vocabulary
/// is the [`SortField`] enum itself.
#[derive(Debug, Clone)]
pub struct ListConstraints {
    /// Lowest admissible page number (pages are 1-based).
    pub page_min: u64,
    pub per_page_min: u64,
    pub per_page_max: u64,
    pub per_page_default: u64,
    /// Maximum free-text query length, in characters.
    pub query_max: usize,
    pub sort_field_default: SortField,
    pub sort_direction_default: SortDirection,
}

impl Default for ListConstraints {
    fn default() -> Self {
        Self {
            page_min: 1,
            per_page_min: 1,
            per_page_max: 100,
            per_page_default: 10,
            query_max: 255,
            sort_field_default: SortField::Date,
            sort_direction_default: SortDirection::Desc,
        }
    }
}
