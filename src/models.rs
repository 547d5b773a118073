use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Raw query parameters for listing journal entries.
///
/// Everything is optional and untrusted: missing or out-of-range paging is
/// defaulted/clamped, unknown sort values fall back to the defaults, and the
/// date/query filters are checked by the validator. Both snake_case and
/// camelCase key spellings are accepted.
///
/// # Examples
/// ```text
/// GET /entries?page=2&per_page=20
/// GET /entries?sort_field=title&sort_dir=ASC
/// GET /entries?date_from=2025-08-01&date_to=2025-08-31
/// GET /entries?query=standup
/// ```
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListEntriesParams {
    /// 1-based page number.
    #[param(example = 1)]
    pub page: Option<u64>,
    /// Items per page, clamped to the configured bounds.
    #[serde(alias = "perPage")]
    #[param(example = 10)]
    pub per_page: Option<u64>,
    /// Primary sort field: `date`, `title`, `created_at`, or `updated_at`.
    #[serde(alias = "sortField")]
    #[param(example = "date")]
    pub sort_field: Option<String>,
    /// Alternate spelling of `sort_field`; ignored when both are present.
    pub sort: Option<String>,
    /// Sort direction, `ASC` or `DESC` (case-insensitive).
    #[serde(alias = "sortDir")]
    #[param(example = "DESC")]
    pub sort_dir: Option<String>,
    /// Alternate spelling of `sort_dir`; ignored when both are present.
    pub direction: Option<String>,
    /// Exact-match date filter, `YYYY-MM-DD`.
    #[param(example = "2025-08-15")]
    pub date: Option<String>,
    /// Inclusive range start, `YYYY-MM-DD`.
    #[serde(alias = "dateFrom")]
    #[param(example = "2025-08-01")]
    pub date_from: Option<String>,
    /// Inclusive range end, `YYYY-MM-DD`.
    #[serde(alias = "dateTo")]
    #[param(example = "2025-08-31")]
    pub date_to: Option<String>,
    /// Free-text search, matched case-insensitively as a substring of the
    /// title or body.
    #[param(example = "standup notes")]
    pub query: Option<String>,
}
