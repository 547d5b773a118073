use crate::constraints::ListConstraints;
use crate::criteria::{SortDirection, SortField};
use crate::models::ListEntriesParams;

/// Canonical, fully defaulted parameter set produced by [`normalize`].
///
/// Paging and sort values are already admissible here; the date and query
/// strings still await validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedParams {
    pub page: u64,
    pub per_page: u64,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub date: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub query: Option<String>,
}

/// Applies defaults and clamps raw parameters into an admissible shape.
///
/// This stage never rejects anything: missing values get defaults, paging is
/// clamped to the configured bounds, sort values outside the vocabulary fall
/// back to the defaults, empty date strings become `None`, and the query is
/// trimmed (whitespace-only becomes `None`). Rules that clamping cannot fix
/// belong to [`validate`](crate::validate::validate).
#[must_use]
pub fn normalize(params: &ListEntriesParams, constraints: &ListConstraints) -> NormalizedParams {
    let page = params
        .page
        .map_or(constraints.page_min, |p| p.max(constraints.page_min));
    let per_page = params.per_page.map_or(constraints.per_page_default, |p| {
        p.clamp(constraints.per_page_min, constraints.per_page_max)
    });

    // The snake_case key wins when both spellings are sent.
    let sort_field = params
        .sort_field
        .as_deref()
        .or(params.sort.as_deref())
        .and_then(SortField::parse)
        .unwrap_or(constraints.sort_field_default);
    let sort_direction = params
        .sort_dir
        .as_deref()
        .or(params.direction.as_deref())
        .and_then(SortDirection::parse)
        .unwrap_or(constraints.sort_direction_default);

    NormalizedParams {
        page,
        per_page,
        sort_field,
        sort_direction,
        date: non_empty(params.date.as_deref()),
        date_from: non_empty(params.date_from.as_deref()),
        date_to: non_empty(params.date_to.as_deref()),
        query: trimmed(params.query.as_deref()),
    }
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(str::to_owned)
}

fn trimmed(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
