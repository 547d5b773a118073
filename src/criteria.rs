use chrono::NaiveDate;

use crate::normalize::NormalizedParams;
use crate::validate::ValidDates;

/// Columns an entry listing may be sorted by.
///
/// This enum is the allow-list: a sort request that does not parse into a
/// variant falls back to the default during normalization, so no free-form
/// field name ever reaches the query builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Title,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Parses a requested sort field, accepting snake_case and camelCase
    /// spellings. Returns `None` for anything outside the vocabulary.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "date" => Some(Self::Date),
            "title" => Some(Self::Title),
            "created_at" | "createdAt" => Some(Self::CreatedAt),
            "updated_at" | "updatedAt" => Some(Self::UpdatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses `ASC`/`DESC` case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// One level of the sort descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Immutable description of one list query: filters, sort, and paging.
///
/// Built once per request from normalized and validated input, then handed to
/// [`list_entries`](crate::operations::list_entries) and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntriesCriteria {
    pub page: u64,
    pub per_page: u64,
    /// Exact-match date filter.
    pub date: Option<NaiveDate>,
    /// Inclusive range start.
    pub date_from: Option<NaiveDate>,
    /// Inclusive range end.
    pub date_to: Option<NaiveDate>,
    /// Case-insensitive substring matched against title or body.
    pub query: Option<String>,
    sort: [SortKey; 2],
}

impl ListEntriesCriteria {
    /// Freezes normalized parameters together with their validated dates.
    ///
    /// The secondary sort key is always `created_at DESC`, independent of the
    /// requested primary. Ties on the primary key would otherwise leave the
    /// row order unspecified and let adjacent pages skip or repeat rows. When
    /// the primary is itself `created_at` the descriptor simply carries the
    /// field twice.
    #[must_use]
    pub fn new(params: &NormalizedParams, dates: ValidDates) -> Self {
        Self {
            page: params.page,
            per_page: params.per_page,
            date: dates.date,
            date_from: dates.date_from,
            date_to: dates.date_to,
            query: params.query.clone(),
            sort: [
                SortKey {
                    field: params.sort_field,
                    direction: params.sort_direction,
                },
                SortKey {
                    field: SortField::CreatedAt,
                    direction: SortDirection::Desc,
                },
            ],
        }
    }

    /// The two-level sort descriptor, primary first.
    #[must_use]
    pub fn sort(&self) -> &[SortKey; 2] {
        &self.sort
    }

    /// Row offset of the requested page (pages are 1-based).
    ///
    /// Saturates instead of overflowing: the page number has no upper bound,
    /// and a page past the end must come back as an empty page, not a panic
    /// or a wrapped-around offset.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::ListConstraints;
    use crate::models::ListEntriesParams;
    use crate::normalize::normalize;

    fn criteria_for(params: ListEntriesParams) -> ListEntriesCriteria {
        let constraints = ListConstraints::default();
        let normalized = normalize(&params, &constraints);
        ListEntriesCriteria::new(&normalized, ValidDates::default())
    }

    #[test]
    fn secondary_sort_is_always_created_at_desc() {
        let criteria = criteria_for(ListEntriesParams {
            sort_field: Some("title".to_string()),
            sort_dir: Some("ASC".to_string()),
            ..Default::default()
        });

        assert_eq!(criteria.sort()[0].field, SortField::Title);
        assert_eq!(criteria.sort()[0].direction, SortDirection::Asc);
        assert_eq!(criteria.sort()[1].field, SortField::CreatedAt);
        assert_eq!(criteria.sort()[1].direction, SortDirection::Desc);
    }

    #[test]
    fn created_at_primary_keeps_fixed_secondary() {
        let criteria = criteria_for(ListEntriesParams {
            sort_field: Some("created_at".to_string()),
            sort_dir: Some("ASC".to_string()),
            ..Default::default()
        });

        // Same field on both levels is fine; the directions may differ.
        assert_eq!(criteria.sort()[0].field, SortField::CreatedAt);
        assert_eq!(criteria.sort()[0].direction, SortDirection::Asc);
        assert_eq!(criteria.sort()[1].field, SortField::CreatedAt);
        assert_eq!(criteria.sort()[1].direction, SortDirection::Desc);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        let criteria = criteria_for(ListEntriesParams {
            page: Some(u64::MAX),
            per_page: Some(100),
            ..Default::default()
        });
        // A saturated offset lands past every row, so the page is empty.
        assert_eq!(criteria.offset(), u64::MAX);
    }

    #[test]
    fn offset_is_zero_based_from_page() {
        let criteria = criteria_for(ListEntriesParams {
            page: Some(3),
            per_page: Some(20),
            ..Default::default()
        });
        assert_eq!(criteria.offset(), 40);
    }

    #[test]
    fn sort_field_parse_accepts_both_spellings() {
        assert_eq!(SortField::parse("created_at"), Some(SortField::CreatedAt));
        assert_eq!(SortField::parse("createdAt"), Some(SortField::CreatedAt));
        assert_eq!(SortField::parse("updatedAt"), Some(SortField::UpdatedAt));
        assert_eq!(SortField::parse("body"), None);
        assert_eq!(SortField::parse(""), None);
    }

    #[test]
    fn sort_direction_parse_is_case_insensitive() {
        assert_eq!(SortDirection::parse("asc"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse("DESC"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("sideways"), None);
    }
}
