use sea_orm::{
    ColumnTrait, Condition,
    sea_query::{BinOper, Expr, Func, SimpleExpr},
};

use crate::criteria::ListEntriesCriteria;
use crate::entity::Column;

/// Escape LIKE wildcards so the free-text query matches as a literal
/// substring rather than a pattern.
fn escape_like(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Case-insensitive substring match on one column.
///
/// Both operands are folded by the database's own UPPER so they agree on one
/// collation. Uppercasing the needle in Rust instead would fold the full
/// Unicode range while SQLite's UPPER only folds ASCII, and the two sides
/// would disagree on text like `ß`. Renders as
/// `UPPER(col) LIKE UPPER(pattern) ESCAPE '\'`.
fn contains_ci(column: Column, needle: &str) -> SimpleExpr {
    let pattern = SimpleExpr::FunctionCall(Func::upper(Expr::val(format!(
        "%{}%",
        escape_like(needle)
    ))))
    .binary(BinOper::Escape, Expr::val('\\'));
    SimpleExpr::FunctionCall(Func::upper(Expr::col(column))).binary(BinOper::Like, pattern)
}

/// Translates the criteria filters into one AND-ed Sea-ORM condition.
///
/// Absent filters add nothing; both date-range bounds are inclusive; the text
/// query matches title OR body. The condition never carries limit/offset, so
/// the same value serves both the page fetch and the total count.
#[must_use]
pub fn build_filters(criteria: &ListEntriesCriteria) -> Condition {
    let mut condition = Condition::all();

    if let Some(date) = criteria.date {
        condition = condition.add(Column::Date.eq(date));
    }
    if let Some(from) = criteria.date_from {
        condition = condition.add(Column::Date.gte(from));
    }
    if let Some(to) = criteria.date_to {
        condition = condition.add(Column::Date.lte(to));
    }
    if let Some(query) = &criteria.query {
        condition = condition.add(
            Condition::any()
                .add(contains_ci(Column::Title, query))
                .add(contains_ci(Column::Body, query)),
        );
    }

    condition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::ListConstraints;
    use crate::models::ListEntriesParams;
    use crate::normalize::normalize;
    use crate::validate::validate;

    fn criteria_from(params: &ListEntriesParams) -> ListEntriesCriteria {
        let constraints = ListConstraints::default();
        let normalized = normalize(params, &constraints);
        let dates = validate(&normalized, &constraints).unwrap();
        ListEntriesCriteria::new(&normalized, dates)
    }

    #[test]
    fn no_filters_yields_an_empty_condition() {
        let condition = build_filters(&criteria_from(&ListEntriesParams::default()));
        assert_eq!(condition.len(), 0);
    }

    #[test]
    fn each_present_filter_adds_one_predicate() {
        let params = ListEntriesParams {
            date_from: Some("2025-08-01".to_string()),
            date_to: Some("2025-08-31".to_string()),
            query: Some("standup".to_string()),
            ..Default::default()
        };
        let condition = build_filters(&criteria_from(&params));
        assert_eq!(condition.len(), 3);
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }
}
