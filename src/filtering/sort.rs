use sea_orm::sea_query::Order;
use sea_orm::{QueryOrder, Select};

use crate::criteria::{SortDirection, SortField, SortKey};
use crate::entity::{Column, Entity};

/// Maps an allow-listed sort field onto its entity column. Total match, so a
/// new field cannot be added without deciding its column here.
#[must_use]
pub fn order_column(field: SortField) -> Column {
    match field {
        SortField::Date => Column::Date,
        SortField::Title => Column::Title,
        SortField::CreatedAt => Column::CreatedAt,
        SortField::UpdatedAt => Column::UpdatedAt,
    }
}

#[must_use]
pub fn order_direction(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

/// Applies the sort descriptor in order: the requested primary first, then the
/// fixed `created_at DESC` tiebreaker.
#[must_use]
pub fn apply_sort(mut select: Select<Entity>, sort: &[SortKey]) -> Select<Entity> {
    for key in sort {
        select = select.order_by(order_column(key.field), order_direction(key.direction));
    }
    select
}
