use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};

use crate::criteria::ListEntriesCriteria;
use crate::entity::Entity;
use crate::filtering::{apply_sort, build_filters, pages_count};
use crate::response::{EntryResponse, ListEntriesResponse};

/// Runs one list query: filter, count, sort, paginate, project.
///
/// The total is counted on the filtered set before limit/offset are applied,
/// so a page past the end comes back as empty `items` with truthful metadata
/// rather than an error.
///
/// # Errors
///
/// Storage failures propagate unchanged as [`DbErr`]; an unreachable database
/// is never reported as an empty result.
pub async fn list_entries(
    db: &DatabaseConnection,
    criteria: &ListEntriesCriteria,
) -> Result<ListEntriesResponse, DbErr> {
    let filtered = Entity::find().filter(build_filters(criteria));
    let total = filtered.clone().count(db).await?;

    let models = apply_sort(filtered, criteria.sort())
        .offset(criteria.offset())
        .limit(criteria.per_page)
        .all(db)
        .await?;

    Ok(ListEntriesResponse {
        items: models.into_iter().map(EntryResponse::from).collect(),
        page: criteria.page,
        per_page: criteria.per_page,
        total,
        pages_count: pages_count(total, criteria.per_page),
    })
}
