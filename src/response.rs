use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity;

/// Public projection of a stored journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EntryResponse {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::Model> for EntryResponse {
    fn from(model: entity::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            body: model.body,
            date: model.date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// One page of entries plus pagination metadata.
///
/// `total` counts every row matching the filters regardless of paging, and
/// `pages_count` is derived from it, so a page past the end still reports the
/// true totals with an empty `items` list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListEntriesResponse {
    pub items: Vec<EntryResponse>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub pages_count: u64,
}
