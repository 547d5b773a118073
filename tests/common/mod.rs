use axum::Router;
use chrono::{DateTime, NaiveDate, Utc};
use daybook::{ListConstraints, entity, router};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, DbErr, Set};
use sea_orm_migration::prelude::*;
use uuid::Uuid;

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    // Run migrations
    Migrator::up(&db, None).await?;

    Ok(db)
}

pub fn setup_test_app(db: DatabaseConnection) -> Router {
    router(db, ListConstraints::default())
}

/// Insert one entry with explicit timestamps so sort order is predictable.
pub async fn seed_entry(
    db: &DatabaseConnection,
    title: &str,
    body: &str,
    date: &str,
    created_at: &str,
) -> Result<entity::Model, DbErr> {
    let created: DateTime<Utc> = created_at.parse().expect("valid RFC 3339 timestamp");
    entity::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_owned()),
        body: Set(body.to_owned()),
        date: Set(date.parse::<NaiveDate>().expect("valid date")),
        created_at: Set(created),
        updated_at: Set(created),
    }
    .insert(db)
    .await
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateEntriesTable)]
    }
}

pub struct CreateEntriesTable;

#[async_trait::async_trait]
impl MigrationName for CreateEntriesTable {
    fn name(&self) -> &'static str {
        "m20250801_000001_create_entries_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateEntriesTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(EntriesTable)
            .if_not_exists()
            .col(
                ColumnDef::new(EntriesColumn::Id)
                    .uuid()
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(EntriesColumn::Title).string().not_null())
            .col(ColumnDef::new(EntriesColumn::Body).text().not_null())
            .col(ColumnDef::new(EntriesColumn::Date).date().not_null())
            .col(
                ColumnDef::new(EntriesColumn::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(
                ColumnDef::new(EntriesColumn::UpdatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .to_owned();

        manager.create_table(table).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EntriesTable).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum EntriesColumn {
    Id,
    Title,
    Body,
    Date,
    CreatedAt,
    UpdatedAt,
}

impl Iden for EntriesColumn {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(
            s,
            "{}",
            match self {
                Self::Id => "id",
                Self::Title => "title",
                Self::Body => "body",
                Self::Date => "date",
                Self::CreatedAt => "created_at",
                Self::UpdatedAt => "updated_at",
            }
        )
        .unwrap();
    }
}

#[derive(Debug)]
pub struct EntriesTable;

impl Iden for EntriesTable {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "entries").unwrap();
    }
}
