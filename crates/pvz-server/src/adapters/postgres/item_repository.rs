//! PostgreSQL implementation of ItemRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use pvz::{DomainError, Item, ItemRepository, ItemType};

use super::{corrupt_row, missing_parent, repository_error};

/// PostgreSQL implementation of ItemRepository
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: Uuid,
    reception_id: Uuid,
    item_type: String,
    received_at: DateTime<Utc>,
}

impl TryFrom<ItemRow> for Item {
    type Error = DomainError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        let item_type: ItemType = row.item_type.parse().map_err(corrupt_row)?;
        Ok(Self {
            id: row.id,
            reception_id: row.reception_id,
            item_type,
            received_at: row.received_at,
        })
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn save(&self, item: &Item) -> Result<Item, DomainError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items (id, reception_id, item_type, received_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, reception_id, item_type, received_at
            "#,
        )
        .bind(item.id)
        .bind(item.reception_id)
        .bind(item.item_type.as_str())
        .bind(item.received_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| missing_parent(e, "Reception", item.reception_id))?;

        row.try_into()
    }

    async fn delete_most_recent(&self, reception_id: Uuid) -> Result<Option<Item>, DomainError> {
        // A concurrent removal skips the row locked by another and takes the next-latest one
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            DELETE FROM items
            WHERE id = (
                SELECT id FROM items
                WHERE reception_id = $1
                ORDER BY received_at DESC, id DESC
                LIMIT 1
                FOR UPDATE SKIP LOCKED
            )
            RETURNING id, reception_id, item_type, received_at
            "#,
        )
        .bind(reception_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        row.map(TryInto::try_into).transpose()
    }

    async fn list_by_reception(&self, reception_id: Uuid) -> Result<Vec<Item>, DomainError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, reception_id, item_type, received_at FROM items
            WHERE reception_id = $1
            ORDER BY received_at, id
            "#,
        )
        .bind(reception_id)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
