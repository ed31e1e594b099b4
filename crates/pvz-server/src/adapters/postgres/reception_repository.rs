//! PostgreSQL implementation of ReceptionRepository
//!
//! The one-open-reception rule is enforced by the partial unique index
//! `receptions_one_open_per_pickup_point`; a violation is reported as
//! `ReceptionAlreadyOpen`.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use pvz::{DomainError, Reception, ReceptionRepository, ReceptionStatus};

use super::{corrupt_row, is_unique_violation, missing_parent, repository_error};

/// PostgreSQL implementation of ReceptionRepository
pub struct PgReceptionRepository {
    pool: PgPool,
}

impl PgReceptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn item_ids(&self, reception_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM items WHERE reception_id = $1 ORDER BY received_at, id",
        )
        .bind(reception_id)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)
    }
}

#[derive(sqlx::FromRow)]
struct ReceptionRow {
    id: Uuid,
    pickup_point_id: Uuid,
    status: String,
    date_time: DateTime<Utc>,
}

impl ReceptionRow {
    fn into_reception(self, items: Vec<Uuid>) -> Result<Reception, DomainError> {
        let status: ReceptionStatus = self.status.parse().map_err(corrupt_row)?;
        Ok(Reception {
            id: self.id,
            pickup_point_id: self.pickup_point_id,
            items,
            status,
            date_time: self.date_time,
        })
    }
}

#[async_trait]
impl ReceptionRepository for PgReceptionRepository {
    async fn save(&self, reception: &Reception) -> Result<Reception, DomainError> {
        let row = sqlx::query_as::<_, ReceptionRow>(
            r#"
            INSERT INTO receptions (id, pickup_point_id, status, date_time)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET status = EXCLUDED.status, date_time = EXCLUDED.date_time
            RETURNING id, pickup_point_id, status, date_time
            "#,
        )
        .bind(reception.id)
        .bind(reception.pickup_point_id)
        .bind(reception.status.as_str())
        .bind(reception.date_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::ReceptionAlreadyOpen(reception.pickup_point_id)
            } else {
                missing_parent(e, "PickupPoint", reception.pickup_point_id)
            }
        })?;

        let items = self.item_ids(row.id).await?;
        row.into_reception(items)
    }

    async fn find_active(&self, pickup_point_id: Uuid) -> Result<Option<Reception>, DomainError> {
        let row = sqlx::query_as::<_, ReceptionRow>(
            r#"
            SELECT id, pickup_point_id, status, date_time FROM receptions
            WHERE pickup_point_id = $1 AND status = 'in_progress'
            "#,
        )
        .bind(pickup_point_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        match row {
            Some(row) => {
                let items = self.item_ids(row.id).await?;
                row.into_reception(items).map(Some)
            }
            None => Ok(None),
        }
    }

    async fn list_by_pickup_point(
        &self,
        pickup_point_id: Uuid,
    ) -> Result<Vec<Reception>, DomainError> {
        let rows = sqlx::query_as::<_, ReceptionRow>(
            r#"
            SELECT id, pickup_point_id, status, date_time FROM receptions
            WHERE pickup_point_id = $1
            ORDER BY date_time, id
            "#,
        )
        .bind(pickup_point_id)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        let pairs = sqlx::query_as::<_, (Uuid, Uuid)>(
            r#"
            SELECT i.reception_id, i.id FROM items i
            JOIN receptions r ON r.id = i.reception_id
            WHERE r.pickup_point_id = $1
            ORDER BY i.received_at, i.id
            "#,
        )
        .bind(pickup_point_id)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        let mut items: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for (reception_id, item_id) in pairs {
            items.entry(reception_id).or_default().push(item_id);
        }

        rows.into_iter()
            .map(|row| {
                let ids = items.remove(&row.id).unwrap_or_default();
                row.into_reception(ids)
            })
            .collect()
    }
}
