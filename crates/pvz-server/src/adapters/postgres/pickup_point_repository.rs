//! PostgreSQL implementation of PickupPointRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use pvz::{City, DomainError, PickupPoint, PickupPointFilter, PickupPointRepository};

use super::{corrupt_row, repository_error};

/// PostgreSQL implementation of PickupPointRepository
pub struct PgPickupPointRepository {
    pool: PgPool,
}

impl PgPickupPointRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PickupPointRow {
    id: Uuid,
    registered_at: DateTime<Utc>,
    city: String,
}

impl TryFrom<PickupPointRow> for PickupPoint {
    type Error = DomainError;

    fn try_from(row: PickupPointRow) -> Result<Self, Self::Error> {
        let city: City = row.city.parse().map_err(corrupt_row)?;
        Ok(Self {
            id: row.id,
            registered_at: row.registered_at,
            city,
            receptions: Vec::new(),
        })
    }
}

#[async_trait]
impl PickupPointRepository for PgPickupPointRepository {
    async fn save(&self, pickup_point: &PickupPoint) -> Result<PickupPoint, DomainError> {
        let row = sqlx::query_as::<_, PickupPointRow>(
            r#"
            INSERT INTO pickup_points (id, registered_at, city)
            VALUES ($1, $2, $3)
            RETURNING id, registered_at, city
            "#,
        )
        .bind(pickup_point.id)
        .bind(pickup_point.registered_at)
        .bind(pickup_point.city.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        row.try_into()
    }

    async fn list(&self, filter: &PickupPointFilter) -> Result<Vec<PickupPoint>, DomainError> {
        let offset = i64::try_from(filter.offset())
            .map_err(|_| DomainError::validation("page is out of range"))?;

        let rows = sqlx::query_as::<_, PickupPointRow>(
            r#"
            SELECT id, registered_at, city FROM pickup_points
            WHERE ($1::timestamptz IS NULL OR registered_at >= $1)
              AND ($2::timestamptz IS NULL OR registered_at <= $2)
            ORDER BY registered_at, id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.start)
        .bind(filter.end)
        .bind(i64::from(filter.page_size))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
