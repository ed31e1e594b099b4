//! Reception Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DomainError, Reception};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository interface for receptions
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReceptionRepository: Send + Sync {
    /// Save a reception (insert or update).
    ///
    /// Implementations enforce the one-open-reception-per-pickup-point
    /// invariant atomically and report a violation as
    /// `DomainError::ReceptionAlreadyOpen`. An unknown pickup point yields
    /// `DomainError::NotFound`.
    async fn save(&self, reception: &Reception) -> Result<Reception, DomainError>;

    /// Find the open reception of a pickup point, with its item ids
    async fn find_active(&self, pickup_point_id: Uuid) -> Result<Option<Reception>, DomainError>;

    /// All receptions of a pickup point, oldest first
    async fn list_by_pickup_point(
        &self,
        pickup_point_id: Uuid,
    ) -> Result<Vec<Reception>, DomainError>;
}
