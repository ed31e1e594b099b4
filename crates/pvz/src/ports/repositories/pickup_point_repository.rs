//! Pickup Point Repository Port

use async_trait::async_trait;

use crate::domain::{DomainError, PickupPoint, PickupPointFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository interface for pickup points
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PickupPointRepository: Send + Sync {
    /// Save a pickup point
    async fn save(&self, pickup_point: &PickupPoint) -> Result<PickupPoint, DomainError>;

    /// List pickup points registered within the filter window,
    /// ordered by (registration time, id) and paginated
    async fn list(&self, filter: &PickupPointFilter) -> Result<Vec<PickupPoint>, DomainError>;
}
