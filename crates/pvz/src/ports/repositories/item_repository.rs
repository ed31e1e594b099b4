//! Item Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DomainError, Item};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository interface for received items
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Save a new item
    async fn save(&self, item: &Item) -> Result<Item, DomainError>;

    /// Delete and return the item with the latest receipt time in a reception
    async fn delete_most_recent(&self, reception_id: Uuid) -> Result<Option<Item>, DomainError>;

    /// Items of a reception, ascending by receipt time
    async fn list_by_reception(&self, reception_id: Uuid) -> Result<Vec<Item>, DomainError>;
}
