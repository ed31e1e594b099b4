//! Item - A single accepted good

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ItemType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: Uuid,
    pub reception_id: Uuid,
    pub item_type: ItemType,
    /// Receipt time; determines LIFO order within a reception
    pub received_at: DateTime<Utc>,
}

impl Item {
    pub fn new(reception_id: Uuid, item_type: ItemType) -> Self {
        Self {
            id: Uuid::new_v4(),
            reception_id,
            item_type,
            received_at: Utc::now(),
        }
    }
}
