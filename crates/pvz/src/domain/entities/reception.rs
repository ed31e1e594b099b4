//! Reception - A batch of goods accepted at a pickup point
//!
//! State machine: `InProgress` -> `Closed`. Nothing leaves `Closed`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DomainError, ReceptionStatus};

/// Reception of goods
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reception {
    pub id: Uuid,
    pub pickup_point_id: Uuid,
    /// Item ids in receipt order
    pub items: Vec<Uuid>,
    pub status: ReceptionStatus,
    /// Opening time, replaced by the closing time on close
    pub date_time: DateTime<Utc>,
}

impl Reception {
    /// Open a new, empty reception for a pickup point
    pub fn open(pickup_point_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            pickup_point_id,
            items: Vec::new(),
            status: ReceptionStatus::InProgress,
            date_time: Utc::now(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == ReceptionStatus::InProgress
    }

    /// A closed reception is reported exactly like a missing one.
    pub fn ensure_open(&self) -> Result<(), DomainError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(DomainError::NoOpenReception(self.pickup_point_id))
        }
    }

    pub fn add_item(&mut self, item_id: Uuid) -> Result<(), DomainError> {
        self.ensure_open()?;
        self.items.push(item_id);
        Ok(())
    }

    /// Pop the most recently added item id (LIFO)
    pub fn remove_last_item(&mut self) -> Result<Uuid, DomainError> {
        self.ensure_open()?;
        self.items.pop().ok_or(DomainError::NoItemsToRemove(self.id))
    }

    pub fn close(&mut self, closed_at: DateTime<Utc>) -> Result<(), DomainError> {
        self.ensure_open()?;
        self.status = ReceptionStatus::Closed;
        self.date_time = closed_at;
        Ok(())
    }
}
