//! Pickup Point (PVZ)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Item, Reception};
use crate::domain::City;

/// Pickup point - created by a moderator, never mutated afterwards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PickupPoint {
    pub id: Uuid,
    pub registered_at: DateTime<Utc>,
    pub city: City,
    /// Reception ids in receipt order (informational, not authoritative)
    pub receptions: Vec<Uuid>,
}

impl PickupPoint {
    pub fn new(city: City) -> Self {
        Self {
            id: Uuid::new_v4(),
            registered_at: Utc::now(),
            city,
            receptions: Vec::new(),
        }
    }
}

/// Reception together with its items, ordered by receipt time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceptionDetails {
    pub reception: Reception,
    pub items: Vec<Item>,
}

/// Pickup point resolved with all of its receptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupPointDetails {
    pub pickup_point: PickupPoint,
    pub receptions: Vec<ReceptionDetails>,
}

/// Registration-time window and page for listing pickup points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupPointFilter {
    /// Inclusive lower bound
    pub start: Option<DateTime<Utc>>,
    /// Inclusive upper bound
    pub end: Option<DateTime<Utc>>,
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
}

impl PickupPointFilter {
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    pub fn contains(&self, registered_at: DateTime<Utc>) -> bool {
        self.start.map_or(true, |start| registered_at >= start)
            && self.end.map_or(true, |end| registered_at <= end)
    }
}
