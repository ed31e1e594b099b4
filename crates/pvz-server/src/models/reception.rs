//! Reception and Item (product) DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use pvz::{Item, Reception};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReceptionRequest {
    pub pvz_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceptionResponse {
    pub id: Uuid,
    pub date_time: DateTime<Utc>,
    pub pvz_id: Uuid,
    /// `in_progress` or `close`
    #[schema(example = "in_progress")]
    pub status: String,
}

impl From<Reception> for ReceptionResponse {
    fn from(reception: Reception) -> Self {
        Self {
            id: reception.id,
            date_time: reception.date_time,
            pvz_id: reception.pickup_point_id,
            status: reception.status.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub pvz_id: Uuid,
    /// `электроника`, `одежда` or `обувь`
    #[serde(rename = "type")]
    #[schema(example = "электроника")]
    pub item_type: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub item_type: String,
    pub reception_id: Uuid,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            received_at: item.received_at,
            item_type: item.item_type.to_string(),
            reception_id: item.reception_id,
        }
    }
}
