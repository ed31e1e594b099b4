//! Pickup Point (PVZ) DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use pvz::{PickupPoint, PickupPointDetails, PickupPointFilter};

use super::{ItemResponse, ReceptionResponse};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePickupPointRequest {
    /// `Москва`, `Санкт-Петербург` or `Казань`
    #[schema(example = "Москва")]
    pub city: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PickupPointResponse {
    pub id: Uuid,
    pub registration_date: DateTime<Utc>,
    #[schema(example = "Москва")]
    pub city: String,
}

impl From<PickupPoint> for PickupPointResponse {
    fn from(pickup_point: PickupPoint) -> Self {
        Self {
            id: pickup_point.id,
            registration_date: pickup_point.registered_at,
            city: pickup_point.city.to_string(),
        }
    }
}

/// Query parameters for listing pickup points
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPickupPointsQuery {
    /// Registration time lower bound (inclusive, RFC 3339)
    pub start: Option<DateTime<Utc>>,
    /// Registration time upper bound (inclusive, RFC 3339)
    pub end: Option<DateTime<Utc>>,
    /// Page number, starting at 1 (default: 1)
    pub page: Option<u32>,
    /// Page size (default: 10)
    pub limit: Option<u32>,
}

impl ListPickupPointsQuery {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 10;

    pub fn to_filter(&self) -> PickupPointFilter {
        PickupPointFilter {
            start: self.start,
            end: self.end,
            page: self.page.unwrap_or(Self::DEFAULT_PAGE),
            page_size: self.limit.unwrap_or(Self::DEFAULT_LIMIT),
        }
    }
}

/// Reception with its products in receipt order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReceptionWithItems {
    pub reception: ReceptionResponse,
    pub products: Vec<ItemResponse>,
}

/// Pickup point with all of its receptions
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PickupPointWithReceptions {
    pub pvz: PickupPointResponse,
    pub receptions: Vec<ReceptionWithItems>,
}

impl From<PickupPointDetails> for PickupPointWithReceptions {
    fn from(details: PickupPointDetails) -> Self {
        Self {
            pvz: details.pickup_point.into(),
            receptions: details
                .receptions
                .into_iter()
                .map(|r| ReceptionWithItems {
                    reception: r.reception.into(),
                    products: r.items.into_iter().map(Into::into).collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pvz::City;

    #[test]
    fn test_query_defaults() {
        let query = ListPickupPointsQuery {
            start: None,
            end: None,
            page: None,
            limit: None,
        };
        let filter = query.to_filter();
        assert_eq!(filter.page, 1);
        assert_eq!(filter.page_size, 10);
    }

    #[test]
    fn test_response_uses_canonical_city_and_camel_case() {
        let json = serde_json::to_value(PickupPointResponse::from(PickupPoint::new(City::SaintPetersburg)))
            .unwrap();
        assert_eq!(json["city"], "Санкт-Петербург");
        assert!(json.get("registrationDate").is_some());
    }
}
