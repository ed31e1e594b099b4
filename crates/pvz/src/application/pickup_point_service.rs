//! Pickup Point Application Service (Use Case)
//!
//! Creates pickup points and lists them with nested receptions and items.

use std::sync::Arc;

use crate::domain::{
    Actor, City, DomainError, PickupPoint, PickupPointDetails, PickupPointFilter,
    ReceptionDetails, Role,
};
use crate::ports::{ItemRepository, PickupPointRepository, ReceptionRepository};

/// Application service for pickup point operations
pub struct PickupPointService<P, R, I>
where
    P: PickupPointRepository + ?Sized,
    R: ReceptionRepository + ?Sized,
    I: ItemRepository + ?Sized,
{
    pickup_points: Arc<P>,
    receptions: Arc<R>,
    items: Arc<I>,
}

impl<P, R, I> PickupPointService<P, R, I>
where
    P: PickupPointRepository + ?Sized,
    R: ReceptionRepository + ?Sized,
    I: ItemRepository + ?Sized,
{
    pub fn new(pickup_points: Arc<P>, receptions: Arc<R>, items: Arc<I>) -> Self {
        Self {
            pickup_points,
            receptions,
            items,
        }
    }

    /// Register a pickup point in one of the allowed cities (moderators only)
    pub async fn create(&self, actor: &Actor, city: &str) -> Result<PickupPoint, DomainError> {
        actor.require("create pickup points", &[Role::Moderator])?;
        let city: City = city.parse()?;

        let pickup_point = PickupPoint::new(city);
        let saved = self.pickup_points.save(&pickup_point).await?;

        tracing::info!("Created pickup point {} in {}", saved.id, saved.city);

        Ok(saved)
    }

    /// List a page of pickup points, each resolved with its receptions and items
    pub async fn list(
        &self,
        actor: &Actor,
        filter: &PickupPointFilter,
    ) -> Result<Vec<PickupPointDetails>, DomainError> {
        actor.require("list pickup points", &[Role::Staff, Role::Moderator])?;
        validate_filter(filter)?;

        let pickup_points = self.pickup_points.list(filter).await?;
        let mut results = Vec::with_capacity(pickup_points.len());

        for mut pickup_point in pickup_points {
            let receptions = self.receptions.list_by_pickup_point(pickup_point.id).await?;
            pickup_point.receptions = receptions.iter().map(|r| r.id).collect();

            let mut details = Vec::with_capacity(receptions.len());
            for reception in receptions {
                let items = self.items.list_by_reception(reception.id).await?;
                details.push(ReceptionDetails { reception, items });
            }

            results.push(PickupPointDetails {
                pickup_point,
                receptions: details,
            });
        }

        Ok(results)
    }
}

fn validate_filter(filter: &PickupPointFilter) -> Result<(), DomainError> {
    if filter.page < 1 {
        return Err(DomainError::validation("page must be at least 1"));
    }
    if filter.page_size < 1 {
        return Err(DomainError::validation("page size must be at least 1"));
    }
    if let (Some(start), Some(end)) = (filter.start, filter.end) {
        if start > end {
            return Err(DomainError::validation("start date is after end date"));
        }
    }
    Ok(())
}
