//! Reception Application Service (Use Case)
//!
//! Open/close receptions and add/remove items in LIFO order.
//! Every operation here is staff-only.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Actor, DomainError, Item, ItemType, Reception, Role};
use crate::ports::{ItemRepository, ReceptionRepository};

const STAFF_ONLY: &[Role] = &[Role::Staff];

/// Application service for reception operations
pub struct ReceptionService<R, I>
where
    R: ReceptionRepository + ?Sized,
    I: ItemRepository + ?Sized,
{
    receptions: Arc<R>,
    items: Arc<I>,
}

impl<R, I> ReceptionService<R, I>
where
    R: ReceptionRepository + ?Sized,
    I: ItemRepository + ?Sized,
{
    pub fn new(receptions: Arc<R>, items: Arc<I>) -> Self {
        Self { receptions, items }
    }

    /// Open a new reception. Fails if the pickup point already has one open.
    pub async fn open(&self, actor: &Actor, pickup_point_id: Uuid) -> Result<Reception, DomainError> {
        actor.require("open receptions", STAFF_ONLY)?;

        if self.receptions.find_active(pickup_point_id).await?.is_some() {
            return Err(DomainError::ReceptionAlreadyOpen(pickup_point_id));
        }

        // The store re-checks atomically; a lost race surfaces as ReceptionAlreadyOpen too.
        let reception = Reception::open(pickup_point_id);
        let saved = self.receptions.save(&reception).await?;

        tracing::info!(
            "Opened reception {} at pickup point {}",
            saved.id,
            pickup_point_id
        );

        Ok(saved)
    }

    /// Add an item of the given type to the open reception
    pub async fn add_item(
        &self,
        actor: &Actor,
        pickup_point_id: Uuid,
        item_type: &str,
    ) -> Result<Item, DomainError> {
        actor.require("add items", STAFF_ONLY)?;
        let item_type: ItemType = item_type.parse()?;

        let mut reception = self.active(pickup_point_id).await?;
        let item = Item::new(reception.id, item_type);
        reception.add_item(item.id)?;

        let saved = self.items.save(&item).await?;

        tracing::info!(
            "Added {} item {} to reception {}",
            saved.item_type,
            saved.id,
            reception.id
        );

        Ok(saved)
    }

    /// Delete the most recently received item of the open reception
    pub async fn remove_last_item(
        &self,
        actor: &Actor,
        pickup_point_id: Uuid,
    ) -> Result<Item, DomainError> {
        actor.require("remove items", STAFF_ONLY)?;

        let mut reception = self.active(pickup_point_id).await?;
        reception.remove_last_item()?;

        let removed = self
            .items
            .delete_most_recent(reception.id)
            .await?
            .ok_or(DomainError::NoItemsToRemove(reception.id))?;

        tracing::info!(
            "Removed item {} from reception {}",
            removed.id,
            reception.id
        );

        Ok(removed)
    }

    /// Close the open reception
    pub async fn close(&self, actor: &Actor, pickup_point_id: Uuid) -> Result<Reception, DomainError> {
        actor.require("close receptions", STAFF_ONLY)?;

        let mut reception = self.active(pickup_point_id).await?;
        reception.close(Utc::now())?;

        let saved = self.receptions.save(&reception).await?;

        tracing::info!(
            "Closed reception {} at pickup point {} with {} items",
            saved.id,
            pickup_point_id,
            saved.items.len()
        );

        Ok(saved)
    }

    async fn active(&self, pickup_point_id: Uuid) -> Result<Reception, DomainError> {
        self.receptions
            .find_active(pickup_point_id)
            .await?
            .filter(Reception::is_open)
            .ok_or(DomainError::NoOpenReception(pickup_point_id))
    }
}
