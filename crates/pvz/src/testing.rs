//! In-memory repository implementations for tests.
//!
//! `InMemoryStore` implements every repository port over a single mutex,
//! so the one-open-reception guard is checked and applied atomically.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Account, DomainError, Item, PickupPoint, PickupPointFilter, Reception};
use crate::ports::{AccountRepository, ItemRepository, PickupPointRepository, ReceptionRepository};

pub use crate::ports::{
    MockAccountRepository, MockCredentialHasher, MockItemRepository, MockPickupPointRepository,
    MockReceptionRepository, MockTokenService,
};

#[derive(Default)]
struct State {
    /// Keyed by normalized email
    accounts: HashMap<String, (Account, String)>,
    pickup_points: HashMap<Uuid, PickupPoint>,
    receptions: HashMap<Uuid, Reception>,
    /// Insertion order; ties on receipt time resolve to the later entry
    items: Vec<Item>,
}

impl State {
    fn item_ids(&self, reception_id: Uuid) -> Vec<Uuid> {
        self.items_of(reception_id).into_iter().map(|i| i.id).collect()
    }

    fn items_of(&self, reception_id: Uuid) -> Vec<Item> {
        let mut items: Vec<Item> = self
            .items
            .iter()
            .filter(|i| i.reception_id == reception_id)
            .cloned()
            .collect();
        items.sort_by_key(|i| i.received_at);
        items
    }

    fn with_items(&self, reception: &Reception) -> Reception {
        Reception {
            items: self.item_ids(reception.id),
            ..reception.clone()
        }
    }
}

/// Shared in-memory store backing all repository ports
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl AccountRepository for InMemoryStore {
    async fn create(
        &self,
        account: &Account,
        credential_hash: &str,
    ) -> Result<Account, DomainError> {
        let mut state = self.lock();
        if state.accounts.contains_key(&account.email) {
            return Err(DomainError::Conflict(format!(
                "account with email {} already exists",
                account.email
            )));
        }
        state.accounts.insert(
            account.email.clone(),
            (account.clone(), credential_hash.to_string()),
        );
        Ok(account.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<(Account, String)>, DomainError> {
        Ok(self.lock().accounts.get(email).cloned())
    }
}

#[async_trait]
impl PickupPointRepository for InMemoryStore {
    async fn save(&self, pickup_point: &PickupPoint) -> Result<PickupPoint, DomainError> {
        self.lock()
            .pickup_points
            .insert(pickup_point.id, pickup_point.clone());
        Ok(pickup_point.clone())
    }

    async fn list(&self, filter: &PickupPointFilter) -> Result<Vec<PickupPoint>, DomainError> {
        let state = self.lock();
        let mut matching: Vec<PickupPoint> = state
            .pickup_points
            .values()
            .filter(|p| filter.contains(p.registered_at))
            .cloned()
            .collect();
        matching.sort_by_key(|p| (p.registered_at, p.id));

        let offset = usize::try_from(filter.offset()).unwrap_or(usize::MAX);
        Ok(matching
            .into_iter()
            .skip(offset)
            .take(filter.page_size as usize)
            .collect())
    }
}

#[async_trait]
impl ReceptionRepository for InMemoryStore {
    async fn save(&self, reception: &Reception) -> Result<Reception, DomainError> {
        let mut state = self.lock();
        if !state.pickup_points.contains_key(&reception.pickup_point_id) {
            return Err(DomainError::not_found(
                "PickupPoint",
                reception.pickup_point_id,
            ));
        }

        let other_open = state.receptions.values().any(|r| {
            r.pickup_point_id == reception.pickup_point_id && r.is_open() && r.id != reception.id
        });
        if reception.is_open() && other_open {
            return Err(DomainError::ReceptionAlreadyOpen(reception.pickup_point_id));
        }

        let stored = Reception {
            items: Vec::new(),
            ..reception.clone()
        };
        state.receptions.insert(stored.id, stored);
        Ok(state.with_items(reception))
    }

    async fn find_active(&self, pickup_point_id: Uuid) -> Result<Option<Reception>, DomainError> {
        let state = self.lock();
        Ok(state
            .receptions
            .values()
            .find(|r| r.pickup_point_id == pickup_point_id && r.is_open())
            .map(|r| state.with_items(r)))
    }

    async fn list_by_pickup_point(
        &self,
        pickup_point_id: Uuid,
    ) -> Result<Vec<Reception>, DomainError> {
        let state = self.lock();
        let mut receptions: Vec<Reception> = state
            .receptions
            .values()
            .filter(|r| r.pickup_point_id == pickup_point_id)
            .map(|r| state.with_items(r))
            .collect();
        receptions.sort_by_key(|r| (r.date_time, r.id));
        Ok(receptions)
    }
}

#[async_trait]
impl ItemRepository for InMemoryStore {
    async fn save(&self, item: &Item) -> Result<Item, DomainError> {
        let mut state = self.lock();
        if !state.receptions.contains_key(&item.reception_id) {
            return Err(DomainError::not_found("Reception", item.reception_id));
        }
        state.items.push(item.clone());
        Ok(item.clone())
    }

    async fn delete_most_recent(&self, reception_id: Uuid) -> Result<Option<Item>, DomainError> {
        let mut state = self.lock();
        let latest = state
            .items
            .iter()
            .enumerate()
            .filter(|(_, i)| i.reception_id == reception_id)
            .max_by_key(|(index, i)| (i.received_at, *index))
            .map(|(index, _)| index);

        Ok(latest.map(|index| state.items.remove(index)))
    }

    async fn list_by_reception(&self, reception_id: Uuid) -> Result<Vec<Item>, DomainError> {
        Ok(self.lock().items_of(reception_id))
    }
}
