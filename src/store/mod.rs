use std::collections::HashMap;

use chrono::Utc;
use rand::seq::SliceRandom;
use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::models::{CreateItem, Item};

/// Every fresh process starts with this one item in the store.
const SEED_ID: &str = "1655570749194813500";
const SEED_NAME: &str = "Carrots";
const SEED_QUANTITY: i32 = 10;

/// Authoritative in-memory state for items.
///
/// The mapping is owned exclusively by this type: callers only ever receive
/// copies of `Item` values, never references into the map, and the mutex
/// never leaves this module. The guard is held only across mapping access
/// (plus id generation on create, so the uniqueness check and the insert
/// are atomic), never across serialization or response writing.
pub struct ItemStore {
    items: Mutex<HashMap<String, Item>>,
}

impl ItemStore {
    /// Store pre-loaded with the seed item.
    pub fn new() -> Self {
        let seed = Item {
            id: SEED_ID.to_string(),
            name: SEED_NAME.to_string(),
            quantity: SEED_QUANTITY,
        };
        Self {
            items: Mutex::new(HashMap::from([(seed.id.clone(), seed)])),
        }
    }

    /// Store with no items at all.
    pub fn empty() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
        }
    }

    /// Snapshot copy of all current items, order unspecified.
    pub async fn list(&self) -> Vec<Item> {
        let items = self.items.lock().await;
        items.values().cloned().collect()
    }

    /// Copy of the item with exactly this id, if present.
    pub async fn get(&self, id: &str) -> Option<Item> {
        let items = self.items.lock().await;
        items.get(id).cloned()
    }

    /// Id of a randomly picked item: `None` on an empty store, the single
    /// id deterministically when only one item exists, otherwise a uniform
    /// pick among all ids.
    pub async fn random_id(&self) -> Option<String> {
        let items = self.items.lock().await;
        let ids: Vec<&String> = items.keys().collect();
        match ids.as_slice() {
            [] => None,
            [only] => Some((*only).clone()),
            _ => ids.choose(&mut rand::thread_rng()).map(|id| (*id).clone()),
        }
    }

    /// Validate the candidate, assign a fresh id, and insert.
    ///
    /// An exactly-empty name or a quantity of exactly zero is rejected;
    /// whitespace-only names and negative quantities pass through.
    pub async fn create(&self, candidate: CreateItem) -> AppResult<Item> {
        if candidate.name.is_empty() || candidate.quantity == 0 {
            return Err(AppError::BadRequest("Invalid Request".to_string()));
        }

        let mut items = self.items.lock().await;
        let id = fresh_id(&items);
        let item = Item {
            id: id.clone(),
            name: candidate.name,
            quantity: candidate.quantity,
        };
        items.insert(id, item.clone());
        Ok(item)
    }

    /// Current item count.
    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }
}

/// Fresh wall-clock id in the store's decimal-nanoseconds shape. The clock
/// can repeat under rapid creation (and `timestamp_nanos_opt` runs out of
/// i64 range in 2262), so the candidate is bumped until its key is unused
/// rather than silently overwriting an existing entry.
fn fresh_id(items: &HashMap<String, Item>) -> String {
    let mut candidate = Utc::now().timestamp_nanos_opt().unwrap_or(0);
    loop {
        let id = candidate.to_string();
        if !items.contains_key(&id) {
            return id;
        }
        candidate += 1;
    }
}
