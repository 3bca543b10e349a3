use std::collections::HashMap;
use std::sync::RwLock;

use packpal_merge::{balance_brackets, merge_candidates, MergeOutcome};
use packpal_types::{ItemId, ListItem, ShareToken, Trip, TripId};

use crate::error::{StoreError, StoreResult};
use crate::traits::TripStore;

struct Inner {
    trips: HashMap<TripId, Trip>,
    tokens: HashMap<ShareToken, TripId>,
    // Creation order; HashMap iteration order is arbitrary.
    order: Vec<TripId>,
}

/// In-memory, HashMap-based trip store.
///
/// Intended for tests, embedding, and as the state behind the file-backed
/// store. All trips are held behind a single `RwLock`; mutating operations
/// hold the write lock for their entire read-modify-write cycle, which
/// serializes merges per trip (and, at this scale, across trips).
pub struct InMemoryTripStore {
    inner: RwLock<Inner>,
}

impl InMemoryTripStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                trips: HashMap::new(),
                tokens: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    /// Build a store from existing trips, preserving their order.
    pub fn from_trips(trips: Vec<Trip>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.write().expect("lock poisoned");
            for trip in trips {
                inner.tokens.insert(trip.share_token, trip.id);
                inner.order.push(trip.id);
                inner.trips.insert(trip.id, trip);
            }
        }
        store
    }

    /// Number of trips currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").trips.len()
    }

    /// Returns `true` if the store has no trips.
    pub fn is_empty(&self) -> bool {
        self.inner.read().expect("lock poisoned").trips.is_empty()
    }

    /// All trips in creation order. Used for snapshots.
    pub fn snapshot(&self) -> Vec<Trip> {
        let inner = self.inner.read().expect("lock poisoned");
        inner
            .order
            .iter()
            .filter_map(|id| inner.trips.get(id).cloned())
            .collect()
    }
}

impl Default for InMemoryTripStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TripStore for InMemoryTripStore {
    fn create_trip(&self, name: &str) -> StoreResult<Trip> {
        let trip = Trip::new(name.trim());
        let mut inner = self.inner.write().expect("lock poisoned");
        inner.tokens.insert(trip.share_token, trip.id);
        inner.order.push(trip.id);
        inner.trips.insert(trip.id, trip.clone());
        Ok(trip)
    }

    fn list_trips(&self) -> StoreResult<Vec<Trip>> {
        Ok(self.snapshot())
    }

    fn get_trip(&self, id: &TripId) -> StoreResult<Option<Trip>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner.trips.get(id).cloned())
    }

    fn resolve_token(&self, token: &ShareToken) -> StoreResult<Option<Trip>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner
            .tokens
            .get(token)
            .and_then(|id| inner.trips.get(id))
            .cloned())
    }

    fn rename_trip(&self, id: &TripId, name: &str) -> StoreResult<Trip> {
        let mut inner = self.inner.write().expect("lock poisoned");
        let trip = inner
            .trips
            .get_mut(id)
            .ok_or(StoreError::TripNotFound(*id))?;
        trip.name = name.trim().to_string();
        Ok(trip.clone())
    }

    fn delete_trip(&self, id: &TripId) -> StoreResult<bool> {
        let mut inner = self.inner.write().expect("lock poisoned");
        let existed = inner.trips.remove(id).is_some();
        if existed {
            inner.tokens.retain(|_, trip_id| trip_id != id);
            inner.order.retain(|trip_id| trip_id != id);
        }
        Ok(existed)
    }

    fn add_items(
        &self,
        id: &TripId,
        candidates: &[String],
        added_by: Option<&str>,
    ) -> StoreResult<MergeOutcome> {
        // The write lock spans the whole read-merge-write cycle, so
        // concurrent merges against one trip cannot interleave.
        let mut inner = self.inner.write().expect("lock poisoned");
        let trip = inner
            .trips
            .get_mut(id)
            .ok_or(StoreError::TripNotFound(*id))?;
        let outcome = {
            let existing = trip.item_texts();
            merge_candidates(&existing, candidates, added_by)
        };
        trip.items.extend(outcome.created.iter().cloned());
        Ok(outcome)
    }

    fn set_item_done(
        &self,
        id: &TripId,
        item: &ItemId,
        done: Option<bool>,
    ) -> StoreResult<ListItem> {
        let mut inner = self.inner.write().expect("lock poisoned");
        let trip = inner
            .trips
            .get_mut(id)
            .ok_or(StoreError::TripNotFound(*id))?;
        let entry = trip.item_mut(item).ok_or(StoreError::ItemNotFound {
            trip: *id,
            item: *item,
        })?;
        entry.done = done.unwrap_or(!entry.done);
        Ok(entry.clone())
    }

    fn update_item_text(
        &self,
        id: &TripId,
        item: &ItemId,
        text: &str,
    ) -> StoreResult<ListItem> {
        let mut inner = self.inner.write().expect("lock poisoned");
        let trip = inner
            .trips
            .get_mut(id)
            .ok_or(StoreError::TripNotFound(*id))?;
        let entry = trip.item_mut(item).ok_or(StoreError::ItemNotFound {
            trip: *id,
            item: *item,
        })?;
        let clean = balance_brackets(text.trim());
        // An empty edit is ignored; no sibling dedup on edits.
        if !clean.is_empty() {
            entry.text = clean;
        }
        Ok(entry.clone())
    }

    fn delete_item(&self, id: &TripId, item: &ItemId) -> StoreResult<bool> {
        let mut inner = self.inner.write().expect("lock poisoned");
        match inner.trips.get_mut(id) {
            Some(trip) => Ok(trip.remove_item(item)),
            None => Ok(false),
        }
    }
}

impl std::fmt::Debug for InMemoryTripStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTripStore")
            .field("trip_count", &self.len())
            .finish()
    }
}
