use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use packpal_merge::MergeOutcome;
use packpal_types::{ItemId, ListItem, ShareToken, Trip, TripId};

use crate::error::{StoreError, StoreResult};
use crate::memory::InMemoryTripStore;
use crate::traits::TripStore;

/// On-disk snapshot format: the trips array in creation order. Token and
/// ID indexes are rebuilt on load.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    trips: Vec<Trip>,
}

/// Trip store backed by a JSON file.
///
/// State lives in an [`InMemoryTripStore`]; every successful mutation is
/// followed by a best-effort rewrite of the snapshot file. A failed write
/// is logged at `warn` and the operation still succeeds — durability here
/// is a convenience, not a guarantee. Loads are stricter: a corrupt
/// snapshot surfaces as [`StoreError::Serialization`] instead of silently
/// starting empty and clobbering the file on the next write.
pub struct JsonFileTripStore {
    memory: InMemoryTripStore,
    path: PathBuf,
}

impl JsonFileTripStore {
    /// Open a store at `path`, loading the snapshot if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let memory = match fs::read_to_string(&path) {
            Ok(raw) => {
                let snapshot: Snapshot = serde_json::from_str(&raw)
                    .map_err(|e| StoreError::Serialization(e.to_string()))?;
                InMemoryTripStore::from_trips(snapshot.trips)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => InMemoryTripStore::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { memory, path })
    }

    /// The snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_persist(&self) -> StoreResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let snapshot = Snapshot {
            trips: self.memory.snapshot(),
        };
        let payload = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, payload)?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to persist trips");
        }
    }
}

impl TripStore for JsonFileTripStore {
    fn create_trip(&self, name: &str) -> StoreResult<Trip> {
        let trip = self.memory.create_trip(name)?;
        self.persist();
        Ok(trip)
    }

    fn list_trips(&self) -> StoreResult<Vec<Trip>> {
        self.memory.list_trips()
    }

    fn get_trip(&self, id: &TripId) -> StoreResult<Option<Trip>> {
        self.memory.get_trip(id)
    }

    fn resolve_token(&self, token: &ShareToken) -> StoreResult<Option<Trip>> {
        self.memory.resolve_token(token)
    }

    fn rename_trip(&self, id: &TripId, name: &str) -> StoreResult<Trip> {
        let trip = self.memory.rename_trip(id, name)?;
        self.persist();
        Ok(trip)
    }

    fn delete_trip(&self, id: &TripId) -> StoreResult<bool> {
        let existed = self.memory.delete_trip(id)?;
        if existed {
            self.persist();
        }
        Ok(existed)
    }

    fn add_items(
        &self,
        id: &TripId,
        candidates: &[String],
        added_by: Option<&str>,
    ) -> StoreResult<MergeOutcome> {
        let outcome = self.memory.add_items(id, candidates, added_by)?;
        if outcome.added > 0 {
            self.persist();
        }
        Ok(outcome)
    }

    fn set_item_done(
        &self,
        id: &TripId,
        item: &ItemId,
        done: Option<bool>,
    ) -> StoreResult<ListItem> {
        let updated = self.memory.set_item_done(id, item, done)?;
        self.persist();
        Ok(updated)
    }

    fn update_item_text(
        &self,
        id: &TripId,
        item: &ItemId,
        text: &str,
    ) -> StoreResult<ListItem> {
        let updated = self.memory.update_item_text(id, item, text)?;
        self.persist();
        Ok(updated)
    }

    fn delete_item(&self, id: &TripId, item: &ItemId) -> StoreResult<bool> {
        let existed = self.memory.delete_item(id, item)?;
        if existed {
            self.persist();
        }
        Ok(existed)
    }
}

impl std::fmt::Debug for JsonFileTripStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileTripStore")
            .field("path", &self.path)
            .field("trip_count", &self.memory.len())
            .finish()
    }
}
