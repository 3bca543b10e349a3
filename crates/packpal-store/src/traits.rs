use packpal_merge::MergeOutcome;
use packpal_types::{ItemId, ListItem, ShareToken, Trip, TripId};

use crate::error::StoreResult;

/// Repository of trips and their packing lists.
///
/// All implementations must satisfy these invariants:
/// - `add_items` runs the merge engine inside the trip's read-modify-write
///   cycle, and that cycle is serialized: two merges against the same trip
///   never interleave, so the duplicate-suppression invariant holds.
/// - Item insertion order is list order; reads return items in that order.
/// - `list_trips` returns trips in creation order.
/// - Share tokens resolve to exactly the trip that owns them; deleting a
///   trip removes its token mapping.
/// - Lookups of absent trips return `Ok(None)`; errors mean the backend
///   itself failed.
pub trait TripStore: Send + Sync {
    /// Create a new empty trip with a fresh share token.
    fn create_trip(&self, name: &str) -> StoreResult<Trip>;

    /// All trips, in creation order.
    fn list_trips(&self) -> StoreResult<Vec<Trip>>;

    /// Fetch a trip by ID. Returns `Ok(None)` if it does not exist.
    fn get_trip(&self, id: &TripId) -> StoreResult<Option<Trip>>;

    /// Resolve a share token to its trip. Returns `Ok(None)` for unknown
    /// tokens.
    fn resolve_token(&self, token: &ShareToken) -> StoreResult<Option<Trip>>;

    /// Rename a trip. The name is trimmed before storing.
    fn rename_trip(&self, id: &TripId, name: &str) -> StoreResult<Trip>;

    /// Delete a trip and its token mapping. Returns `true` if it existed.
    fn delete_trip(&self, id: &TripId) -> StoreResult<bool>;

    /// Merge a candidate batch into the trip's list and append whatever
    /// survives cleanup and duplicate suppression.
    fn add_items(
        &self,
        id: &TripId,
        candidates: &[String],
        added_by: Option<&str>,
    ) -> StoreResult<MergeOutcome>;

    /// Set an item's done state, or toggle it when `done` is `None`.
    fn set_item_done(
        &self,
        id: &TripId,
        item: &ItemId,
        done: Option<bool>,
    ) -> StoreResult<ListItem>;

    /// Replace an item's text, re-applying trim and bracket repair.
    ///
    /// An edit that cleans to the empty string leaves the item unchanged.
    /// Edits are NOT re-checked for duplicates against siblings, so an
    /// edit can create a duplicate pair.
    fn update_item_text(
        &self,
        id: &TripId,
        item: &ItemId,
        text: &str,
    ) -> StoreResult<ListItem>;

    /// Delete an item. Returns `true` if the trip and item existed.
    fn delete_item(&self, id: &TripId, item: &ItemId) -> StoreResult<bool>;
}
