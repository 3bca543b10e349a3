use serde::{Deserialize, Serialize};

use crate::id::{ItemId, ShareToken, TripId};
use crate::item::ListItem;

/// A trip and its ordered packing list.
///
/// Invariant: item texts are pairwise distinct under the merge engine's
/// normalization key. The invariant is enforced at insertion time only;
/// a later text edit can break it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    pub items: Vec<ListItem>,
    pub share_token: ShareToken,
}

impl Trip {
    /// Create a new empty trip with a fresh ID and share token.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TripId::new(),
            name: name.into(),
            items: Vec::new(),
            share_token: ShareToken::new(),
        }
    }

    /// Look up an item by ID.
    pub fn item(&self, id: &ItemId) -> Option<&ListItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Look up an item by ID for mutation.
    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut ListItem> {
        self.items.iter_mut().find(|i| &i.id == id)
    }

    /// Remove an item by ID. Returns `true` if the item existed.
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        match self.items.iter().position(|i| &i.id == id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// The item texts in list order, as borrowed strings.
    pub fn item_texts(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.text.as_str()).collect()
    }
}
