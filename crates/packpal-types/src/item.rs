use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// A single entry on a trip's packing list.
///
/// The stored `text` is the lightly cleaned form of whatever the user (or
/// the chat extractor, or a shared link) submitted: trimmed and
/// bracket-repaired, but with the original casing and punctuation intact.
/// Duplicate comparison happens on a separately computed normalization key
/// that is never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: ItemId,
    pub text: String,
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
}

impl ListItem {
    /// Create a new unchecked item with a fresh ID.
    pub fn new(text: impl Into<String>, added_by: Option<&str>) -> Self {
        Self {
            id: ItemId::new(),
            text: text.into(),
            done: false,
            added_by: added_by.map(str::to_string),
        }
    }
}
