use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use packpal_types::ListItem;

use crate::balance::balance_brackets;
use crate::normalize::normalization_key;

/// Result of merging a candidate batch into a list.
///
/// `created` holds the accepted candidates, as new items, in their original
/// relative order. `added + skipped` always equals the candidate count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    pub created: Vec<ListItem>,
    pub added: usize,
    pub skipped: usize,
}

/// Merge a batch of candidate strings against an existing list.
///
/// Each candidate is trimmed and bracket-repaired; empty candidates and
/// duplicates (of existing items or of earlier candidates in the batch, by
/// normalization key) are skipped. Accepted candidates become new unchecked
/// items carrying `added_by`, with the cleaned (not fully normalized) text
/// stored.
///
/// This is a pure function: the caller owns reading `existing` and
/// persisting `created`. It never fails for any string input.
pub fn merge_candidates<S: AsRef<str>>(
    existing: &[S],
    candidates: &[String],
    added_by: Option<&str>,
) -> MergeOutcome {
    let mut seen: HashSet<String> = existing
        .iter()
        .map(|text| normalization_key(text.as_ref()))
        .collect();

    let mut created = Vec::new();
    for raw in candidates {
        let clean = balance_brackets(raw.trim());
        if clean.is_empty() {
            continue;
        }
        let key = normalization_key(&clean);
        if key.is_empty() || seen.contains(&key) {
            continue;
        }
        seen.insert(key);
        created.push(ListItem::new(clean, added_by));
    }

    let added = created.len();
    let skipped = candidates.len() - added;
    tracing::debug!(added, skipped, "merged candidate batch");
    MergeOutcome {
        created,
        added,
        skipped,
    }
}
