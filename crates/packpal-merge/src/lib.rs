//! Item merge engine for PackPal.
//!
//! Merging is the one place where freeform text — typed input, pasted
//! multi-line lists, AI-extracted bullets, shared-link submissions — enters
//! a trip's packing list. The engine cleans each candidate and suppresses
//! duplicates against the existing list and within the batch.
//!
//! Stored text is lightly cleaned (trimmed, bracket-repaired) so the user
//! keeps their casing and punctuation; duplicate comparison uses an
//! aggressively normalized key ([`normalization_key`]) that is never
//! stored. [`merge_candidates`] is a pure function; reading the current
//! list and persisting the result belong to the caller.

pub mod balance;
pub mod engine;
pub mod normalize;

pub use balance::balance_brackets;
pub use engine::{merge_candidates, MergeOutcome};
pub use normalize::normalization_key;
