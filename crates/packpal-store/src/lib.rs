//! Trip repository for PackPal.
//!
//! The [`TripStore`] trait is the seam between the merge engine and
//! whatever persistence the deployment uses. Two backends ship here:
//!
//! - [`InMemoryTripStore`] — `HashMap`-based store for tests and embedding
//! - [`JsonFileTripStore`] — in-memory state with best-effort JSON file
//!   persistence (the CLI keeps it at `.data/trips.json`)
//!
//! # Design Rules
//!
//! 1. The merge engine stays pure; stores own the read-modify-write cycle.
//! 2. Merges against one trip are serialized — the write lock spans the
//!    whole cycle, so duplicate suppression cannot race.
//! 3. Reads return clones; callers never hold references into the store.
//! 4. File persistence is best-effort on write, strict on load.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::JsonFileTripStore;
pub use memory::InMemoryTripStore;
pub use traits::TripStore;
