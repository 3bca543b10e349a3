use packpal_types::{ItemId, TripId};

/// Errors from trip store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested trip does not exist.
    #[error("trip not found: {0}")]
    TripNotFound(TripId),

    /// The requested item does not exist in the trip.
    #[error("item not found: {item} in trip {trip}")]
    ItemNotFound { trip: TripId, item: ItemId },

    /// Snapshot encoding or decoding failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
