//! Foundation types for PackPal.
//!
//! This crate provides the identifiers and data model used throughout the
//! PackPal system. Every other PackPal crate depends on `packpal-types`.
//!
//! # Key Types
//!
//! - [`TripId`] — Time-ordered trip identifier (UUID v7)
//! - [`ItemId`] — Time-ordered list-item identifier (UUID v7)
//! - [`ShareToken`] — Opaque random token granting anonymous access to a
//!   trip's list (UUID v4)
//! - [`ListItem`] — A single packing-list entry
//! - [`Trip`] — A trip owning an ordered sequence of items

pub mod error;
pub mod id;
pub mod item;
pub mod trip;

pub use error::TypeError;
pub use id::{ItemId, ShareToken, TripId};
pub use item::ListItem;
pub use trip::Trip;
