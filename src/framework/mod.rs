//! Generic synchronization framework for catalog resource views.
//!
//! This module provides the building blocks every entity view is assembled from:
//! fetch the collection, keep one edit buffer, write through the remote store and
//! patch the local mirror after the server confirms.
//!
//! # Main Components
//!
//! - [`CatalogEntity`] - Trait that resource types implement to be managed by a view
//! - [`EntityManager`] - The CRUD state machine
//! - [`ViewActor`] / [`ViewClient`] - Event loop and handle around one manager
//! - [`SyncError`] - The single error type of every operation
//!
//! # Testing
//!
//! See [`mock`] module for a scripted store and confirmation provider.

pub mod confirm;
pub mod core;
pub mod error;
pub mod manager;
pub mod mock;
pub mod view;

// Re-export core types for convenience
pub use self::core::*;
pub use confirm::*;
pub use error::*;
pub use manager::*;
pub use view::*;
