//! # Core Synchronization Framework
//!
//! This module defines the generic building blocks every entity view is made of.
//!
//! ## Key Types
//!
//! - [`CatalogEntity`]: The trait a resource type implements to be managed by an [`EntityManager`](crate::framework::EntityManager).
//! - [`EditBuffer`]: The single in-progress create/edit record of a view.
//! - [`Auxiliary`]: Extra data a view loads alongside its own collection.
//! - [`accept`]: The success contract applied to every reply.

use crate::framework::SyncError;
use crate::messages::MessageKind;
use crate::store::{ApiEnvelope, RemoteStore, StoreError, StoreReply, StoreRequest};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;
use thiserror::Error;
use tracing::warn;

/// Server-assigned identifier shared by every catalog resource.
pub type EntityId = i64;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any resource must implement to be managed by an `EntityManager`.
///
/// # Architecture Note
/// Categories and products run the very same state machine; they differ only in
/// *where* they live on the server, *which* fields the form edits, *how* raw input is
/// coerced, and *what* else must be loaded next to them. Those differences are exactly
/// the associated items below, so the manager is written once.
///
/// - `Fields` is the editable part of a record. Derived, server-only data (such as a
///   product's category display name) never appears in it.
/// - `Aux` is fetched concurrently with the primary collection during the initial load
///   and passed to `from_fields`/`apply_fields` so derived data can be recomputed locally.
pub trait CatalogEntity: Clone + Debug + PartialEq + DeserializeOwned + Send + Sync + 'static {
    type Fields: Clone + Debug + Default + PartialEq + Serialize + Send + Sync + 'static;

    type Aux: Auxiliary;

    /// Path segment under `/api/` (e.g., `"categorias"`).
    const RESOURCE: &'static str;

    /// Fallback text when the initial load fails without a server message.
    const LOAD_FAILED: MessageKind;

    /// Text shown when `has_required` rejects the buffer.
    const REQUIRED: MessageKind;

    /// Prompt passed to the confirmation provider before a delete.
    const CONFIRM_DELETE: MessageKind;

    fn id(&self) -> EntityId;

    /// Copies the editable fields out of a record.
    fn fields(&self) -> Self::Fields;

    /// Builds the record appended after a successful create.
    fn from_fields(id: EntityId, fields: Self::Fields, aux: &Self::Aux) -> Self;

    /// Merges submitted fields into an existing record after a successful update.
    fn apply_fields(&mut self, fields: Self::Fields, aux: &Self::Aux);

    /// Stores one raw form value into `fields`, coercing numeric fields.
    fn set_field(fields: &mut Self::Fields, name: &str, raw: &str) -> Result<(), FieldError>;

    fn has_required(fields: &Self::Fields) -> bool;

    /// JSON body of a create (`buffer.id == None`) or update request.
    fn request_body(buffer: &EditBuffer<Self::Fields>) -> Result<Value, serde_json::Error> {
        serde_json::to_value(&buffer.fields)
    }

    fn collection_path() -> String {
        format!("/api/{}", Self::RESOURCE)
    }

    fn member_path(id: EntityId) -> String {
        format!("/api/{}/{}", Self::RESOURCE, id)
    }
}

/// Coercion failures raised by [`CatalogEntity::set_field`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FieldError {
    #[error("Unknown field: {0}")]
    Unknown(String),

    #[error("Field {field} expects a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
}

/// Parses a decimal form value. Empty input is zero.
pub fn coerce_decimal(field: &'static str, raw: &str) -> Result<f64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FieldError::NotANumber { field, value: raw.to_string() }),
    }
}

/// Parses a reference to another record. Empty input clears the selection.
pub fn coerce_reference(field: &'static str, raw: &str) -> Result<Option<EntityId>, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<EntityId>()
        .map(Some)
        .map_err(|_| FieldError::NotANumber { field, value: raw.to_string() })
}

// =============================================================================
// 2. THE EDIT BUFFER
// =============================================================================

/// Whether the buffer holds a new record or mirrors an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit(EntityId),
}

/// The record currently being created or edited. `id == None` is create mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditBuffer<F> {
    pub id: Option<EntityId>,
    pub fields: F,
}

impl<F: Default> EditBuffer<F> {
    /// Empty create-mode buffer.
    pub fn create() -> Self {
        Self { id: None, fields: F::default() }
    }

    pub fn edit(id: EntityId, fields: F) -> Self {
        Self { id: Some(id), fields }
    }

    pub fn mode(&self) -> EditMode {
        match self.id {
            Some(id) => EditMode::Edit(id),
            None => EditMode::Create,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::create();
    }
}

// =============================================================================
// 3. REPLY ACCEPTANCE
// =============================================================================

/// Texts used when a failed reply carries no `message` of its own.
#[derive(Debug, Clone, Copy)]
pub struct Fallback<'a> {
    /// Non-2xx status or no reply at all.
    pub transport: &'a str,
    /// 2xx status but the body lacks `success: true` or has the wrong shape.
    pub payload: &'a str,
}

impl<'a> Fallback<'a> {
    pub fn same(text: &'a str) -> Self {
        Self { transport: text, payload: text }
    }
}

/// Applies the dual success check: transport success **and** `success: true` in the body.
///
/// The server's `message` wins over the fallback whenever present.
pub fn accept(reply: StoreReply, fallback: Fallback<'_>) -> Result<ApiEnvelope, SyncError> {
    let envelope = reply.envelope();
    let message = envelope.as_ref().and_then(|e| e.message.clone());

    if !reply.is_success() {
        return Err(SyncError::Transport {
            status: Some(reply.status),
            message: message.unwrap_or_else(|| fallback.transport.to_string()),
        });
    }

    match envelope {
        Some(envelope) if envelope.success => Ok(envelope),
        _ => Err(SyncError::Application(
            message.unwrap_or_else(|| fallback.payload.to_string()),
        )),
    }
}

/// Maps a request that never got a reply onto the transport fallback.
pub fn no_reply(error: StoreError, fallback: Fallback<'_>) -> SyncError {
    warn!(error = %error, "Request failed before a reply");
    SyncError::Transport {
        status: None,
        message: fallback.transport.to_string(),
    }
}

/// Fetches and decodes the full collection of `U`.
pub async fn fetch_list<U, S>(store: &S, fallback: Fallback<'_>) -> Result<Vec<U>, SyncError>
where
    U: CatalogEntity,
    S: RemoteStore,
{
    let reply = store
        .send(StoreRequest::get(U::collection_path()))
        .await
        .map_err(|e| no_reply(e, fallback))?;
    let envelope = accept(reply, fallback)?;

    serde_json::from_value::<Vec<U>>(envelope.data.unwrap_or(Value::Null)).map_err(|e| {
        warn!(entity_type = U::RESOURCE, error = %e, "Collection payload did not decode");
        SyncError::Application(fallback.payload.to_string())
    })
}

// =============================================================================
// 4. AUXILIARY DATA
// =============================================================================

/// Data a view loads next to its primary collection, joined into the same load cycle.
#[async_trait]
pub trait Auxiliary: Clone + Debug + Default + Send + Sync + 'static {
    async fn fetch<S: RemoteStore>(store: &S, fallback: Fallback<'_>) -> Result<Self, SyncError>;
}

/// No auxiliary data.
#[async_trait]
impl Auxiliary for () {
    async fn fetch<S: RemoteStore>(_store: &S, _fallback: Fallback<'_>) -> Result<Self, SyncError> {
        Ok(())
    }
}

/// Another resource's full collection (e.g., categories for the product selector).
#[async_trait]
impl<U: CatalogEntity> Auxiliary for Vec<U> {
    async fn fetch<S: RemoteStore>(store: &S, fallback: Fallback<'_>) -> Result<Self, SyncError> {
        fetch_list::<U, S>(store, fallback).await
    }
}
