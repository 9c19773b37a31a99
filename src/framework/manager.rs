//! # Entity Manager
//!
//! The CRUD synchronization state machine one view runs against one resource.
//!
//! ## State
//!
//! [`ViewState`] holds the collection (mirror of the server list as last observed), the
//! auxiliary data, the loading flag, the single error slot and the [`EditBuffer`].
//! Every transition publishes a fresh copy on a `watch` channel, so a renderer sees
//! `Loading` while a request is still in flight.
//!
//! ## Consistency
//!
//! After the initial load the collection is only ever patched locally: create appends,
//! update merges by id, delete filters by id. Nothing is re-fetched after a write, so a
//! concurrent writer elsewhere can make the mirror drift from the server unnoticed.

use crate::framework::{
    accept, no_reply, Auxiliary, CatalogEntity, Confirm, EditBuffer, EntityId, Fallback, FieldError,
    SyncError, fetch_list,
};
use crate::messages::{MessageKind, Messages};
use crate::store::{RemoteStore, StoreRequest};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Everything a view renders from.
#[derive(Debug, Clone)]
pub struct ViewState<T: CatalogEntity> {
    pub collection: Vec<T>,
    pub aux: T::Aux,
    pub loading: bool,
    pub error_message: Option<String>,
    /// The last load cycle ended in failure; the error replaces the whole view.
    pub load_failed: bool,
    pub edit_buffer: EditBuffer<T::Fields>,
}

impl<T: CatalogEntity> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            collection: Vec::new(),
            aux: T::Aux::default(),
            loading: true,
            error_message: None,
            load_failed: false,
            edit_buffer: EditBuffer::create(),
        }
    }
}

/// The three rendering states, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase<'a> {
    Loading,
    /// Load failed: the message replaces the productive view.
    Error(&'a str),
    /// Form and table. `banner` is the inline error after a failed submit or delete.
    Ready { banner: Option<&'a str> },
}

impl<T: CatalogEntity> ViewState<T> {
    pub fn phase(&self) -> ViewPhase<'_> {
        if self.loading {
            return ViewPhase::Loading;
        }
        match (self.error_message.as_deref(), self.load_failed) {
            (Some(message), true) => ViewPhase::Error(message),
            (banner, _) => ViewPhase::Ready { banner },
        }
    }

    pub fn find(&self, id: EntityId) -> Option<&T> {
        self.collection.iter().find(|e| e.id() == id)
    }
}

/// Result of a successful [`EntityManager::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(EntityId),
    Updated(EntityId),
}

/// Result of an [`EntityManager::remove`] that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(EntityId),
    /// The user declined the confirmation prompt; nothing was sent.
    Declined,
}

/// Generic manager for one resource view.
///
/// # Architecture Note
/// The manager owns its state exclusively and takes `&mut self` for every event, so
/// operations can never interleave. Network calls are the only suspension points;
/// nothing is cancellable and no retry is attempted: a failure is terminal for the
/// user action that caused it.
pub struct EntityManager<T: CatalogEntity, S: RemoteStore> {
    store: S,
    confirm: Arc<dyn Confirm>,
    messages: Arc<Messages>,
    state: ViewState<T>,
    publisher: watch::Sender<ViewState<T>>,
}

impl<T: CatalogEntity, S: RemoteStore> EntityManager<T, S> {
    pub fn new(store: S, confirm: Arc<dyn Confirm>, messages: Arc<Messages>) -> Self {
        let state = ViewState::default();
        let (publisher, _) = watch::channel(state.clone());
        Self {
            store,
            confirm,
            messages,
            state,
            publisher,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Receives a snapshot after every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.publisher.subscribe()
    }

    fn publish(&self) {
        self.publisher.send_replace(self.state.clone());
    }

    fn fail(&mut self, error: &SyncError) {
        warn!(entity_type = T::RESOURCE, error = %error, "Operation failed");
        self.state.error_message = Some(error.to_string());
        self.publish();
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Fetches the primary collection and the auxiliary data concurrently.
    ///
    /// Both must succeed; on success they replace the local copies wholesale.
    /// `loading` is cleared on every path.
    #[instrument(skip(self), fields(entity_type = T::RESOURCE))]
    pub async fn initial_load(&mut self) -> Result<(), SyncError> {
        self.state.loading = true;
        self.state.error_message = None;
        self.state.load_failed = false;
        self.publish();

        let messages = Arc::clone(&self.messages);
        let fallback = Fallback {
            transport: messages.get(T::LOAD_FAILED),
            payload: messages.get(MessageKind::InvalidPayload),
        };

        let (primary, aux) = tokio::join!(
            fetch_list::<T, S>(&self.store, fallback),
            <T::Aux as Auxiliary>::fetch(&self.store, fallback),
        );

        let result = match (primary, aux) {
            (Ok(collection), Ok(aux)) => {
                info!(entity_type = T::RESOURCE, size = collection.len(), "Loaded");
                self.state.collection = collection;
                self.state.aux = aux;
                Ok(())
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(entity_type = T::RESOURCE, error = %e, "Load failed");
                self.state.error_message = Some(e.to_string());
                self.state.load_failed = true;
                Err(e)
            }
        };

        self.state.loading = false;
        self.publish();
        result
    }

    /// Switches the buffer to edit mode with a copy of `entity`'s editable fields.
    pub fn begin_edit(&mut self, entity: &T) {
        debug!(entity_type = T::RESOURCE, id = entity.id(), "Begin edit");
        self.state.edit_buffer = EditBuffer::edit(entity.id(), entity.fields());
        self.publish();
    }

    /// Merges one raw form value into the buffer.
    ///
    /// A value that coerces clears an earlier invalid-number error; other errors stay.
    pub fn update_field(&mut self, name: &str, raw: &str) -> Result<(), SyncError> {
        match T::set_field(&mut self.state.edit_buffer.fields, name, raw) {
            Ok(()) => {
                let invalid_number = self.messages.get(MessageKind::InvalidNumber);
                if self.state.error_message.as_deref() == Some(invalid_number) {
                    self.state.error_message = None;
                }
                self.publish();
                Ok(())
            }
            Err(FieldError::Unknown(field)) => {
                warn!(entity_type = T::RESOURCE, %field, "Unknown field");
                Err(SyncError::UnknownField(field))
            }
            Err(e @ FieldError::NotANumber { .. }) => {
                debug!(entity_type = T::RESOURCE, error = %e, "Coercion failed");
                let error = SyncError::Validation(self.messages.get(MessageKind::InvalidNumber).to_string());
                self.fail(&error);
                Err(error)
            }
        }
    }

    /// Creates or updates the buffered record depending on its mode.
    ///
    /// On failure neither the collection nor the buffer changes.
    #[instrument(skip(self), fields(entity_type = T::RESOURCE))]
    pub async fn submit(&mut self) -> Result<SubmitOutcome, SyncError> {
        if !T::has_required(&self.state.edit_buffer.fields) {
            let error = SyncError::Validation(self.messages.get(T::REQUIRED).to_string());
            self.fail(&error);
            return Err(error);
        }

        self.state.error_message = None;
        self.publish();

        let messages = Arc::clone(&self.messages);
        let fallback = Fallback::same(messages.get(MessageKind::SaveFailed));
        let buffer = self.state.edit_buffer.clone();

        let body = match T::request_body(&buffer) {
            Ok(body) => body,
            Err(e) => {
                warn!(entity_type = T::RESOURCE, error = %e, "Request body did not encode");
                let error = SyncError::Application(fallback.payload.to_string());
                self.fail(&error);
                return Err(error);
            }
        };
        debug!(entity_type = T::RESOURCE, %body, "Submitting");

        let request = match buffer.id {
            Some(id) => StoreRequest::put(T::member_path(id), body),
            None => StoreRequest::post(T::collection_path(), body),
        };

        let envelope = match self.store.send(request).await {
            Ok(reply) => accept(reply, fallback),
            Err(e) => Err(no_reply(e, fallback)),
        };
        let envelope = match envelope {
            Ok(envelope) => envelope,
            Err(error) => {
                self.fail(&error);
                return Err(error);
            }
        };

        let outcome = match buffer.id {
            Some(id) => {
                match self.state.collection.iter_mut().find(|e| e.id() == id) {
                    Some(existing) => existing.apply_fields(buffer.fields, &self.state.aux),
                    None => warn!(entity_type = T::RESOURCE, id, "Updated record is no longer listed"),
                }
                info!(entity_type = T::RESOURCE, id, "Updated");
                SubmitOutcome::Updated(id)
            }
            None => {
                let Some(id) = envelope.id else {
                    let error = SyncError::Application(messages.get(MessageKind::InvalidPayload).to_string());
                    self.fail(&error);
                    return Err(error);
                };
                let created = T::from_fields(id, buffer.fields, &self.state.aux);
                self.state.collection.push(created);
                info!(entity_type = T::RESOURCE, id, size = self.state.collection.len(), "Created");
                SubmitOutcome::Created(id)
            }
        };

        self.state.edit_buffer.reset();
        self.publish();
        Ok(outcome)
    }

    /// Deletes a record after the user confirms.
    #[instrument(skip(self), fields(entity_type = T::RESOURCE))]
    pub async fn remove(&mut self, id: EntityId) -> Result<RemoveOutcome, SyncError> {
        let messages = Arc::clone(&self.messages);
        if !self.confirm.confirm(messages.get(T::CONFIRM_DELETE)).await {
            debug!(entity_type = T::RESOURCE, id, "Delete declined");
            return Ok(RemoveOutcome::Declined);
        }

        let fallback = Fallback::same(messages.get(MessageKind::DeleteFailed));
        let result = match self.store.send(StoreRequest::delete(T::member_path(id))).await {
            Ok(reply) => accept(reply, fallback),
            Err(e) => Err(no_reply(e, fallback)),
        };
        if let Err(error) = result {
            self.fail(&error);
            return Err(error);
        }

        self.state.collection.retain(|e| e.id() != id);
        info!(entity_type = T::RESOURCE, id, size = self.state.collection.len(), "Deleted");
        self.publish();
        Ok(RemoveOutcome::Removed(id))
    }

    /// Drops whatever is in the buffer and returns to create mode.
    pub fn cancel_edit(&mut self) {
        debug!(entity_type = T::RESOURCE, "Cancel edit");
        self.state.edit_buffer.reset();
        self.publish();
    }
}
