//! # View Actor
//!
//! Runs one [`EntityManager`] inside its own Tokio task and feeds it UI events through a
//! channel.
//!
//! **Concurrency Model**:
//! The actor pulls one [`ViewEvent`] at a time and awaits the manager until the event is
//! fully handled, network round-trip included, before pulling the next. That is the
//! "each event runs to completion" rule of an event-driven UI, without any lock around
//! the state. Renderers never wait on the queue: they read the latest [`ViewState`]
//! from the `watch` channel exposed by [`ViewClient::subscribe`].

use crate::framework::{
    CatalogEntity, EntityId, EntityManager, RemoveOutcome, SubmitOutcome, SyncError, ViewState,
};
use crate::store::RemoteStore;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

/// One-shot reply channel for an event.
pub type Response<R> = oneshot::Sender<Result<R, SyncError>>;

/// UI events a view reacts to.
#[derive(Debug)]
pub enum ViewEvent<T: CatalogEntity> {
    /// View activation.
    Load {
        respond_to: Response<()>,
    },
    BeginEdit {
        entity: T,
        respond_to: Response<()>,
    },
    UpdateField {
        name: String,
        value: String,
        respond_to: Response<()>,
    },
    Submit {
        respond_to: Response<SubmitOutcome>,
    },
    Remove {
        id: EntityId,
        respond_to: Response<RemoveOutcome>,
    },
    CancelEdit {
        respond_to: Response<()>,
    },
}

/// The task half of a view: owns the manager and the event receiver.
pub struct ViewActor<T: CatalogEntity, S: RemoteStore> {
    receiver: mpsc::Receiver<ViewEvent<T>>,
    manager: EntityManager<T, S>,
}

impl<T: CatalogEntity, S: RemoteStore> ViewActor<T, S> {
    pub fn new(manager: EntityManager<T, S>, buffer_size: usize) -> (Self, ViewClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let client = ViewClient::new(sender, manager.subscribe());
        (Self { receiver, manager }, client)
    }

    /// Processes events until every [`ViewClient`] has been dropped.
    pub async fn run(mut self) {
        let entity_type = T::RESOURCE;
        info!(entity_type, "View started");

        while let Some(event) = self.receiver.recv().await {
            match event {
                ViewEvent::Load { respond_to } => {
                    let _ = respond_to.send(self.manager.initial_load().await);
                }
                ViewEvent::BeginEdit { entity, respond_to } => {
                    self.manager.begin_edit(&entity);
                    let _ = respond_to.send(Ok(()));
                }
                ViewEvent::UpdateField { name, value, respond_to } => {
                    debug!(entity_type, %name, %value, "UpdateField");
                    let _ = respond_to.send(self.manager.update_field(&name, &value));
                }
                ViewEvent::Submit { respond_to } => {
                    let _ = respond_to.send(self.manager.submit().await);
                }
                ViewEvent::Remove { id, respond_to } => {
                    let _ = respond_to.send(self.manager.remove(id).await);
                }
                ViewEvent::CancelEdit { respond_to } => {
                    self.manager.cancel_edit();
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.manager.state().collection.len(), "View closed");
    }
}

/// Cloneable handle the UI uses to dispatch events and observe state.
pub struct ViewClient<T: CatalogEntity> {
    sender: mpsc::Sender<ViewEvent<T>>,
    state: watch::Receiver<ViewState<T>>,
}

impl<T: CatalogEntity> Clone for ViewClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            state: self.state.clone(),
        }
    }
}

impl<T: CatalogEntity> ViewClient<T> {
    pub fn new(sender: mpsc::Sender<ViewEvent<T>>, state: watch::Receiver<ViewState<T>>) -> Self {
        Self { sender, state }
    }

    async fn dispatch<R: Send>(
        &self,
        event: impl FnOnce(Response<R>) -> ViewEvent<T> + Send,
    ) -> Result<R, SyncError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(event(respond_to))
            .await
            .map_err(|_| SyncError::ViewClosed)?;
        response.await.map_err(|_| SyncError::ViewDropped)?
    }

    pub async fn load(&self) -> Result<(), SyncError> {
        self.dispatch(|respond_to| ViewEvent::Load { respond_to }).await
    }

    pub async fn begin_edit(&self, entity: T) -> Result<(), SyncError> {
        self.dispatch(|respond_to| ViewEvent::BeginEdit { entity, respond_to }).await
    }

    pub async fn update_field(&self, name: &str, value: &str) -> Result<(), SyncError> {
        let (name, value) = (name.to_string(), value.to_string());
        self.dispatch(|respond_to| ViewEvent::UpdateField { name, value, respond_to })
            .await
    }

    pub async fn submit(&self) -> Result<SubmitOutcome, SyncError> {
        self.dispatch(|respond_to| ViewEvent::Submit { respond_to }).await
    }

    pub async fn remove(&self, id: EntityId) -> Result<RemoveOutcome, SyncError> {
        self.dispatch(|respond_to| ViewEvent::Remove { id, respond_to }).await
    }

    pub async fn cancel_edit(&self) -> Result<(), SyncError> {
        self.dispatch(|respond_to| ViewEvent::CancelEdit { respond_to }).await
    }

    /// Latest published state.
    pub fn state(&self) -> ViewState<T> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.state.clone()
    }
}
