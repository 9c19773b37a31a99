use crate::framework::{
    CatalogEntity, EntityId, RemoveOutcome, SubmitOutcome, SyncError, ViewClient, ViewState,
};
use async_trait::async_trait;

/// Trait for view-specific clients to inherit the standard view events.
///
/// Implementors only expose their [`ViewClient`]; loading, editing, submitting and
/// deleting come from the default methods.
#[async_trait]
pub trait CatalogClient<T: CatalogEntity>: Send + Sync {
    /// Access the inner generic ViewClient.
    fn view(&self) -> &ViewClient<T>;

    /// Fetches the collection (and any auxiliary data) from the server.
    #[tracing::instrument(skip(self))]
    async fn load(&self) -> Result<(), SyncError> {
        tracing::debug!(entity_type = T::RESOURCE, "Sending request");
        self.view().load().await
    }

    async fn begin_edit(&self, entity: T) -> Result<(), SyncError> {
        self.view().begin_edit(entity).await
    }

    /// Starts editing the listed record with `id`.
    #[tracing::instrument(skip(self))]
    async fn begin_edit_by_id(&self, id: EntityId) -> Result<(), SyncError> {
        let entity = self.state().find(id).cloned().ok_or(SyncError::NotFound(id))?;
        self.view().begin_edit(entity).await
    }

    async fn update_field(&self, name: &str, value: &str) -> Result<(), SyncError> {
        self.view().update_field(name, value).await
    }

    #[tracing::instrument(skip(self))]
    async fn submit(&self) -> Result<SubmitOutcome, SyncError> {
        tracing::debug!(entity_type = T::RESOURCE, "Sending request");
        self.view().submit().await
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: EntityId) -> Result<RemoveOutcome, SyncError> {
        tracing::debug!(entity_type = T::RESOURCE, "Sending request");
        self.view().remove(id).await
    }

    async fn cancel_edit(&self) -> Result<(), SyncError> {
        self.view().cancel_edit().await
    }

    fn state(&self) -> ViewState<T> {
        self.view().state()
    }
}
