use crate::clients::catalog_client::CatalogClient;
use crate::framework::{EntityId, SyncError, ViewClient};
use crate::model::{Category, Product};

/// Client for the product view.
///
/// The typed setters feed the same raw-input path a form would, so coercion and
/// validation behave identically.
#[derive(Clone)]
pub struct ProductClient {
    inner: ViewClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ViewClient<Product>) -> Self {
        Self { inner }
    }

    pub async fn set_name(&self, name: &str) -> Result<(), SyncError> {
        self.update_field("name", name).await
    }

    pub async fn set_description(&self, description: &str) -> Result<(), SyncError> {
        self.update_field("description", description).await
    }

    pub async fn set_price(&self, price: &str) -> Result<(), SyncError> {
        self.update_field("price", price).await
    }

    /// `None` clears the selector.
    pub async fn select_category(&self, id: Option<EntityId>) -> Result<(), SyncError> {
        let raw = id.map(|id| id.to_string()).unwrap_or_default();
        self.update_field("category_id", &raw).await
    }

    /// Categories offered by the selector, as of the last load.
    pub fn categories(&self) -> Vec<Category> {
        self.state().aux
    }
}

impl CatalogClient<Product> for ProductClient {
    fn view(&self) -> &ViewClient<Product> {
        &self.inner
    }
}
