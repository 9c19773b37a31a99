use crate::clients::catalog_client::CatalogClient;
use crate::framework::{SyncError, ViewClient};
use crate::model::Category;

/// Client for the category view.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ViewClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ViewClient<Category>) -> Self {
        Self { inner }
    }

    pub async fn set_name(&self, name: &str) -> Result<(), SyncError> {
        self.update_field("name", name).await
    }
}

impl CatalogClient<Category> for CategoryClient {
    fn view(&self) -> &ViewClient<Category> {
        &self.inner
    }
}
