use crate::clients::{CatalogClient, CategoryClient, ProductClient};
use crate::config::{AdminConfig, DEFAULT_BRAND};
use crate::framework::{Confirm, SyncError};
use crate::messages::Messages;
use crate::navigator::{NavBar, NavError, Navigator, Route};
use crate::render::{render_nav, render_view};
use crate::store::{HttpStore, RemoteStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Navigation(#[from] NavError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The admin interface: both views, the navigator and the nav bar.
///
/// `AdminApp` is responsible for:
/// - **Lifecycle Management**: Spawning both view actors and stopping them
/// - **Dependency Wiring**: Handing each view a clone of the one store, the shared
///   confirmation provider and the display strings
/// - **Routing**: Activating the view a path points to
///
/// # Example
///
/// ```ignore
/// let app = AdminApp::from_config(&AdminConfig::from_env()?, Arc::new(AutoConfirm::decline()))?;
/// app.open("/categorias").await?;
/// println!("{}", app.render());
/// app.shutdown().await?;
/// ```
pub struct AdminApp {
    /// Client for the product view
    pub products: ProductClient,

    /// Client for the category view
    pub categories: CategoryClient,

    navigator: Navigator,
    messages: Arc<Messages>,
    brand: String,

    /// Task handles of the view actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AdminApp {
    /// Spawns the product and category view actors over clones of `store`.
    pub fn new<S>(store: S, confirm: Arc<dyn Confirm>, messages: Messages) -> Self
    where
        S: RemoteStore + Clone,
    {
        let messages = Arc::new(messages);
        let (product_actor, products) =
            crate::product_view::new(store.clone(), Arc::clone(&confirm), Arc::clone(&messages));
        let (category_actor, categories) =
            crate::category_view::new(store, confirm, Arc::clone(&messages));

        let product_handle = tokio::spawn(product_actor.run());
        let category_handle = tokio::spawn(category_actor.run());

        Self {
            products,
            categories,
            navigator: Navigator::new(),
            messages,
            brand: DEFAULT_BRAND.to_string(),
            handles: vec![product_handle, category_handle],
        }
    }

    /// Builds an [`HttpStore`] from `config` and starts the app on top of it.
    pub fn from_config(config: &AdminConfig, confirm: Arc<dyn Confirm>) -> Result<Self, AppError> {
        let store = HttpStore::from_config(config)?;
        Ok(Self::new(store, confirm, config.messages()).with_brand(&config.brand))
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn current(&self) -> Route {
        self.navigator.current()
    }

    /// Routes to `path` and loads the target view.
    ///
    /// The route changes before the load starts, so a failed load still leaves the
    /// target view current (rendering its error).
    #[instrument(skip(self))]
    pub async fn open(&mut self, path: &str) -> Result<Route, AppError> {
        let route = self.navigator.navigate(path)?;
        self.activate(route).await?;
        Ok(route)
    }

    /// Follows the current view's cross-navigation button.
    pub async fn open_cross(&mut self) -> Result<Route, AppError> {
        let target = self.current().cross();
        self.open(target.path()).await
    }

    async fn activate(&self, route: Route) -> Result<(), SyncError> {
        info!(route = route.path(), "Activating view");
        match route {
            Route::Products => self.products.load().await,
            Route::Categories => self.categories.load().await,
        }
    }

    pub fn nav_bar(&self) -> NavBar {
        NavBar::new(&self.brand, &self.messages)
    }

    /// Nav bar followed by the current view.
    pub fn render(&self) -> String {
        let view = match self.current() {
            Route::Products => render_view(&self.products.state(), &self.messages),
            Route::Categories => render_view(&self.categories.state(), &self.messages),
        };
        format!("{}\n{}", render_nav(&self.nav_bar()), view)
    }

    /// Gracefully shuts down both views.
    ///
    /// Dropping the clients closes the event channels; each actor then leaves its loop
    /// and its task completes.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if both actors shut down cleanly
    /// - `Err(String)` if an actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down views...");

        drop(self.products);
        drop(self.categories);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("View task failed: {:?}", e);
                return Err(format!("View task failed: {:?}", e));
            }
        }

        info!("Shutdown complete.");
        Ok(())
    }
}
