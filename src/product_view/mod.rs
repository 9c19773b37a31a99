//! Product view: CRUD for products, with the category list loaded alongside.

pub mod entity;

use crate::clients::ProductClient;
use crate::framework::{Confirm, EntityManager, ViewActor};
use crate::messages::Messages;
use crate::model::Product;
use crate::store::RemoteStore;
use std::sync::Arc;

/// Creates a new product view actor and its client.
pub fn new<S: RemoteStore>(
    store: S,
    confirm: Arc<dyn Confirm>,
    messages: Arc<Messages>,
) -> (ViewActor<Product, S>, ProductClient) {
    let manager = EntityManager::new(store, confirm, messages);
    let (actor, view) = ViewActor::new(manager, 32);
    (actor, ProductClient::new(view))
}
