//! Category view: CRUD for categories, no foreign dependencies.

pub mod entity;

use crate::clients::CategoryClient;
use crate::framework::{Confirm, EntityManager, ViewActor};
use crate::messages::Messages;
use crate::model::Category;
use crate::store::RemoteStore;
use std::sync::Arc;

/// Creates a new category view actor and its client.
pub fn new<S: RemoteStore>(
    store: S,
    confirm: Arc<dyn Confirm>,
    messages: Arc<Messages>,
) -> (ViewActor<Category, S>, CategoryClient) {
    let manager = EntityManager::new(store, confirm, messages);
    let (actor, view) = ViewActor::new(manager, 32);
    (actor, CategoryClient::new(view))
}
