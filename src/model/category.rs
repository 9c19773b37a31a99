use crate::framework::EntityId;
use serde::{Deserialize, Serialize};

/// A product category as listed by the server.
///
/// Managed by the category view; see [`crate::category_view`] for the
/// [`CatalogEntity`](crate::framework::CatalogEntity) implementation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
}

impl Category {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Editable fields of a category; also the body of create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryFields {
    pub name: String,
}
