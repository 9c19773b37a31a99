use crate::framework::EntityId;
use crate::model::Category;
use serde::{Deserialize, Serialize};

/// Represents a product in the catalog, as listed by the server.
///
/// Wire keys follow the API (`descripcion`, `precio`, `categoria_name`); the English
/// spellings are accepted too when reading. `category_name` is derived by the server
/// for display and is never written back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    #[serde(default, rename = "descripcion", alias = "description")]
    pub description: Option<String>,
    #[serde(default, rename = "precio", alias = "price")]
    pub price: f64,
    #[serde(default)]
    pub category_id: Option<EntityId>,
    #[serde(default, rename = "categoria_name", alias = "category_name")]
    pub category_name: Option<String>,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Server-assigned identifier
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `category_id` - Owning category
    pub fn new(id: EntityId, name: impl Into<String>, price: f64, category_id: EntityId) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            price,
            category_id: Some(category_id),
            category_name: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category_name(mut self, name: impl Into<String>) -> Self {
        self.category_name = Some(name.into());
        self
    }
}

/// Editable fields of a product.
///
/// `category_id == None` is the "nothing selected" state of the category selector.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductFields {
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub category_id: Option<EntityId>,
}

/// Looks up the display name of `category_id` among the loaded categories.
pub fn category_name(categories: &[Category], category_id: Option<EntityId>) -> Option<String> {
    let id = category_id?;
    categories.iter().find(|c| c.id == id).map(|c| c.name.clone())
}
