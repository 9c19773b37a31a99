//! [`CatalogEntity`] and [`Tabular`] implementations for [`Category`].
//!
//! Categories have no foreign dependencies: no auxiliary data, one editable field.

use crate::framework::{CatalogEntity, EntityId, FieldError};
use crate::messages::{MessageKind, Messages};
use crate::model::{Category, CategoryFields};
use crate::render::Tabular;

impl CatalogEntity for Category {
    type Fields = CategoryFields;
    type Aux = ();

    const RESOURCE: &'static str = "categorias";
    const LOAD_FAILED: MessageKind = MessageKind::CategoriesLoadFailed;
    const REQUIRED: MessageKind = MessageKind::CategoryNameRequired;
    const CONFIRM_DELETE: MessageKind = MessageKind::ConfirmDeleteCategory;

    fn id(&self) -> EntityId {
        self.id
    }

    fn fields(&self) -> CategoryFields {
        CategoryFields { name: self.name.clone() }
    }

    fn from_fields(id: EntityId, fields: CategoryFields, _aux: &()) -> Self {
        Self::new(id, fields.name)
    }

    fn apply_fields(&mut self, fields: CategoryFields, _aux: &()) {
        self.name = fields.name;
    }

    fn set_field(fields: &mut CategoryFields, name: &str, raw: &str) -> Result<(), FieldError> {
        match name {
            "name" => {
                fields.name = raw.to_string();
                Ok(())
            }
            other => Err(FieldError::Unknown(other.to_string())),
        }
    }

    fn has_required(fields: &CategoryFields) -> bool {
        !fields.name.is_empty()
    }
}

impl Tabular for Category {
    const TITLE: MessageKind = MessageKind::CategoriesTitle;
    const ADD_TITLE: MessageKind = MessageKind::AddCategory;
    const EDIT_TITLE: MessageKind = MessageKind::EditCategory;
    const LIST_TITLE: MessageKind = MessageKind::CategoryList;
    const EMPTY: MessageKind = MessageKind::NoCategories;
    const CROSS_LINK: MessageKind = MessageKind::ViewProducts;

    fn headers(messages: &Messages) -> Vec<String> {
        vec!["ID".to_string(), messages.get(MessageKind::ColumnName).to_string()]
    }

    fn cells(&self, _messages: &Messages) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }

    fn form(fields: &CategoryFields, _aux: &(), messages: &Messages) -> Vec<(String, String)> {
        vec![(
            format!("{}*", messages.get(MessageKind::ColumnName)),
            fields.name.clone(),
        )]
    }
}
