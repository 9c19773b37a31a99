//! [`CatalogEntity`] and [`Tabular`] implementations for [`Product`].
//!
//! Products depend on categories: the category list is the auxiliary data of this view,
//! used by the form's selector and to resolve `category_name` locally after a write.

use crate::framework::{
    coerce_decimal, coerce_reference, CatalogEntity, EditBuffer, EntityId, FieldError,
};
use crate::messages::{MessageKind, Messages};
use crate::model::{category_name, Category, Product, ProductFields};
use crate::render::Tabular;
use serde_json::Value;

impl CatalogEntity for Product {
    type Fields = ProductFields;
    type Aux = Vec<Category>;

    const RESOURCE: &'static str = "productos";
    const LOAD_FAILED: MessageKind = MessageKind::ProductsLoadFailed;
    const REQUIRED: MessageKind = MessageKind::ProductFieldsRequired;
    const CONFIRM_DELETE: MessageKind = MessageKind::ConfirmDeleteProduct;

    fn id(&self) -> EntityId {
        self.id
    }

    fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            price: self.price,
            category_id: self.category_id,
        }
    }

    fn from_fields(id: EntityId, fields: ProductFields, categories: &Vec<Category>) -> Self {
        Self {
            id,
            name: fields.name,
            description: non_empty(fields.description),
            price: fields.price,
            category_id: fields.category_id,
            category_name: category_name(categories, fields.category_id),
        }
    }

    fn apply_fields(&mut self, fields: ProductFields, categories: &Vec<Category>) {
        // Keep the server-supplied name when the category did not change and is
        // missing from the local list.
        let resolved = category_name(categories, fields.category_id);
        if resolved.is_some() || fields.category_id != self.category_id {
            self.category_name = resolved;
        }
        self.name = fields.name;
        self.description = non_empty(fields.description);
        self.price = fields.price;
        self.category_id = fields.category_id;
    }

    fn set_field(fields: &mut ProductFields, name: &str, raw: &str) -> Result<(), FieldError> {
        match name {
            "name" => fields.name = raw.to_string(),
            "description" | "descripcion" => fields.description = raw.to_string(),
            "price" | "precio" => fields.price = coerce_decimal("price", raw)?,
            "category_id" => fields.category_id = coerce_reference("category_id", raw)?,
            other => return Err(FieldError::Unknown(other.to_string())),
        }
        Ok(())
    }

    fn has_required(fields: &ProductFields) -> bool {
        !fields.name.is_empty() && fields.category_id.is_some()
    }

    /// Updates echo the id inside the body as well as in the path.
    fn request_body(buffer: &EditBuffer<ProductFields>) -> Result<Value, serde_json::Error> {
        let mut body = serde_json::to_value(&buffer.fields)?;
        if let (Some(id), Value::Object(map)) = (buffer.id, &mut body) {
            map.insert("id".to_string(), Value::from(id));
        }
        Ok(body)
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

impl Tabular for Product {
    const TITLE: MessageKind = MessageKind::ProductsTitle;
    const ADD_TITLE: MessageKind = MessageKind::AddProduct;
    const EDIT_TITLE: MessageKind = MessageKind::EditProduct;
    const LIST_TITLE: MessageKind = MessageKind::ProductList;
    const EMPTY: MessageKind = MessageKind::NoProducts;
    const CROSS_LINK: MessageKind = MessageKind::ViewCategories;

    fn headers(messages: &Messages) -> Vec<String> {
        [
            MessageKind::ColumnName,
            MessageKind::ColumnDescription,
            MessageKind::ColumnPrice,
            MessageKind::ColumnCategory,
        ]
        .into_iter()
        .map(|kind| messages.get(kind).to_string())
        .collect()
    }

    fn cells(&self, messages: &Messages) -> Vec<String> {
        vec![
            self.name.clone(),
            self.description
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "-".to_string()),
            format!("${:.2}", self.price),
            self.category_name
                .clone()
                .unwrap_or_else(|| messages.get(MessageKind::Uncategorized).to_string()),
        ]
    }

    fn form(fields: &ProductFields, categories: &Vec<Category>, messages: &Messages) -> Vec<(String, String)> {
        let category = category_name(categories, fields.category_id)
            .unwrap_or_else(|| messages.get(MessageKind::SelectCategory).to_string());
        vec![
            (format!("{}*", messages.get(MessageKind::ColumnName)), fields.name.clone()),
            (messages.get(MessageKind::ColumnDescription).to_string(), fields.description.clone()),
            (messages.get(MessageKind::ColumnPrice).to_string(), fields.price.to_string()),
            (format!("{}*", messages.get(MessageKind::ColumnCategory)), category),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn categories() -> Vec<Category> {
        vec![Category::new(1, "Beverages"), Category::new(2, "Snacks")]
    }

    #[test]
    fn test_set_field_coerces_numbers() {
        let mut fields = ProductFields::default();
        Product::set_field(&mut fields, "price", "12.50").unwrap();
        Product::set_field(&mut fields, "category_id", "2").unwrap();
        assert_eq!(fields.price, 12.5);
        assert_eq!(fields.category_id, Some(2));

        Product::set_field(&mut fields, "category_id", "").unwrap();
        assert_eq!(fields.category_id, None);
    }

    #[test]
    fn test_set_field_leaves_value_on_bad_number() {
        let mut fields = ProductFields { price: 3.0, ..Default::default() };
        let err = Product::set_field(&mut fields, "precio", "cheap").unwrap_err();
        assert_eq!(err, FieldError::NotANumber { field: "price", value: "cheap".into() });
        assert_eq!(fields.price, 3.0);
    }

    #[test]
    fn test_required_fields() {
        let mut fields = ProductFields { name: "Widget".into(), ..Default::default() };
        assert!(!Product::has_required(&fields));
        fields.category_id = Some(1);
        assert!(Product::has_required(&fields));
        fields.name.clear();
        assert!(!Product::has_required(&fields));
    }

    #[test]
    fn test_update_body_carries_id() {
        let fields = ProductFields {
            name: "Widget".into(),
            description: "Blue".into(),
            price: 9.5,
            category_id: Some(2),
        };
        let create = Product::request_body(&EditBuffer { id: None, fields: fields.clone() }).unwrap();
        assert!(create.get("id").is_none());

        let update = Product::request_body(&EditBuffer::edit(3, fields)).unwrap();
        assert_eq!(
            update,
            json!({ "id": 3, "name": "Widget", "descripcion": "Blue", "precio": 9.5, "category_id": 2 })
        );
    }

    #[test]
    fn test_from_fields_resolves_category_name() {
        let fields = ProductFields { name: "Chips".into(), price: 1.0, category_id: Some(2), ..Default::default() };
        let product = Product::from_fields(8, fields, &categories());
        assert_eq!(product.category_name.as_deref(), Some("Snacks"));
        assert_eq!(product.description, None);
    }

    #[test]
    fn test_apply_fields_keeps_unresolvable_name_for_same_category() {
        let mut product = Product::new(3, "Widget", 9.5, 7).with_category_name("Tools");
        let mut fields = product.fields();
        fields.price = 10.0;
        product.apply_fields(fields.clone(), &categories());
        assert_eq!(product.category_name.as_deref(), Some("Tools"));
        assert_eq!(product.price, 10.0);

        fields.category_id = Some(9);
        product.apply_fields(fields, &categories());
        assert_eq!(product.category_name, None);
    }

    #[test]
    fn test_cells() {
        let messages = Messages::default();
        let product = Product::new(3, "Widget", 9.5, 7);
        assert_eq!(
            product.cells(&messages),
            vec!["Widget", "-", "$9.50", "Sin categoría"]
        );
    }
}
