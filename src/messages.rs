//! # Display Strings
//!
//! Every user-visible string the views produce is looked up here by [`MessageKind`].
//! The defaults are Spanish; [`Locale::English`] swaps the whole table and
//! [`Messages::with`] overrides single entries.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Language of the built-in message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Spanish,
    English,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" | "spanish" => Ok(Locale::Spanish),
            "en" | "english" => Ok(Locale::English),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Spanish => write!(f, "es"),
            Locale::English => write!(f, "en"),
        }
    }
}

/// Key into the message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Loading,
    ErrorPrefix,

    // Fallbacks used when the server does not supply a `message`.
    CategoriesLoadFailed,
    ProductsLoadFailed,
    InvalidPayload,
    SaveFailed,
    DeleteFailed,

    // Client-side validation.
    CategoryNameRequired,
    ProductFieldsRequired,
    InvalidNumber,

    ConfirmDeleteCategory,
    ConfirmDeleteProduct,

    // View chrome.
    CategoriesTitle,
    ProductsTitle,
    AddCategory,
    EditCategory,
    AddProduct,
    EditProduct,
    CategoryList,
    ProductList,
    NoCategories,
    NoProducts,
    Uncategorized,
    ViewProducts,
    ViewCategories,
    NavProducts,
    NavCategories,
    ColumnName,
    ColumnDescription,
    ColumnPrice,
    ColumnCategory,
    SelectCategory,
    Save,
    Update,
    Cancel,
}

impl MessageKind {
    fn spanish(self) -> &'static str {
        use MessageKind::*;
        match self {
            Loading => "Cargando...",
            ErrorPrefix => "Error",
            CategoriesLoadFailed => "Error al cargar categorías",
            ProductsLoadFailed => "Error al cargar datos",
            InvalidPayload => "Error en los datos recibidos",
            SaveFailed => "Error al guardar",
            DeleteFailed => "Error al eliminar",
            CategoryNameRequired => "El nombre de la categoría es obligatorio",
            ProductFieldsRequired => "Nombre y categoría son campos obligatorios",
            InvalidNumber => "Valor numérico inválido",
            ConfirmDeleteCategory => "¿Estás seguro de eliminar esta categoría?",
            ConfirmDeleteProduct => "¿Estás seguro de eliminar este producto?",
            CategoriesTitle => "Gestión de Categorías",
            ProductsTitle => "Gestión de Productos",
            AddCategory => "Agregar Categoría",
            EditCategory => "Editar Categoría",
            AddProduct => "Agregar Producto",
            EditProduct => "Editar Producto",
            CategoryList => "Lista de Categorías",
            ProductList => "Lista de Productos",
            NoCategories => "No hay categorías registradas",
            NoProducts => "No hay productos registrados",
            Uncategorized => "Sin categoría",
            ViewProducts => "Ver Productos",
            ViewCategories => "Ver Categorías",
            NavProducts => "Productos",
            NavCategories => "Categorías",
            ColumnName => "Nombre",
            ColumnDescription => "Descripción",
            ColumnPrice => "Precio",
            ColumnCategory => "Categoría",
            SelectCategory => "Seleccione una categoría",
            Save => "Guardar",
            Update => "Actualizar",
            Cancel => "Cancelar",
        }
    }

    fn english(self) -> &'static str {
        use MessageKind::*;
        match self {
            Loading => "Loading...",
            ErrorPrefix => "Error",
            CategoriesLoadFailed => "Failed to load categories",
            ProductsLoadFailed => "Failed to load data",
            InvalidPayload => "Invalid data received",
            SaveFailed => "Failed to save",
            DeleteFailed => "Failed to delete",
            CategoryNameRequired => "Category name is required",
            ProductFieldsRequired => "Name and category are required fields",
            InvalidNumber => "Invalid numeric value",
            ConfirmDeleteCategory => "Are you sure you want to delete this category?",
            ConfirmDeleteProduct => "Are you sure you want to delete this product?",
            CategoriesTitle => "Category Management",
            ProductsTitle => "Product Management",
            AddCategory => "Add Category",
            EditCategory => "Edit Category",
            AddProduct => "Add Product",
            EditProduct => "Edit Product",
            CategoryList => "Category List",
            ProductList => "Product List",
            NoCategories => "No categories registered",
            NoProducts => "No products registered",
            Uncategorized => "Uncategorized",
            ViewProducts => "View Products",
            ViewCategories => "View Categories",
            NavProducts => "Products",
            NavCategories => "Categories",
            ColumnName => "Name",
            ColumnDescription => "Description",
            ColumnPrice => "Price",
            ColumnCategory => "Category",
            SelectCategory => "Select a category",
            Save => "Save",
            Update => "Update",
            Cancel => "Cancel",
        }
    }
}

/// Display-string table keyed by [`MessageKind`].
#[derive(Debug, Clone, Default)]
pub struct Messages {
    locale: Locale,
    overrides: HashMap<MessageKind, String>,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            overrides: HashMap::new(),
        }
    }

    /// Replaces the text for a single kind.
    pub fn with(mut self, kind: MessageKind, text: impl Into<String>) -> Self {
        self.overrides.insert(kind, text.into());
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get(&self, kind: MessageKind) -> &str {
        if let Some(text) = self.overrides.get(&kind) {
            return text;
        }
        match self.locale {
            Locale::Spanish => kind.spanish(),
            Locale::English => kind.english(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_spanish() {
        let messages = Messages::default();
        assert_eq!(messages.get(MessageKind::Loading), "Cargando...");
        assert_eq!(
            messages.get(MessageKind::ProductFieldsRequired),
            "Nombre y categoría son campos obligatorios"
        );
    }

    #[test]
    fn test_override_wins_over_locale() {
        let messages = Messages::new(Locale::English).with(MessageKind::SaveFailed, "Nope");
        assert_eq!(messages.get(MessageKind::SaveFailed), "Nope");
        assert_eq!(messages.get(MessageKind::DeleteFailed), "Failed to delete");
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::English));
        assert_eq!(" es ".parse::<Locale>(), Ok(Locale::Spanish));
        assert_eq!("fr".parse::<Locale>(), Err("fr".to_string()));
    }
}
