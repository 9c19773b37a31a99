//! Type-safe wrappers around [`ViewClient`](crate::framework::ViewClient).

pub mod catalog_client;
pub mod category_client;
pub mod product_client;

pub use catalog_client::*;
pub use category_client::*;
pub use product_client::*;
