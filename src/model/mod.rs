//! Pure data structures for the catalog resources.

pub mod category;
pub mod product;

pub use category::*;
pub use product::*;
