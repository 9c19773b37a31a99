//! Starting, routing and stopping the admin interface.

pub mod admin_app;
pub mod tracing;

pub use admin_app::*;
pub use self::tracing::setup_tracing;
