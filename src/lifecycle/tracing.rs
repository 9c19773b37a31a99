//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden; every log line carries `entity_type` instead.
//!
//! ## Usage Examples
//!
//! ```bash
//! # State-changing outcomes only
//! RUST_LOG=info cargo run -- /categorias
//!
//! # Request bodies and UI events
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO View started entity_type="productos"
//! INFO View started entity_type="categorias"
//! INFO open: Activating view path="/" route="/productos"
//! INFO open:load:initial_load: Loaded entity_type="productos" size=2
//! INFO Created entity_type="categorias" id=7 size=2
//! WARN Operation failed entity_type="productos" error=Product has dependent orders
//! ```
//!
//! Failures log at `warn`; the error text is the same string the view shows.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
