//! # Catalog Admin
//!
//! > **Client-side synchronization for a product catalog administration UI.**
//!
//! Two views, products and categories, list, create, edit and delete records held by a
//! remote JSON API, and keep an in-memory mirror of the server list up to date after
//! every confirmed write.
//!
//! ## Core Concepts
//!
//! ### Generics: One State Machine, Two Views
//! Both views run `EntityManager<T: CatalogEntity, S: RemoteStore>`. An entity type only
//! says where it lives on the server, which fields its form edits, how raw input is
//! coerced and what else must be loaded next to it.
//!
//! ### Events Run to Completion
//! Each view lives in its own Tokio task and handles one UI event at a time, network
//! round-trip included. Renderers read snapshots from a `watch` channel instead of
//! waiting on the queue.
//!
//! ### Mocking: Testing without a Server
//! [`framework::mock::MockStore`] answers requests from scripted expectations and
//! records what was sent.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: The generic manager, its view actor and the single error type.
//! - **Key items**: [`CatalogEntity`](framework::CatalogEntity), [`EntityManager`](framework::EntityManager), [`SyncError`](framework::SyncError).
//!
//! ### 2. The Transport ([`store`])
//! - **Role**: The `RemoteStore` seam and its `reqwest` implementation.
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! - **Role**: Spawns both views, routes between them and shuts them down.
//! - **Key items**: [`AdminApp`](lifecycle::AdminApp), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 4. The Interface ([`clients`])
//! - **Role**: Typed handles over the generic `ViewClient`.
//! - **Key items**: [`ProductClient`](clients::ProductClient), [`CategoryClient`](clients::CategoryClient).
//!
//! ### 5. The Implementation ([`category_view`], [`product_view`])
//! - **Role**: Concrete `CatalogEntity` implementations and view factories.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -- /productos
//! ```

pub mod category_view;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod messages;
pub mod model;
pub mod navigator;
pub mod product_view;
pub mod render;
pub mod store;
