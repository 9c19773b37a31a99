//! # Catalog Admin
//!
//! Opens one route of the admin interface against the configured API and prints the
//! rendered view.
//!
//! ```bash
//! CATALOG_API_URL=http://localhost:9000 RUST_LOG=info cargo run -- /categorias
//! ```

use catalog_admin::config::AdminConfig;
use catalog_admin::framework::AutoConfirm;
use catalog_admin::lifecycle::{setup_tracing, AdminApp};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[derive(Parser, Debug)]
#[command(name = "catalog-admin")]
#[command(about = "Renders one view of the catalog admin")]
#[command(version)]
struct Cli {
    /// Route to open (`/`, `/productos` or `/categorias`)
    #[arg(default_value = "/")]
    path: String,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();
    setup_tracing();

    let config = AdminConfig::from_env().map_err(|e| e.to_string())?;
    info!(base_url = %config.base_url, locale = %config.locale, "Starting catalog admin");

    // Nothing in the demo deletes, so every prompt is declined.
    let mut app =
        AdminApp::from_config(&config, Arc::new(AutoConfirm::decline())).map_err(|e| e.to_string())?;

    let path = cli.path;
    let span = tracing::info_span!("open_route");
    let opened = app.open(&path).instrument(span).await;
    if let Err(e) = &opened {
        error!(%path, error = %e, "Could not open route");
    }

    println!("{}", app.render());

    app.shutdown().await?;
    opened.map(|_| ()).map_err(|e| e.to_string())
}
