//! Food Quantity Engine
//!
//! An MCP server for unit-aware food quantities.

use std::path::PathBuf;

use foodquant::build_info;
use foodquant::catalog::Catalog;
use foodquant::mcp::FoodQuantService;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

/// Get the catalog path from environment or use default
fn get_catalog_path() -> PathBuf {
    std::env::var("FOODQUANT_CATALOG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
                    path = grandparent.to_path_buf();
                }
            }

            path.push("data");
            path.push("catalog.json");
            path
        })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr so it stays out of the MCP stdio stream
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("foodquant=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let catalog_path = get_catalog_path();
    eprintln!("Catalog path: {}", catalog_path.display());

    let catalog = if catalog_path.exists() {
        Catalog::load(&catalog_path)?
    } else {
        tracing::warn!("No catalog at {}; starting empty", catalog_path.display());
        Catalog::default()
    };
    tracing::info!("Loaded {} foods", catalog.len());

    let service = FoodQuantService::new(catalog_path, catalog);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
