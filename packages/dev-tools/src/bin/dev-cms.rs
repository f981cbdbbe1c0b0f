//! Development CMS backend
//!
//! Serves the mock `blogs` collection on `127.0.0.1:$DEV_CMS_PORT` (default
//! 3000), which is where `StoreConfig::default()` points. Records live in
//! memory and are gone when the process exits.
//!
//! ```text
//! DEV_CMS_PORT=3000 cargo run -p blogstudio-dev-tools --bin dev-cms
//! ```

use blogstudio_dev_tools::{serve, MockCms, BLOGS_PATH};

/// Port from `DEV_CMS_PORT`, falling back to 3000
fn dev_cms_port() -> u16 {
    std::env::var("DEV_CMS_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("dev_cms=debug,blogstudio_dev_tools=debug")
        .init();

    let port = dev_cms_port();
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .map_err(|e| {
            eprintln!("❌ Failed to bind to port {}: {}", port, e);
            eprintln!("   Another process may be using this port.");
            eprintln!("   Pick another with: DEV_CMS_PORT=<port>");
            e
        })?;

    println!("🚀 Mock CMS listening on http://127.0.0.1:{}{}", port, BLOGS_PATH);
    tracing::info!("Mock CMS started on port {}", port);

    serve(listener, MockCms::new()).await?;
    Ok(())
}
