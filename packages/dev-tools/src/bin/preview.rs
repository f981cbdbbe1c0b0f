//! Document preview
//!
//! Fetches articles from the configured CMS backend and prints them the way
//! the admin console previews them.
//!
//! ```text
//! preview [--html] [--config <file>] [<document id>]
//! ```
//!
//! Without an id every stored article is printed. `BLOGSTUDIO_*` environment
//! variables override the config file.

use anyhow::Context;
use blogstudio_core::config::StoreConfig;
use blogstudio_core::db::{ContentStore, RestContentStore};
use blogstudio_core::models::{DocumentId, StoredDocument};
use blogstudio_core::render::{BlockRenderer, HtmlRenderer, TextRenderer};
use std::path::PathBuf;

#[derive(Debug, Default)]
struct Args {
    html: bool,
    config: Option<PathBuf>,
    id: Option<DocumentId>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args::default();
    let mut raw = std::env::args().skip(1);

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--html" => args.html = true,
            "--config" => {
                let path = raw.next().context("--config needs a file path")?;
                args.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => anyhow::bail!("Unknown option: {}", flag),
            id => args.id = Some(DocumentId::new(id)),
        }
    }
    Ok(args)
}

async fn load_config(path: Option<&PathBuf>) -> anyhow::Result<StoreConfig> {
    let mut config = match path {
        Some(path) => StoreConfig::load(path).await?,
        None => StoreConfig::default(),
    };
    config.apply_env_overrides()?;
    config.validate()?;
    Ok(config)
}

fn print_document(renderer: &dyn BlockRenderer, stored: &StoredDocument) {
    let date = stored
        .display_date()
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("── {} ({}) ──", stored.id, date);
    println!("{}", renderer.render_document(&stored.document));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("preview=info,blogstudio_core=warn")
        .init();

    let args = parse_args()?;
    let config = load_config(args.config.as_ref()).await?;
    let store = RestContentStore::new(&config)?;
    tracing::info!("Reading articles from {}", store.collection_url());

    let renderer: Box<dyn BlockRenderer> = if args.html {
        Box::new(HtmlRenderer::new().with_badges())
    } else {
        Box::new(TextRenderer::new())
    };

    match &args.id {
        Some(id) => {
            let stored = store
                .get(id)
                .await
                .with_context(|| format!("Failed to fetch article {}", id))?;
            print_document(renderer.as_ref(), &stored);
        }
        None => {
            let documents = store.list().await.context("Failed to list articles")?;
            if documents.is_empty() {
                println!("No articles yet.");
            }
            for stored in &documents {
                print_document(renderer.as_ref(), stored);
            }
        }
    }

    Ok(())
}
