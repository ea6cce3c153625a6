//! CLI entry point for blog-render

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_cli::{render_path, Config, UreqTransport};
use blog_core::BlogClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();

    let filter = if config.debug {
        "blog_cli=debug,blog_core=debug,info"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = BlogClient::new(&config.api);
    tracing::info!(api = client.base_url(), path = %config.path, "rendering");

    let rendered = render_path(
        &config.path,
        &client,
        UreqTransport::new(),
        config.limit,
        &config.search,
    )
    .await;
    println!("{}", rendered.page.into_string());

    // The page is printed either way; a failed fetch still fails the run.
    match rendered.error {
        Some(err) => Err(err).with_context(|| format!("failed to load data for {}", config.path)),
        None => Ok(()),
    }
}
