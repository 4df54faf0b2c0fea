//! `fragload fetch <url>` – one-off fragment fetch.

use anyhow::{Context, Result};
use fragload_core::config::FragloadConfig;
use fragload_core::fetch;

pub async fn run_fetch(url: &str, cfg: &FragloadConfig) -> Result<()> {
    let url = url.to_string();
    let opts = cfg.fetch_options();
    let body = tokio::task::spawn_blocking(move || fetch::fetch_text(&url, &opts))
        .await
        .context("fetch task join")??;
    print!("{body}");
    Ok(())
}
