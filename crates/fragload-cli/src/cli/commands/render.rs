//! `fragload render <manifest>` – run the load pass and emit the page.

use anyhow::{Context, Result};
use fragload_core::config::FragloadConfig;
use fragload_core::loader::Loader;
use fragload_core::notify::StderrNotifier;
use fragload_core::page::Page;
use std::path::Path;
use std::sync::Arc;

pub async fn run_render(manifest: &Path, output: Option<&Path>, cfg: &FragloadConfig) -> Result<()> {
    let page = Page::load(manifest)?;
    let loader = Loader::with_options(Arc::new(StderrNotifier), cfg.fetch_options());
    loader.load_marked(&page).await;

    let assembled = page.assemble();
    match output {
        Some(path) => {
            std::fs::write(path, assembled)
                .with_context(|| format!("write output: {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{assembled}"),
    }
    Ok(())
}
