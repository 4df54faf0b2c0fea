//! `fragload check <manifest>` – validate a page manifest.

use anyhow::{bail, Result};
use fragload_core::page::Page;
use std::path::Path;

pub fn run_check(manifest: &Path) -> Result<()> {
    let page = Page::load(manifest)?;

    println!("{:<20} {:<8} {}", "NAME", "MARKED", "LOADER");
    for c in page.containers() {
        println!(
            "{:<20} {:<8} {}",
            c.name(),
            if c.is_marked() { "yes" } else { "no" },
            c.source_url().unwrap_or("-")
        );
    }

    let problems = page.validate();
    if !problems.is_empty() {
        for (name, err) in &problems {
            eprintln!("invalid loader URL on '{}': {}", name, err);
        }
        bail!("{} invalid loader URL(s)", problems.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_rejects_invalid_loader_url() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("page.toml");
        std::fs::write(
            &manifest_path,
            r#"
            [[container]]
            name = "bad"
            marked = true
            loader = "not a url"
            "#,
        )
        .unwrap();

        assert!(run_check(&manifest_path).is_err());
    }

    #[test]
    fn check_accepts_valid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("page.toml");
        std::fs::write(
            &manifest_path,
            r#"
            [[container]]
            name = "news"
            marked = true
            loader = "https://example.com/fragments/news"
            "#,
        )
        .unwrap();

        assert!(run_check(&manifest_path).is_ok());
    }
}
