//! Page manifest: the set of containers and which of them load deferred content.
//!
//! A page is described by a TOML manifest of `[[container]]` tables. The page
//! owns container lifecycle; the loader only ever touches content.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::container::{Container, ContainerHandle};

/// One `[[container]]` entry in a page manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ContainerSpec {
    /// Container name, unique within the page.
    pub name: String,
    /// True if the container is marked for async loading.
    #[serde(default)]
    pub marked: bool,
    /// Source URL for the fragment. Missing or empty means inert.
    #[serde(default)]
    pub loader: Option<String>,
    /// Initial rendered content (placeholder until a load succeeds).
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct PageManifest {
    #[serde(default, rename = "container")]
    containers: Vec<ContainerSpec>,
}

/// A page: containers in manifest order.
pub struct Page {
    containers: Vec<ContainerHandle>,
}

impl Page {
    /// Parses a page manifest from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let manifest: PageManifest = toml::from_str(text).context("parse page manifest")?;
        Ok(Self::from_specs(manifest.containers))
    }

    /// Reads and parses a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read page manifest: {}", path.display()))?;
        Self::from_toml(&text)
    }

    pub fn from_specs(specs: Vec<ContainerSpec>) -> Self {
        let containers = specs
            .into_iter()
            .map(|s| Container::new(s.name, s.marked, s.loader, s.content))
            .collect();
        Self { containers }
    }

    /// All containers in manifest order.
    pub fn containers(&self) -> &[ContainerHandle] {
        &self.containers
    }

    /// Containers carrying the async-load marker.
    pub fn marked(&self) -> impl Iterator<Item = &ContainerHandle> + '_ {
        self.containers.iter().filter(|c| c.is_marked())
    }

    /// Checks that every configured loader URL parses as an absolute URL.
    /// Returns `(container name, parse error)` pairs; empty means valid.
    pub fn validate(&self) -> Vec<(String, String)> {
        let mut problems = Vec::new();
        for c in &self.containers {
            if let Some(u) = c.source_url() {
                if let Err(e) = url::Url::parse(u) {
                    problems.push((c.name().to_string(), e.to_string()));
                }
            }
        }
        problems
    }

    /// Joins all container contents in manifest order, one line per container.
    pub fn assemble(&self) -> String {
        let mut out = String::new();
        for c in &self.containers {
            out.push_str(&c.content());
            out.push('\n');
        }
        out
    }
}
