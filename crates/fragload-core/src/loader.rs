//! Deferred content loading for page containers.
//!
//! `load` fetches a container's configured source URL and installs the
//! response body as the container's new content. Failures never reach the
//! caller: they are logged and surfaced through the notifier.

use std::sync::Arc;

use crate::container::{Container, ContainerHandle};
use crate::fetch::{self, FetchOptions};
use crate::notify::{Notifier, NotifyCategory};
use crate::page::Page;

/// Fixed notification message for a failed load.
const LOAD_ERROR_MESSAGE: &str = "async load error";

/// Fetches fragments into containers.
///
/// Holds the transport options and the notification collaborator; cheap to
/// clone, so each spawned load gets its own copy.
#[derive(Clone)]
pub struct Loader {
    options: FetchOptions,
    notifier: Arc<dyn Notifier>,
}

impl Loader {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            options: FetchOptions::default(),
            notifier,
        }
    }

    pub fn with_options(notifier: Arc<dyn Notifier>, options: FetchOptions) -> Self {
        Self { options, notifier }
    }

    /// Loads one container's fragment.
    ///
    /// Reads the configured source URL; a missing or empty URL is a valid,
    /// inert state and returns immediately with no request, no log line and
    /// no notification. Otherwise issues exactly one GET (no custom headers,
    /// no request body). On success the response body replaces the
    /// container's content verbatim; on failure the content is left
    /// untouched, the failing response text is logged, and the notifier is
    /// invoked once with [`NotifyCategory::Error`].
    pub async fn load(&self, container: &ContainerHandle) {
        let Some(url) = container.source_url().map(str::to_string) else {
            return;
        };

        let opts = self.options;
        let fetched = tokio::task::spawn_blocking(move || fetch::fetch_text(&url, &opts)).await;

        match fetched {
            Ok(Ok(body)) => {
                tracing::debug!(
                    container = container.name(),
                    "loaded fragment ({} bytes)",
                    body.len()
                );
                container.replace_content(body);
            }
            Ok(Err(e)) => self.report_failure(container, &e.response_text()),
            Err(e) => self.report_failure(container, &e.to_string()),
        }
    }

    /// Fire-and-forget form of [`Loader::load`]: spawns the load as an async
    /// task and returns immediately. No result is observed by the caller.
    ///
    /// Overlapping loads against the same container are not serialized;
    /// whichever response arrives last wins.
    pub fn spawn_load(&self, container: ContainerHandle) -> tokio::task::JoinHandle<()> {
        let loader = self.clone();
        tokio::spawn(async move { loader.load(&container).await })
    }

    /// Runs the load pass: one load per marked container, all in flight at
    /// once, no ordering guarantee across containers. Returns when every
    /// spawned load has resolved.
    pub async fn load_marked(&self, page: &Page) {
        let mut join_set = tokio::task::JoinSet::new();
        for container in page.marked() {
            let loader = self.clone();
            let container = Arc::clone(container);
            join_set.spawn(async move { loader.load(&container).await });
        }
        while let Some(res) = join_set.join_next().await {
            if let Err(e) = res {
                tracing::error!("load task join: {}", e);
            }
        }
    }

    fn report_failure(&self, container: &Container, detail: &str) {
        tracing::error!(container = container.name(), "async load failed: {}", detail);
        self.notifier.notify(NotifyCategory::Error, LOAD_ERROR_MESSAGE);
    }
}
