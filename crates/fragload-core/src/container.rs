//! Container model: a page element designated to receive async-loaded content.

use std::sync::{Arc, RwLock};

/// Shared handle to a container, so a spawned load task can mutate the
/// container it was spawned for.
pub type ContainerHandle = Arc<Container>;

/// A page element whose rendered content can be replaced.
///
/// Containers are created and destroyed by the surrounding page; the loader
/// only swaps the content in place. `loader` holds the configured source URL
/// for the fragment; a missing or empty value leaves the container inert.
#[derive(Debug)]
pub struct Container {
    name: String,
    marked: bool,
    loader: Option<String>,
    content: RwLock<String>,
}

impl Container {
    pub fn new(
        name: impl Into<String>,
        marked: bool,
        loader: Option<String>,
        content: impl Into<String>,
    ) -> ContainerHandle {
        Arc::new(Self {
            name: name.into(),
            marked,
            loader,
            content: RwLock::new(content.into()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if the container carries the async-load marker.
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    /// Configured source URL. Missing and empty are the same inert state,
    /// so both come back as `None`.
    pub fn source_url(&self) -> Option<&str> {
        match self.loader.as_deref() {
            None | Some("") => None,
            Some(url) => Some(url),
        }
    }

    /// Current rendered content.
    pub fn content(&self) -> String {
        self.content.read().unwrap().clone()
    }

    /// Replaces the rendered content, discarding the prior content entirely.
    pub fn replace_content(&self, new_content: String) {
        *self.content.write().unwrap() = new_content;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_url_missing_and_empty_are_inert() {
        let none = Container::new("a", true, None, "");
        assert!(none.source_url().is_none());

        let empty = Container::new("b", true, Some(String::new()), "");
        assert!(empty.source_url().is_none());
    }

    #[test]
    fn source_url_present() {
        let c = Container::new("news", true, Some("https://example.com/f".to_string()), "");
        assert_eq!(c.source_url(), Some("https://example.com/f"));
    }

    #[test]
    fn replace_content_discards_prior() {
        let c = Container::new("news", true, None, "<p>old</p>");
        assert_eq!(c.content(), "<p>old</p>");
        c.replace_content("<p>new</p>".to_string());
        assert_eq!(c.content(), "<p>new</p>");
    }
}
