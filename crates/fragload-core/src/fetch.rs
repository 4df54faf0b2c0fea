//! Blocking HTTP GET of a text body via the curl crate (libcurl).
//!
//! Runs in the current thread; call from `spawn_blocking` when used from
//! async code. Success is a completed transfer with a 2xx status; anything
//! else is a [`FetchError`] carrying enough detail to log the failing
//! response.

use std::time::Duration;
use thiserror::Error;

/// Transport options for a fragment fetch.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    /// Overall timeout for the whole transfer.
    pub timeout: Duration,
    pub max_redirections: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: Duration::from_secs(300),
            max_redirections: 10,
        }
    }
}

/// Error returned by a fetch (curl failure or non-2xx response).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, invalid URL, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status. The body is kept for diagnostics.
    #[error("HTTP {code}")]
    Http { code: u32, body: String },
}

impl FetchError {
    /// Response text (or equivalent failure detail) for diagnostics.
    pub fn response_text(&self) -> String {
        match self {
            FetchError::Curl(e) => e.to_string(),
            FetchError::Http { body, .. } => body.clone(),
        }
    }
}

/// Performs a single GET and returns the response body as text.
///
/// No custom headers and no request body; the URL is used verbatim.
/// Redirects are followed up to the configured limit. Non-UTF-8 bodies are
/// converted lossily.
pub fn fetch_text(url: &str, opts: &FetchOptions) -> Result<String, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirections)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http {
            code,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}
