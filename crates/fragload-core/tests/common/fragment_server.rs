//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every request with a fixed status and body, and counts the
//! requests served so tests can assert how many were issued.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// Handle to a running test server.
pub struct FragmentServer {
    base_url: String,
    hits: Arc<AtomicUsize>,
}

impl FragmentServer {
    /// Base URL of the server (e.g. "http://127.0.0.1:12345/").
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread that answers every request with
/// `status` and `body`. The server runs until the process exits.
pub fn start(status: u32, body: &str) -> FragmentServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let body = body.as_bytes().to_vec();

    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            hits_srv.fetch_add(1, Ordering::SeqCst);
            let body = body.clone();
            thread::spawn(move || handle(stream, status, &body));
        }
    });

    FragmentServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        hits,
    }
}

fn handle(mut stream: TcpStream, status: u32, body: &[u8]) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    // Drain the request before responding so the client sees a clean reply.
    let mut buf = [0u8; 8192];
    if stream.read(&mut buf).is_err() {
        return;
    }

    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}
