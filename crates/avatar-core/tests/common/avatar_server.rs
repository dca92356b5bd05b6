//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single static body with a configurable status. Can answer the first
//! request path with a redirect to `/final` to exercise redirect following.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct AvatarServerOptions {
    /// Status line sent with the body, e.g. "200 OK" or "404 Not Found".
    pub status: &'static str,
    /// If true, any path other than `/final` gets a 302 to `/final`.
    pub redirect: bool,
}

impl Default for AvatarServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            redirect: false,
        }
    }
}

pub struct AvatarServer {
    /// URL of the image, e.g. "http://127.0.0.1:12345/avatar.png".
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl AvatarServer {
    /// Number of GET requests served so far (redirects included).
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `body` with 200 OK.
/// The server runs until the process exits.
pub fn start(body: Vec<u8>) -> AvatarServer {
    start_with_options(body, AvatarServerOptions::default())
}

pub fn start_with_options(body: Vec<u8>, opts: AvatarServerOptions) -> AvatarServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let hits = Arc::clone(&hits_srv);
            thread::spawn(move || handle(stream, &body, opts, &hits));
        }
    });
    AvatarServer {
        url: format!("http://127.0.0.1:{}/avatar.png", port),
        hits,
    }
}

/// A URL on a port nobody listens on: the listener is bound then dropped.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/avatar.png", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &[u8],
    opts: AvatarServerOptions,
    hits: &AtomicUsize,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");
    if !method.eq_ignore_ascii_case("GET") {
        let _ =
            stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    hits.fetch_add(1, Ordering::SeqCst);

    if opts.redirect && path != "/final" {
        let _ = stream.write_all(
            b"HTTP/1.1 302 Found\r\nLocation: /final\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}
