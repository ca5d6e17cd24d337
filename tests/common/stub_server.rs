//! Minimal HTTP/1.1 stub of the Nu validator for integration tests.
//!
//! Records every request it receives (method, path, raw body) so tests can
//! assert on call counts and uploaded bytes. GET requests are answered with
//! a fixed page body; POST requests with a configurable status and body.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// One request as seen on the wire.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct StubOptions {
    /// Body served to GET requests (the "remote page").
    pub get_body: Vec<u8>,
    /// Body served to POST requests (the "validator response").
    pub post_body: Vec<u8>,
    /// HTTP status for POST responses.
    pub post_status: u32,
}

impl Default for StubOptions {
    fn default() -> Self {
        Self {
            get_body: b"<html></html>".to_vec(),
            post_body: br#"{"messages":[]}"#.to_vec(),
            post_status: 200,
        }
    }
}

pub struct StubValidator {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubValidator {
    /// Snapshot of all requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Starts the stub in a background thread. Returns the handle carrying the
/// base URL (e.g. "http://127.0.0.1:12345/"). Runs until the process exits.
pub fn start(opts: StubOptions) -> StubValidator {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let recorded = Arc::clone(&recorded);
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &opts, &recorded));
        }
    });
    StubValidator {
        base_url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(mut stream: TcpStream, opts: &StubOptions, requests: &Mutex<Vec<Recorded>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(5)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(5)));

    // Read until end of headers; part of the body may arrive in the same reads.
    let mut buf: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 8192];
    let header_end = loop {
        match stream.read(&mut chunk) {
            Ok(0) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
            Err(_) => return,
        }
        if let Some(pos) = find_subslice(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
        if buf.len() > 64 * 1024 {
            return;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut lines = head.lines();
    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    let mut expect_continue = false;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            }
            if name.eq_ignore_ascii_case("expect") && value.eq_ignore_ascii_case("100-continue") {
                expect_continue = true;
            }
        }
    }

    // libcurl pauses before sending large bodies until it sees 100 Continue.
    if expect_continue {
        let _ = stream.write_all(b"HTTP/1.1 100 Continue\r\n\r\n");
    }

    let mut body = buf[header_end..].to_vec();
    while body.len() < content_length {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => body.extend_from_slice(&chunk[..n]),
            Err(_) => break,
        }
    }
    body.truncate(content_length);

    requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path,
        body,
    });

    let (status, response_body, content_type) = if method.eq_ignore_ascii_case("GET") {
        (200, opts.get_body.as_slice(), "text/html")
    } else {
        (opts.post_status, opts.post_body.as_slice(), "application/json")
    };
    let reason = if status == 200 { "OK" } else { "Error" };
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        content_type,
        response_body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(response_body);
}

/// First index of `needle` in `haystack`, if any.
pub fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
