//! Minimal HTTP/1.1 server that answers with scripted statuses and redirects.
//!
//! Each route is matched on method (or any method) and exact path; unknown
//! routes get 404. Every request is recorded so tests can assert on the
//! method sequence and the headers that were sent.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub location: Option<String>,
}

impl Reply {
    pub fn status(status: u16) -> Self {
        Self {
            status,
            location: None,
        }
    }

    pub fn redirect(status: u16, location: impl Into<String>) -> Self {
        Self {
            status,
            location: Some(location.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Route {
    /// `None` matches any method.
    pub method: Option<&'static str>,
    pub path: &'static str,
    pub reply: Reply,
}

pub fn any(path: &'static str, reply: Reply) -> Route {
    Route {
        method: None,
        path,
        reply,
    }
}

pub fn on(method: &'static str, path: &'static str, reply: Reply) -> Route {
    Route {
        method: Some(method),
        path,
        reply,
    }
}

/// A recorded request.
#[derive(Debug, Clone)]
pub struct Hit {
    pub method: String,
    pub path: String,
    pub user_agent: Option<String>,
}

pub struct RedirectServer {
    /// e.g. "http://127.0.0.1:12345"
    pub base: String,
    hits: Arc<Mutex<Vec<Hit>>>,
}

impl RedirectServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. `routes` receives the base URL so
/// absolute redirect targets can point back at the server. The server runs
/// until the process exits.
pub fn start(routes: impl FnOnce(&str) -> Vec<Route>) -> RedirectServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let base = format!("http://127.0.0.1:{}", port);
    let routes = Arc::new(routes(&base));
    let hits = Arc::new(Mutex::new(Vec::new()));
    let server_hits = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let hits = Arc::clone(&server_hits);
            thread::spawn(move || handle(stream, &routes, &hits));
        }
    });
    RedirectServer { base, hits }
}

fn handle(mut stream: std::net::TcpStream, routes: &[Route], hits: &Mutex<Vec<Hit>>) {
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
    let hit = parse_request(request);
    let reply = routes
        .iter()
        .find(|r| {
            r.path == hit.path && r.method.map_or(true, |m| m.eq_ignore_ascii_case(&hit.method))
        })
        .map(|r| r.reply.clone())
        .unwrap_or_else(|| Reply::status(404));
    hits.lock().unwrap().push(hit);

    let location = reply
        .location
        .as_deref()
        .map(|l| format!("Location: {}\r\n", l))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\n{}\r\n",
        reply.status,
        reason(reply.status),
        location
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn parse_request(request: &str) -> Hit {
    let mut lines = request.lines();
    let first = lines.next().unwrap_or("");
    let mut parts = first.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("").to_string();
    let user_agent = lines.find_map(|line| {
        let (name, value) = line.split_once(':')?;
        name.trim()
            .eq_ignore_ascii_case("user-agent")
            .then(|| value.trim().to_string())
    });
    Hit {
        method,
        path,
        user_agent,
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        301 => "Moved Permanently",
        302 => "Found",
        307 => "Temporary Redirect",
        404 => "Not Found",
        405 => "Method Not Allowed",
        _ => "Status",
    }
}
