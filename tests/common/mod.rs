//! Minimal HTTP stub server for integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// A request as seen by the stub
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: HashMap<String, String>,
}

impl RecordedRequest {
    pub fn query(&self) -> HashMap<String, String> {
        url::Url::parse(&format!("http://stub{}", self.target))
            .expect("request target should be a valid path")
            .query_pairs()
            .into_owned()
            .collect()
    }

    pub fn path(&self) -> String {
        self.target.split('?').next().unwrap_or_default().to_string()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

pub struct StubServer {
    pub addr: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    /// Answer every request with `status`
    pub fn start(status: u16) -> Self {
        Self::spawn(Some(status))
    }

    /// Accept connections but never answer
    pub fn silent() -> Self {
        Self::spawn(None)
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn spawn(status: Option<u16>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().unwrap().to_string();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                let recorded = recorded.clone();
                thread::spawn(move || handle(stream, status, recorded));
            }
        });

        Self { addr, requests }
    }
}

fn handle(mut stream: TcpStream, status: Option<u16>, recorded: Arc<Mutex<Vec<RecordedRequest>>>) {
    let Some(status) = status else {
        // Hold the connection open without replying
        thread::sleep(Duration::from_secs(10));
        return;
    };

    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();

    let mut headers = HashMap::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }

    let content_length: usize = headers.get("content-length").and_then(|v| v.parse().ok()).unwrap_or(0);
    let mut body = vec![0u8; content_length];
    let _ = reader.read_exact(&mut body);

    recorded.lock().unwrap().push(RecordedRequest {
        method,
        target,
        headers,
    });

    let response = format!("HTTP/1.1 {} Stub\r\nContent-Length: 0\r\nConnection: close\r\n\r\n", status);
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
