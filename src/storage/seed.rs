//! Seed resources
//!
//! A seed resource supplies an initial movement list the first time FinOrden
//! runs against an empty store. It can be a local JSON file or an HTTP(S) URL.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::FinordenError;

/// Somewhere a JSON movement array can be fetched from
pub trait SeedSource {
    /// Fetch the raw body of the seed resource
    fn fetch(&self) -> Result<String, FinordenError>;

    /// Where the seed comes from, for log messages
    fn describe(&self) -> String;
}

/// Seed read from a local file
#[derive(Debug, Clone)]
pub struct FileSeed {
    path: PathBuf,
}

impl FileSeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeedSource for FileSeed {
    fn fetch(&self) -> Result<String, FinordenError> {
        std::fs::read_to_string(&self.path).map_err(|e| {
            FinordenError::Seed(format!("Failed to read {}: {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Seed fetched over HTTP(S) with a bounded wait
#[derive(Debug, Clone)]
pub struct HttpSeed {
    url: String,
    timeout: Duration,
}

impl HttpSeed {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

impl SeedSource for HttpSeed {
    fn fetch(&self) -> Result<String, FinordenError> {
        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();

        let response = agent.get(&self.url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => {
                FinordenError::Seed(format!("{} returned status {}", self.url, code))
            }
            other => FinordenError::Seed(format!("Failed to fetch {}: {}", self.url, other)),
        })?;

        response.into_string().map_err(|e| {
            FinordenError::Seed(format!("Failed to read body of {}: {}", self.url, e))
        })
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Pick the seed implementation for a configured location
///
/// `http://` and `https://` locations are fetched over the network; anything
/// else is treated as a file path.
pub fn seed_source_for(location: &str, timeout: Duration) -> Box<dyn SeedSource> {
    let location = location.trim();
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSeed::new(location, timeout))
    } else {
        Box::new(FileSeed::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;
    use tempfile::TempDir;

    /// Serve `connections` requests on localhost, each answered with `status`
    fn serve_status(status: &'static str, connections: usize) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            for stream in listener.incoming().take(connections) {
                let mut stream = stream.unwrap();
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut line = String::new();
                while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                    line.clear();
                }
                let body = "not here";
                write!(
                    stream,
                    "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                )
                .unwrap();
            }
        });

        format!("http://{}/demo.json", addr)
    }

    #[test]
    fn test_file_seed_reads_body() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("demo.json");
        std::fs::write(&path, "[]").unwrap();

        let seed = FileSeed::new(&path);
        assert_eq!(seed.fetch().unwrap(), "[]");
    }

    #[test]
    fn test_missing_file_seed_fails() {
        let temp_dir = TempDir::new().unwrap();
        let seed = FileSeed::new(temp_dir.path().join("missing.json"));

        let err = seed.fetch().unwrap_err();
        assert!(matches!(err, FinordenError::Seed(_)));
    }

    #[test]
    fn test_location_dispatch() {
        let timeout = Duration::from_secs(1);
        assert_eq!(
            seed_source_for("https://example.com/demo.json", timeout).describe(),
            "https://example.com/demo.json"
        );
        assert_eq!(
            seed_source_for(" data/demo.json ", timeout).describe(),
            "data/demo.json"
        );
    }

    #[test]
    fn test_unreachable_http_seed_fails() {
        // Port 9 (discard) on localhost is closed on test machines
        let seed = HttpSeed::new("http://127.0.0.1:9/demo.json", Duration::from_millis(500));
        assert!(matches!(seed.fetch(), Err(FinordenError::Seed(_))));
    }

    #[test]
    fn test_http_error_status_fails() {
        let url = serve_status("404 Not Found", 1);
        let seed = HttpSeed::new(url, Duration::from_secs(5));

        match seed.fetch() {
            Err(FinordenError::Seed(message)) => assert!(message.contains("404")),
            other => panic!("expected seed error, got {:?}", other),
        }
    }

    #[test]
    fn test_http_error_status_falls_back_to_defaults() {
        use crate::storage::{LoadSource, MemoryStore, PersistenceGateway};
        use chrono::NaiveDate;

        let url = serve_status("404 Not Found", 1);
        let gateway = PersistenceGateway::new(
            Box::new(MemoryStore::new()),
            seed_source_for(&url, Duration::from_secs(5)),
        );

        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let outcome = gateway.load(today);
        assert_eq!(outcome.source, LoadSource::Defaults);
        assert_eq!(outcome.movements.len(), 3);
    }
}
