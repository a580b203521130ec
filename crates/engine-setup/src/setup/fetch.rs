//! Blocking HTTP downloads

use crate::error::{Result, SetupError};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use std::time::Duration;

/// Upper bound on buffer pre-allocation from an untrusted `Content-Length`.
const MAX_PREALLOC: u64 = 64 << 20;

/// Source of remote artifacts.
///
/// Provisioning only ever needs two shapes of download: a large file
/// streamed to disk and a small archive held in memory.
pub trait Fetcher {
    /// Stream `url` into `dest`, creating parent directories. Returns bytes written.
    fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<u64>;

    /// Read the whole body of `url` into memory.
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

/// [`Fetcher`] backed by a `ureq` agent.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(connect_timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(connect_timeout)
            .build();
        Self { agent }
    }

    fn get(&self, url: &str) -> Result<ureq::Response> {
        match self.agent.get(url).call() {
            Ok(response) => Ok(response),
            Err(ureq::Error::Status(status, _)) => Err(SetupError::HttpStatus {
                url: url.to_string(),
                status,
            }),
            Err(ureq::Error::Transport(transport)) => Err(SetupError::Http {
                url: url.to_string(),
                message: transport.to_string(),
            }),
        }
    }
}

fn content_length(response: &ureq::Response) -> Option<u64> {
    response
        .header("Content-Length")
        .and_then(|len| len.parse().ok())
}

impl Fetcher for HttpFetcher {
    fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<u64> {
        let response = self.get(url)?;
        if let Some(len) = content_length(&response) {
            tracing::info!("{} is {} bytes", url, len);
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|source| SetupError::io(parent, source))?;
        }
        let mut reader = response.into_reader();
        let mut file = File::create(dest).map_err(|source| SetupError::io(dest, source))?;
        let written =
            io::copy(&mut reader, &mut file).map_err(|source| SetupError::io(dest, source))?;

        tracing::debug!("wrote {} bytes to {}", written, dest.display());
        Ok(written)
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get(url)?;
        let capacity = content_length(&response)
            .and_then(|len| usize::try_from(len.min(MAX_PREALLOC)).ok())
            .unwrap_or(0);
        let mut body = Vec::with_capacity(capacity);
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|source| SetupError::Http {
                url: url.to_string(),
                message: source.to_string(),
            })?;

        tracing::info!("received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
