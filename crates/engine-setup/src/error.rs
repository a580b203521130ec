//! Error types for SDK provisioning.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a provisioning step.
///
/// Negative checks (SDK missing, wrong version, user declined) are not
/// errors; they are reported through [`crate::SdkStatus`] and
/// [`crate::EnsureOutcome`].
#[derive(Debug, Error)]
pub enum SetupError {
    /// Transport-level failure talking to the download server.
    #[error("Failed to request {url}: {message}")]
    Http { url: String, message: String },

    /// The server answered with an error status.
    #[error("Failed to download {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Filesystem failure on a known path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The debug libs archive could not be read or unpacked.
    #[error("Invalid archive from {url}: {source}")]
    Archive {
        url: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// The OS refused to open the downloaded installer.
    #[error("Failed to launch installer {}: {source}", path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Console interaction failed.
    #[error("Failed to read answer from console: {0}")]
    Prompt(#[source] std::io::Error),

    /// The configuration file is not valid TOML for [`crate::SetupConfig`].
    #[error("Invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl SetupError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SetupError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SetupError>;
