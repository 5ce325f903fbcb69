//! Error types for the scaffolding pipeline

use std::path::PathBuf;

/// Result alias used throughout the library
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

/// Everything that can go wrong while resolving, fetching, or exporting a template
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// The request could not be completed (DNS, connect, body read, ...)
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The proxy answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("no published versions found for {module}")]
    VersionListEmpty { module: String },

    /// The downloaded bytes are not a readable zip archive
    #[error("archive for version {version} is not a valid zip file")]
    ArchiveFormat {
        version: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// An archive entry would be written outside the destination directory
    #[error("archive entry '{path}' escapes the destination directory")]
    UnsafeEntryPath { path: String },

    #[error("{}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("project name must not be empty")]
    InvalidProjectName,

    #[error("invalid proxy URL: {url}")]
    InvalidProxyUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from talking to the proxy
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::HttpStatus { .. })
    }
}
