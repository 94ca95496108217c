use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GogiError>;

/// Failures talking to the repository host.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("GitHub API returned {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
    #[error("Request cancelled")]
    Cancelled,
}

/// Failures while persisting the JSON report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unable to move report into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

#[derive(Error, Debug)]
pub enum GogiError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Error fetching repositories of {account}: {source}")]
    Listing {
        account: String,
        #[source]
        source: GatewayError,
    },
    #[error("Error scanning repository {repo}: {source}")]
    Scan {
        repo: String,
        #[source]
        source: GatewayError,
    },
    #[error("Error writing to output file {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: ReportError,
    },
    #[error("Scan cancelled")]
    Cancelled,
}

impl GogiError {
    /// Fatal errors end the run; scan errors only skip one repository.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, GogiError::Scan { .. })
    }
}
