use std::path::PathBuf;

use tracing::warn;

use crate::config::Backend;

/// All errors that can occur while talking to the club backends.
#[derive(thiserror::Error, Debug)]
pub enum RotaError {
    /// Credentials for a backend are missing, so its adapter cannot be built.
    #[error("{backend} backend unavailable: {missing} is not configured")]
    Unavailable {
        backend: Backend,
        missing: &'static str,
    },

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status code.
    #[error("unexpected status {status} for {url}: {message}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
        message: String,
    },

    /// The response body could not be read or decoded as the expected rows.
    #[error("failed to decode response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A backend URL could not be combined with the query parameters.
    #[error("invalid backend url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A row lacks a required field or holds an unparseable value.
    #[error("malformed {table} row: {reason}")]
    MalformedRow { table: &'static str, reason: String },

    /// The secrets file exists but cannot be read.
    #[error("failed to read secrets file {path}: {source}")]
    SecretsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The secrets file is not valid TOML.
    #[error("failed to parse secrets file {path}: {source}")]
    SecretsParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Coarse classification of [`RotaError`] for hosts deciding what to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Unavailable,
    Backend,
    MalformedRow,
    Config,
}

impl RotaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RotaError::Unavailable { .. } => ErrorKind::Unavailable,
            RotaError::Http { .. }
            | RotaError::UnexpectedStatus { .. }
            | RotaError::ResponseBody { .. }
            | RotaError::InvalidUrl { .. } => ErrorKind::Backend,
            RotaError::MalformedRow { .. } => ErrorKind::MalformedRow,
            RotaError::SecretsRead { .. } | RotaError::SecretsParse { .. } => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, RotaError>;

/// Turns a failed listing into an empty one, handing the error back for display.
///
/// ```
/// use club_rota::{Degrade, RotaError};
/// use club_rota::config::Backend;
///
/// let failed: club_rota::Result<Vec<String>> = Err(RotaError::Unavailable {
///     backend: Backend::Directory,
///     missing: "TI_SUPABASE_URL",
/// });
/// let (rows, error) = failed.degrade();
/// assert!(rows.is_empty());
/// assert!(error.is_some());
/// ```
pub trait Degrade<T> {
    fn degrade(self) -> (T, Option<RotaError>);
}

impl<T: Default> Degrade<T> for Result<T> {
    fn degrade(self) -> (T, Option<RotaError>) {
        match self {
            Ok(value) => (value, None),
            Err(err) => {
                warn!(kind = %err.kind(), error = %err, "degrading to empty result");
                (T::default(), Some(err))
            }
        }
    }
}
