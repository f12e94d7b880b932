use std::backtrace::Backtrace;
use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub backtrace: Backtrace,
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            backtrace: Backtrace::capture(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        if self.backtrace.status() == std::backtrace::BacktraceStatus::Captured {
            write!(f, ", {}", self.backtrace)?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ErrorKind {
    #[error("unexpected error")]
    StdIoError(#[from] std::io::Error),

    #[error("config error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("http error: {0}")]
    HttpError(#[from] http::Error),

    #[error("bad input: {0}")]
    BadInput(String),

    /// Upload rejections are handled as values inside the image module;
    /// this variant only exists so they can cross the http boundary.
    #[error("{0}")]
    Upload(#[from] crate::image::UploadError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("db error: {0}")]
    DbError(String),

    #[cfg(feature = "sled")]
    #[error("sled db error: {0}")]
    SledError(#[from] sled::Error),

    #[error("json decode error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("pot decode error: {0}")]
    PotError(#[from] pot::Error),

    #[error("uuid error: {0}")]
    UuidError(#[from] uuid::Error),

    #[error("other error: {0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(e: String) -> Self {
        Self::new(ErrorKind::Other(e))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::StdIoError(e))
    }
}

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Self::new(ErrorKind::ConfigError(e))
    }
}

impl From<http::Error> for Error {
    fn from(e: http::Error) -> Self {
        Self::new(ErrorKind::HttpError(e))
    }
}

impl From<crate::image::UploadError> for Error {
    fn from(e: crate::image::UploadError) -> Self {
        Self::new(ErrorKind::Upload(e))
    }
}

#[cfg(feature = "sled")]
impl From<sled::Error> for Error {
    fn from(e: sled::Error) -> Self {
        Self::new(ErrorKind::SledError(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::new(ErrorKind::JsonError(e))
    }
}

impl From<pot::Error> for Error {
    fn from(e: pot::Error) -> Self {
        Self::new(ErrorKind::PotError(e))
    }
}

impl From<uuid::Error> for Error {
    fn from(e: uuid::Error) -> Self {
        Self::new(ErrorKind::UuidError(e))
    }
}

impl From<ErrorKind> for Error {
    fn from(k: ErrorKind) -> Self {
        Self::new(k)
    }
}

/// Implements conversion into an http response for all error variants.
///
/// Backtraces are never part of the response and only available through
/// the application logs.
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        use axum::response::{Html, IntoResponse};
        use http::StatusCode;

        match &self.kind {
            ErrorKind::BadInput(_) | ErrorKind::Upload(_) => {
                tracing::trace!("{}", self.to_string());
                (StatusCode::BAD_REQUEST, Html(self.kind.to_string())).into_response()
            }
            ErrorKind::NotFound(_) => {
                tracing::debug!("{}", self.to_string());
                (StatusCode::NOT_FOUND, Html(self.kind.to_string())).into_response()
            }
            _ => {
                tracing::error!("{}", self.to_string());
                (StatusCode::INTERNAL_SERVER_ERROR, "").into_response()
            }
        }
    }
}
