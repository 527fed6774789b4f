use std::{error::Error, fmt};

use http::StatusCode;
use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use {
    axum::{
        response::{IntoResponse, Response},
        Json,
    },
    deadpool_sqlite::{HookError, InteractError, PoolError},
    tracing::error,
};

/// Body of every non-2xx api response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors an operation is allowed to report to the caller verbatim
pub trait ResponseError: Error {
    /// Sent instead of the real cause when the store fails. Store errors
    /// never reach the client.
    const FALLBACK_MESSAGE: &'static str;
}

/// For operations with no errors of their own
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Nothing {}

impl fmt::Display for Nothing {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl Error for Nothing {}

impl ResponseError for Nothing {
    const FALLBACK_MESSAGE: &'static str = "Something went wrong";
}

pub enum ServerError<T> {
    /// A client error with the status it maps to
    Inner { code: StatusCode, inner: T },
    /// Anything that went wrong talking to the store
    Persistence { message: String },
}

impl<T> ServerError<T> {
    pub fn persistence<S: Into<String>>(message: S) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    pub fn code(&self) -> StatusCode {
        match self {
            Self::Inner { code, .. } => *code,
            Self::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<T: ResponseError> ServerError<T> {
    /// What the client gets to see
    pub fn client_message(&self) -> String {
        match self {
            Self::Inner { inner, .. } => inner.to_string(),
            Self::Persistence { .. } => T::FALLBACK_MESSAGE.to_owned(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ServerError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inner { code, inner } => write!(f, "ServerError {code}: {inner:?}"),
            Self::Persistence { message } => write!(f, "ServerError persistence: {message}"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for ServerError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inner { inner, .. } => write!(f, "{inner}"),
            Self::Persistence { message } => write!(f, "{message}"),
        }
    }
}

impl<T: fmt::Debug + fmt::Display> Error for ServerError<T> {}

#[cfg(feature = "backend")]
impl<T> From<rusqlite::Error> for ServerError<T> {
    #[track_caller]
    fn from(err: rusqlite::Error) -> Self {
        Self::persistence(format!("rusqlite: {err:?}"))
    }
}

#[cfg(feature = "backend")]
impl<T> From<InteractError> for ServerError<T> {
    #[track_caller]
    fn from(err: InteractError) -> Self {
        Self::persistence(format!("interact: {err:?}"))
    }
}

#[cfg(feature = "backend")]
impl<T> From<PoolError> for ServerError<T> {
    #[track_caller]
    fn from(err: PoolError) -> Self {
        Self::persistence(format!("pool: {err:?}"))
    }
}

#[cfg(feature = "backend")]
impl From<ServerError<Nothing>> for HookError {
    fn from(err: ServerError<Nothing>) -> Self {
        Self::Message(err.to_string())
    }
}

// Render ServerError into a json response
#[cfg(feature = "backend")]
impl<T: ResponseError> IntoResponse for ServerError<T> {
    fn into_response(self) -> Response {
        if let Self::Persistence { message } = &self {
            error!(detail = %message, "Store operation failed");
        }
        let body = ErrorResponse {
            error: self.client_message(),
        };
        (self.code(), Json(body)).into_response()
    }
}
