// SPDX-License-Identifier: MPL-2.0
use crate::gateway::Rejection;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    /// The request never produced a response (connection refused, TLS, ...).
    #[error("Transport Error: {0}")]
    Transport(String),
    /// The response body was not the JSON we expected.
    #[error("Decode Error: {0}")]
    Decode(String),
    #[error("Invalid URL: {0}")]
    Url(String),
    /// The backend answered with a non-2xx status.
    #[error("{0}")]
    Rejected(Rejection),
}

impl Error {
    /// Text suitable for a toast. Rejections show the backend message as-is.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Error::Rejected(rejection) => rejection.message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<Rejection> for Error {
    fn from(rejection: Rejection) -> Self {
        Error::Rejected(rejection)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Url(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
