use roster_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Any failure fetching or decoding the remote customer list.
///
/// The sync coordinator treats every variant as one opaque failure class and
/// falls back to the cached view; the variants exist for diagnostics only.
#[derive(Error, Debug)]
pub enum RemoteFetchError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Malformed remote response: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },
}

impl RemoteFetchError {
    #[track_caller]
    pub fn http<S: Into<String>>(message: S) -> Self {
        RemoteFetchError::Http {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source: None,
        }
    }

    #[track_caller]
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        RemoteFetchError::Malformed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for RemoteFetchError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        RemoteFetchError::Http {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: Some(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, RemoteFetchError>;
