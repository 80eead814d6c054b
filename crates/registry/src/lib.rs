use std::{error::Error, fmt};

pub mod store;

pub use store::TrackRegistry;

/// The two client-facing failure kinds of the service. Everything the
/// parser can report (unreachable URL, malformed file, unsupported
/// content) collapses into `BadRequest`.
#[derive(Debug)]
pub enum RequestError {
    NotFound,
    BadRequest(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::NotFound => write!(f, "not found"),
            RequestError::BadRequest(why) => write!(f, "bad request: {}", why),
        }
    }
}

impl Error for RequestError {}

impl From<igc::ParseError> for RequestError {
    fn from(why: igc::ParseError) -> Self {
        RequestError::BadRequest(why.to_string())
    }
}

pub type RequestResult<O> = Result<O, RequestError>;
