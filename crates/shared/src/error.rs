use thiserror::Error;

/// Failure of a call to the generation service.
///
/// `Display` is the text shown to the user: the response body for remote
/// failures, the transport description otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("{}", remote_message(.status, .body))]
    Remote { status: u16, body: String },
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
    #[error("invalid service endpoint: {0}")]
    InvalidEndpoint(String),
}

impl ServiceError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn remote_message(status: &u16, body: &str) -> String {
    if body.trim().is_empty() {
        format!("request failed with status {status}")
    } else {
        body.to_string()
    }
}
