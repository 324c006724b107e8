use ride_core::ApiError;

/// Failures surfaced by `RideSession`. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The exchange completed but the answer was not usable: a non-200
    /// status (with its body) or an undecodable payload.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The exchange itself failed: refused connection, timeout, broken body.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("session is closed")]
    Closed,
}

impl ClientError {
    /// HTTP status of the failed exchange, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api(err) => err.status(),
            ClientError::Transport(err) => err.status().map(|s| s.as_u16()),
            ClientError::Closed => None,
        }
    }

    pub fn detail(&self) -> Option<String> {
        match self {
            ClientError::Api(err) => err.detail(),
            _ => None,
        }
    }
}
