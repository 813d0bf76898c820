use {crate::record::ValidationError, http::StatusCode, thiserror::Error as ThisError};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type LookupResult<T> = Result<T, LookupError>;

#[derive(ThisError, Debug)]
pub enum TransportError {
    #[error("lookup canceled")]
    Canceled,

    #[error("lookup deadline exceeded")]
    DeadlineExceeded,

    #[error("network error: {0}")]
    Network(BoxError),
}

impl From<context::Error> for TransportError {
    fn from(err: context::Error) -> Self {
        match err {
            context::Error::Canceled => Self::Canceled,
            context::Error::DeadlineExceeded => Self::DeadlineExceeded,
        }
    }
}

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::DeadlineExceeded
        } else {
            Self::Network(err.into())
        }
    }
}

#[derive(ThisError, Debug)]
pub enum LookupError {
    #[error("invalid request: {0}")]
    Request(#[from] http::Error),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("unexpected response status: {}", status_line(.code, .reason))]
    Status {
        code: StatusCode,
        reason: Option<String>,
    },

    #[error("failed to read response body: {0}")]
    Body(BoxError),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid response: {0}")]
    Validation(#[from] ValidationError),
}

fn status_line(code: &StatusCode, reason: &Option<String>) -> String {
    match reason {
        Some(reason) => format!("{} {reason}", code.as_u16()),
        None => code.as_u16().to_string(),
    }
}

impl LookupError {
    /// Whether the lookup was aborted by canceling its context.
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Transport(TransportError::Canceled))
    }

    /// Whether the lookup ran past its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(TransportError::DeadlineExceeded))
    }
}
