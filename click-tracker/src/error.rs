use thiserror::Error;

/// A request that never produced an HTTP response (network failure, CORS
/// rejection, malformed URL). The message is the platform's own.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        TransportError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Why a single request failed.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum FailureCause {
    #[error("server responded with status {0}")]
    Status(u16),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("{0}")]
    Decode(String),
}

impl From<serde_json::Error> for FailureCause {
    fn from(err: serde_json::Error) -> Self {
        FailureCause::Decode(err.to_string())
    }
}

/// A failed operation. `Display` is the message shown to the user: the fixed
/// text for a non-2xx status, the underlying message otherwise.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TrackerError {
    #[error("{}", user_message(.0, "Failed to fetch counts"))]
    FetchCounts(FailureCause),
    #[error("{}", user_message(.0, "Failed to send click"))]
    SendClick(FailureCause),
    #[error("{}", user_message(.0, "Failed to clear clicks"))]
    ClearClicks(FailureCause),
}

fn user_message(cause: &FailureCause, status_text: &str) -> String {
    match cause {
        FailureCause::Status(_) => status_text.to_owned(),
        other => other.to_string(),
    }
}

impl TrackerError {
    pub fn cause(&self) -> &FailureCause {
        match self {
            TrackerError::FetchCounts(cause)
            | TrackerError::SendClick(cause)
            | TrackerError::ClearClicks(cause) => cause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_failures_use_fixed_text() {
        assert_eq!(
            "Failed to fetch counts",
            TrackerError::FetchCounts(FailureCause::Status(503)).to_string()
        );
        assert_eq!(
            "Failed to send click",
            TrackerError::SendClick(FailureCause::Status(500)).to_string()
        );
        assert_eq!(
            "Failed to clear clicks",
            TrackerError::ClearClicks(FailureCause::Status(404)).to_string()
        );
    }

    #[test]
    fn test_transport_failures_use_underlying_message() {
        let err = TrackerError::SendClick(TransportError::new("Failed to fetch").into());
        assert_eq!("Failed to fetch", err.to_string());
    }

    #[test]
    fn test_decode_failures_use_underlying_message() {
        let cause: FailureCause = serde_json::from_str::<u64>("oops").unwrap_err().into();
        let expected = cause.to_string();
        assert_eq!(expected, TrackerError::FetchCounts(cause).to_string());
    }
}
