use serde::{Deserialize, Serialize};

/// Why a remote request did not produce a usable body
///
/// This is the serializable form carried by messages; the HTTP layer keeps
/// the underlying transport error and converts into this at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchFailure {
    /// Connection, DNS, TLS or similar transport-level error
    Transport(String),
    /// The server answered with a non-success status code
    Status(u16),
    /// The body could not be decoded as JSON
    Malformed(String),
}

impl FetchFailure {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchFailure::Status(code) => Some(*code),
            FetchFailure::Transport(_) | FetchFailure::Malformed(_) => None,
        }
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchFailure::Transport(message) => write!(f, "network error: {message}"),
            FetchFailure::Status(code) => write!(f, "HTTP {code}"),
            FetchFailure::Malformed(message) => write!(f, "malformed response: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_status_code() {
        assert_eq!(FetchFailure::Status(404).status(), Some(404));
        assert_eq!(FetchFailure::Transport("refused".into()).status(), None);
        assert_eq!(FetchFailure::Malformed("eof".into()).status(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(FetchFailure::Status(401).to_string(), "HTTP 401");
        assert_eq!(
            FetchFailure::Transport("connection refused".into()).to_string(),
            "network error: connection refused"
        );
    }
}
