//! Crate-level error type.

use crate::entur::convert::ParseError;

/// Errors surfaced by the client.
///
/// HTTP and parse failures propagate immediately, with no retries. Cache
/// failures never appear here: an unreadable cache degrades to a miss and
/// a failed cache write to a logged warning.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport failed (connection, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The API answered 2xx but the payload was malformed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Free-text name resolution produced no stop place
    #[error("no stop place found for {query:?}")]
    StopNotFound { query: String },

    /// Client construction failed (e.g. client name not a valid header)
    #[error("invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::Api {
            status: 429,
            body: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "API error 429: rate limited");

        let err = Error::StopNotFound {
            query: "Atlantis".into(),
        };
        assert_eq!(err.to_string(), "no stop place found for \"Atlantis\"");

        let err = Error::Config("bad header".into());
        assert_eq!(err.to_string(), "invalid configuration: bad header");
    }
}
