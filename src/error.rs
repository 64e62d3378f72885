//! Unified error type for the client facade.
//!
//! The crate distinguishes exactly two failure kinds: the network call did
//! not complete ([`TransportError`]), or the response body did not match the
//! expected shape ([`ParseError`]). Neither is retried or recovered from;
//! both propagate directly to the caller, who decides how to surface them.

use thiserror::Error;

use crate::extract::ParseError;
use crate::transport::TransportError;

/// Unified error type for facade operations.
///
/// # Example
///
/// ```rust,ignore
/// use tokopedia_search::{Error, TokopediaClient};
///
/// match client.suggestions("sepatu").await {
///     Ok(keywords) => println!("{keywords:?}"),
///     Err(Error::Transport(e)) => eprintln!("endpoint unreachable: {e}"),
///     Err(Error::Parse(e)) => eprintln!("unexpected response shape: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// The network call could not complete.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body was missing an expected field or wrongly shaped.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_passes_through_transparently() {
        let error = Error::Parse(ParseError::MissingField {
            path: "$[0].data".to_string(),
        });

        assert_eq!(error.to_string(), "missing `$[0].data` in response");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &Error::Parse(ParseError::MissingField {
            path: "$".to_string(),
        });
        let _ = error;
    }
}
