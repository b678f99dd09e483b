//! Common error types for network operations

use thiserror::Error;

/// A common error type for network and HTTP operations.
///
/// Transport failures while *connecting* never surface through this type from
/// the HTTP client; they are folded into the sentinel
/// [`Response`](crate::network::application::http::Response). Everything that
/// goes wrong after a connection is open, and every protocol violation in the
/// response, is reported here.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// The URL could not be decomposed into a host and path.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// The port embedded in a host string is not a valid TCP port.
    #[error("invalid port: {0}")]
    InvalidPort(String),
    /// The method is neither `GET` nor `POST`.
    #[error("unsupported method: {0:?}")]
    UnsupportedMethod(String),
    /// The host could not be resolved to a socket address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// A connection attempt was refused or the host was unreachable.
    #[error("connection refused")]
    ConnectionRefused,
    /// An error occurred during a write operation.
    #[error("write error")]
    WriteError,
    /// An error occurred during a read operation.
    #[error("read error")]
    ReadError,
    /// The connection was closed before any response bytes arrived.
    #[error("connection closed")]
    ConnectionClosed,
    /// Shutting the connection down failed.
    #[error("close error")]
    CloseError,
    /// The response bytes are not valid UTF-8.
    #[error("response is not valid utf-8")]
    InvalidEncoding,
    /// The status line is missing or has no status code token.
    #[error("malformed status line: {0:?}")]
    MalformedStatusLine(String),
    /// The status code token is not an integer.
    #[error("invalid status code: {0:?}")]
    InvalidStatusCode(String),
    /// A header line has no `:` separator.
    #[error("malformed header line: {0:?}")]
    MalformedHeader(String),
    /// No blank line terminates the header block.
    #[error("response has no blank line after the headers")]
    MissingHeaderTerminator,
}
