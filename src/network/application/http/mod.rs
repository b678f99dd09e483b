//! HTTP/1.1 protocol implementation over raw connections.
//!
//! Every request is one connection: the client opens it, writes a request
//! carrying `Connection: close`, reads until the server hangs up and closes
//! its side. There is no keep-alive, chunked decoding, TLS or redirect
//! handling.
//!
//! The pieces are usable on their own:
//!
//! - [`uri`]: splits a URL into host and request path, merging extra query
//!   arguments
//! - [`message`]: renders GET and POST requests byte for byte
//! - [`response`]: parses a raw response into code, headers and body
//! - [`client`]: ties them to a [`Connect`](crate::network::Connect)
//!   implementation
//!
//! ```rust
//! use barehttp::network::application::http::{message, uri};
//!
//! let (host, path) = uri::parse_url("http://example.com/search?q=rust", &[("page", "2")])?;
//! assert_eq!(path, "/search?q=rust&page=2");
//!
//! let request = message::get_request_message(&host, &path, message::DEFAULT_USER_AGENT);
//! assert!(request.starts_with("GET /search?q=rust&page=2 HTTP/1.1\r\nHost: example.com\r\n"));
//! # Ok::<(), barehttp::network::error::Error>(())
//! ```

/// HTTP client and request dispatch.
pub mod client;

/// Request message builders.
pub mod message;

/// Response type and parser.
pub mod response;

/// URL decomposition.
pub mod uri;

pub use client::{Client, Method, Options};
pub use response::{Header, Headers, Response};
pub use uri::Target;
