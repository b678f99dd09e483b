//! # Application Layer Network Protocols
//!
//! Protocols in this module are written against the traits in
//! [`crate::network`] rather than a concrete socket type, so the same client
//! code runs over [`TcpConnector`](crate::network::tcp::TcpConnector) in
//! production and over an in-memory connection in tests.
//!
//! ## Available Protocols
//!
//! - **[`http`]**: HTTP/1.1 client issuing GET and POST requests
//!
//! ## Usage Pattern
//!
//! 1. Pick a connector for your transport layer
//! 2. Wrap it with the protocol client
//! 3. Use protocol-specific methods for communication
//!
//! ```rust,no_run
//! use barehttp::network::application::http::Client;
//! use barehttp::network::tcp::TcpConnector;
//!
//! let mut client = Client::new(TcpConnector::new());
//! let response = client.get("http://example.com/", &[])?;
//! println!("{}", response.code());
//! # Ok::<(), barehttp::network::error::Error>(())
//! ```

/// HTTP client implementation.
///
/// Provides a blocking HTTP/1.1 client that builds request messages by hand,
/// drains the response until the server closes the connection and parses it.
pub mod http;
