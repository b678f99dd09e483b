//! # barehttp - HTTP/1.1 over raw sockets
//!
//! A small HTTP client that writes requests and reads responses by hand on
//! top of a plain TCP stream. Nothing here hides the protocol: the request is
//! a string you can print, the response is whatever bytes arrived before the
//! server closed the connection.
//!
//! ## Features
//!
//! - **URL decomposition**: host, port and request path, with extra
//!   form-encoded query arguments merged in
//! - **Request builders**: byte-exact GET and form POST messages
//! - **Response parser**: status code, ordered headers and body
//! - **Transport agnostic client**: works over any [`network::Connect`]
//!   implementation, [`network::tcp::TcpConnector`] for real sockets
//!
//! One request per connection, `Connection: close`, read until EOF. There is
//! no keep-alive, chunked decoding, TLS, redirects or timeouts.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use barehttp::network::application::http::Client;
//! use barehttp::network::tcp::TcpConnector;
//!
//! let mut client = Client::new(TcpConnector::new());
//!
//! let response = client.get("http://httpbin.org/get", &[("q", "rust")])?;
//! println!("{}", response.code());
//!
//! let response = client.post("http://httpbin.org/post", &[("a", "1"), ("b", "2 x")])?;
//! println!("{}", response.body());
//! # Ok::<(), barehttp::network::error::Error>(())
//! ```
//!
//! A host that cannot be reached is not an error: the client returns a
//! response with status `404` and an empty body. Errors are reserved for
//! failures after the connection is open and for malformed responses.
//!
//! ## Optional Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for the public data types

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Network abstraction layer, TCP transport and the HTTP client.
///
/// The connection traits live at the top of this module, protocol clients
/// under [`network::application`].
pub mod network;
