use super::message::{self, DEFAULT_USER_AGENT};
use super::response::Response;
use super::uri::Target;
use crate::network::error::Error;
use crate::network::{Connect, Connection};
use core::fmt;
use core::str::FromStr;
use log::{debug, warn};

/// Bytes requested from the connection per read.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 1024;

/// Request methods the client can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// `GET`, arguments go in the query string.
    Get,
    /// `POST`, arguments go in a form-encoded body.
    Post,
}

impl Method {
    /// The method token on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }

    /// Maps a command-line method to a [`Method`].
    ///
    /// Only `POST` selects [`Method::Post`]; any other value, recognized or
    /// not, sends a GET. Use [`str::parse`] to reject unknown methods instead.
    pub fn from_command(command: &str) -> Self {
        match command {
            "POST" => Method::Post,
            "GET" => Method::Get,
            other => {
                warn!("unrecognized method {other:?}, sending GET");
                Method::Get
            }
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            other => Err(Error::UnsupportedMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for configuring the HTTP client.
#[derive(Debug, Clone)]
pub struct Options<'a> {
    /// Sent as `User-Agent` on every request.
    pub user_agent: &'a str,
    /// Size of the receive buffer handed to each read.
    pub read_chunk_size: usize,
}

impl Default for Options<'_> {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

/// A blocking HTTP/1.1 client.
///
/// Each call opens a fresh connection through the connector, sends one
/// request, reads until the server closes and parses what arrived. If the
/// connection cannot be opened the call still succeeds, returning a sentinel
/// response with status 404 and an empty body.
#[derive(Debug)]
pub struct Client<'a, N: Connect> {
    connector: N,
    options: Options<'a>,
}

impl<N: Connect> Client<'static, N> {
    /// Creates a client with default [`Options`].
    pub fn new(connector: N) -> Self {
        Self::with_options(connector, Options::default())
    }
}

impl<'a, N: Connect> Client<'a, N> {
    /// Creates a client with the given options.
    pub fn with_options(connector: N, options: Options<'a>) -> Self {
        Self { connector, options }
    }

    /// Sends a GET, appending `args` to the URL's query string.
    pub fn get(&mut self, url: &str, args: &[(&str, &str)]) -> Result<Response, Error> {
        let target = Target::parse(url, args)?;
        let request = message::get_request_message(
            &target.host_header(),
            &target.request_path(),
            self.options.user_agent,
        );
        self.execute(Method::Get, &target, &request)
    }

    /// Sends a POST with `args` as the form-encoded body.
    ///
    /// The request path comes from `url` alone.
    pub fn post(&mut self, url: &str, args: &[(&str, &str)]) -> Result<Response, Error> {
        let target = Target::parse(url, &[])?;
        let request = message::post_request_message(
            &target.host_header(),
            &target.request_path(),
            args,
            self.options.user_agent,
        );
        self.execute(Method::Post, &target, &request)
    }

    /// Sends `method` to `url`.
    pub fn request(
        &mut self,
        method: Method,
        url: &str,
        args: &[(&str, &str)],
    ) -> Result<Response, Error> {
        match method {
            Method::Get => self.get(url, args),
            Method::Post => self.post(url, args),
        }
    }

    /// Dispatches on a method name as typed on a command line, see
    /// [`Method::from_command`].
    pub fn command(
        &mut self,
        url: &str,
        command: &str,
        args: &[(&str, &str)],
    ) -> Result<Response, Error> {
        self.request(Method::from_command(command), url, args)
    }

    fn execute(&mut self, method: Method, target: &Target, request: &str) -> Result<Response, Error> {
        let remote = target.remote();
        let connection = match self.connector.connect(&remote) {
            Ok(connection) => connection,
            Err(e) => {
                warn!("could not connect to {remote}: {e:?}");
                return Ok(Response::unreachable());
            }
        };
        debug!("{method} {} via {remote}", target.request_path());

        let mut guard = ConnectionGuard::new(connection);
        guard.send(request.as_bytes())?;
        let data = guard.receive_all(self.options.read_chunk_size)?;
        guard.close();
        debug!("received {} bytes from {remote}", data.len());

        if data.is_empty() {
            return Err(Error::ConnectionClosed);
        }
        Response::from_bytes(data)
    }
}

/// Owns a connection for the length of one request and closes it on every
/// exit path.
pub struct ConnectionGuard<C: Connection> {
    connection: Option<C>,
}

impl<C: Connection> ConnectionGuard<C> {
    /// Takes ownership of `connection`.
    pub fn new(connection: C) -> Self {
        Self {
            connection: Some(connection),
        }
    }

    /// Writes all of `data` and flushes.
    pub fn send(&mut self, data: &[u8]) -> Result<(), Error> {
        let connection = self.connection.as_mut().ok_or(Error::ConnectionClosed)?;
        connection.write_all(data)?;
        connection.flush().map_err(|_| Error::WriteError)
    }

    /// Reads until the peer closes the connection.
    pub fn receive_all(&mut self, chunk_size: usize) -> Result<Vec<u8>, Error> {
        let connection = self.connection.as_mut().ok_or(Error::ConnectionClosed)?;
        let mut chunk = vec![0u8; chunk_size.max(1)];
        let mut data = Vec::new();
        loop {
            match connection.read(&mut chunk) {
                Ok(0) => return Ok(data),
                Ok(n) => data.extend_from_slice(&chunk[..n]),
                Err(_) => return Err(Error::ReadError),
            }
        }
    }

    /// Closes the connection now instead of on drop.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(connection) = self.connection.take() {
            if let Err(e) = connection.close() {
                debug!("error closing connection: {e:?}");
            }
        }
    }
}

impl<C: Connection> Drop for ConnectionGuard<C> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<C: Connection> fmt::Debug for ConnectionGuard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionGuard")
            .field("open", &self.connection.is_some())
            .finish()
    }
}
