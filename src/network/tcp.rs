//! Blocking TCP transport.
//!
//! [`TcpConnector`] resolves `host:port` and opens a [`TcpConnection`]. Both
//! are thin adapters from `std::net` onto the crate's connection traits; the
//! HTTP client does not know it is talking to a socket.

use crate::network::error::Error;
use crate::network::{Close, Connect, Connection, Read, Write};
use log::debug;
use std::io::{ErrorKind, Read as StdRead, Write as StdWrite};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};

/// Opens blocking TCP connections.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

impl TcpConnector {
    /// Creates a new connector.
    pub fn new() -> Self {
        Self
    }
}

impl Connect for TcpConnector {
    type Connection = TcpConnection;
    type Error = Error;

    fn connect(&mut self, remote: &str) -> Result<Self::Connection, Self::Error> {
        let addrs: Vec<_> = remote
            .to_socket_addrs()
            .map_err(|e| Error::InvalidAddress(format!("{remote}: {e}")))?
            .collect();
        if addrs.is_empty() {
            return Err(Error::InvalidAddress(remote.to_string()));
        }

        let stream = TcpStream::connect(&addrs[..]).map_err(|e| {
            debug!("connect to {remote} failed: {e}");
            Error::ConnectionRefused
        })?;
        debug!("connected to {remote}");
        Ok(TcpConnection { stream })
    }
}

/// A single open TCP stream.
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
}

impl TcpConnection {
    /// Wraps an already connected stream.
    pub fn from_stream(stream: TcpStream) -> Self {
        Self { stream }
    }
}

impl Read for TcpConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.stream.read(buf) {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => return Err(Error::ReadError),
            }
        }
    }
}

impl Write for TcpConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.stream.write(buf).map_err(|_| Error::WriteError)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.stream.flush().map_err(|_| Error::WriteError)
    }
}

impl Close for TcpConnection {
    type Error = Error;

    fn close(self) -> Result<(), Self::Error> {
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            // The peer closing first is the normal end of a response.
            Err(e) if e.kind() == ErrorKind::NotConnected => Ok(()),
            Err(e) => {
                debug!("shutdown failed: {e}");
                Err(Error::CloseError)
            }
        }
    }
}

impl Connection for TcpConnection {}
