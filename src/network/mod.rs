//! A small network abstraction layer
//!
//! This module provides the traits the HTTP client is written against. A
//! connection is anything that can be read from, written to and closed; a
//! connector turns a `host:port` string into a fresh connection. The std
//! [`tcp`] transport is the production implementation, tests substitute
//! in-memory ones.
//!

#![deny(unsafe_code)]

/// Common error types for network operations
pub mod error;

/// Application layer protocols
pub mod application;

/// Blocking TCP transport over `std::net::TcpStream`
pub mod tcp;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Close, Connect, Connection, Read, Write};
}

/// Reading side of a connection.
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the connection. `Ok(0)` means the peer closed it.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Writing side of a connection.
pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection, returning how many bytes were accepted
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Write the whole buffer, retrying partial writes.
    fn write_all(&mut self, mut buf: &[u8]) -> Result<(), error::Error> {
        while !buf.is_empty() {
            match self.write(buf) {
                Ok(0) => return Err(error::Error::WriteError),
                Ok(n) => buf = &buf[n..],
                Err(_) => return Err(error::Error::WriteError),
            }
        }
        Ok(())
    }
}

/// Releasing a connection.
pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// A synchronous connection
pub trait Connection: Read + Write + Close {}

/// A synchronous connector (client)
pub trait Connect {
    /// Associated connection type
    type Connection: Connection;
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Open a connection to `remote`, given as `host:port`
    fn connect(&mut self, remote: &str) -> Result<Self::Connection, Self::Error>;
}
