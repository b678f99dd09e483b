//! HTTP response type and parser.
//!
//! The parser works on the complete response text, read until the server
//! closed the connection. It expects well-formed CRLF framing and reports a
//! protocol error instead of guessing when the status line, a header line or
//! the blank line after the headers is missing.

use crate::network::error::Error;
use core::fmt;

/// Status code of the sentinel response returned when no connection could be
/// made.
pub const UNREACHABLE_STATUS: u16 = 404;

/// A single response header.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// Header name as sent by the server, trimmed.
    pub name: String,
    /// Header value, trimmed.
    pub value: String,
}

/// Response headers in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Headers(Vec<Header>);

impl Headers {
    /// Creates an empty header map.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts a header. A header with the same name is overwritten in place,
    /// keeping its original position.
    pub fn insert(&mut self, name: &str, value: &str) {
        match self.0.iter_mut().find(|h| h.name == name) {
            Some(header) => header.value = value.to_string(),
            None => self.0.push(Header {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Looks a header up by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// Number of distinct headers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no headers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over headers in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Header> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = core::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A parsed HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Response {
    code: u16,
    headers: Headers,
    body: String,
}

impl Response {
    /// Parses a complete response.
    ///
    /// ```rust
    /// use barehttp::network::application::http::Response;
    ///
    /// let response = Response::parse("HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello")?;
    /// assert_eq!(response.code(), 200);
    /// assert_eq!(response.header("content-type"), Some("text/plain"));
    /// assert_eq!(response.body(), "hello");
    /// # Ok::<(), barehttp::network::error::Error>(())
    /// ```
    pub fn parse(data: &str) -> Result<Self, Error> {
        let lines: Vec<&str> = data.split("\r\n").collect();

        let status_line = lines[0];
        let code_token = status_line
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| Error::MalformedStatusLine(status_line.to_string()))?;
        let code = code_token
            .parse::<u16>()
            .map_err(|_| Error::InvalidStatusCode(code_token.to_string()))?;

        let blank = lines
            .iter()
            .skip(1)
            .position(|line| line.is_empty())
            .map(|i| i + 1)
            .ok_or(Error::MissingHeaderTerminator)?;

        let mut headers = Headers::new();
        for line in &lines[1..blank] {
            let (name, value) = line
                .split_once(':')
                .ok_or_else(|| Error::MalformedHeader(line.to_string()))?;
            headers.insert(name.trim(), value.trim());
        }

        Ok(Self {
            code,
            headers,
            body: lines[blank + 1..].join("\r\n"),
        })
    }

    /// Decodes raw response bytes as UTF-8 and parses them.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, Error> {
        let text = String::from_utf8(data).map_err(|_| Error::InvalidEncoding)?;
        Self::parse(&text)
    }

    /// The sentinel returned when the server could not be reached.
    pub(crate) fn unreachable() -> Self {
        Self {
            code: UNREACHABLE_STATUS,
            headers: Headers::new(),
            body: String::new(),
        }
    }

    /// Status code.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// All headers, in the order received.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Value of header `name`, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the status code is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.code, self.body)
    }
}
