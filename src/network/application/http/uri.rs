//! URL decomposition.
//!
//! A URL is reduced to what an HTTP/1.1 request needs: the authority to
//! connect to and the origin-form request target (`/path?query`). Extra
//! arguments are form-encoded and appended to the query.

use super::message::encode_form;
use crate::network::error::Error;
use url::Url;

/// Port used when the authority does not name one.
pub const DEFAULT_PORT: u16 = 80;

/// Where a request goes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    /// Host name or IP literal, without brackets or port.
    pub host: String,
    /// TCP port, [`DEFAULT_PORT`] unless the URL names one.
    pub port: u16,
    /// Absolute path, never empty.
    pub path: String,
    /// Query string without the leading `?`, `None` when empty.
    pub query: Option<String>,
}

impl Target {
    /// Decomposes `url` and merges `args` into its query.
    pub fn parse(url: &str, args: &[(&str, &str)]) -> Result<Self, Error> {
        let (authority, path, query) = split_url(url)?;
        let (host, port) = get_host_port(&authority)?;
        Ok(Self {
            host,
            port,
            path,
            query: merge_query(query.as_deref(), args),
        })
    }

    /// The request target as it appears on the request line.
    pub fn request_path(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }

    /// Value of the `Host` header.
    ///
    /// Only the host name is sent, never the port. IPv6 literals keep their
    /// brackets.
    pub fn host_header(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        }
    }

    /// `host:port` string handed to a [`Connect`](crate::network::Connect)
    /// implementation.
    pub fn remote(&self) -> String {
        format!("{}:{}", self.host_header(), self.port)
    }
}

/// Splits `url` into `(host, path)`.
///
/// `host` keeps an explicit `:port`; `path` carries a `?query` when the URL
/// has a query or `args` is non-empty. The URL's own query comes first,
/// followed by `&` and the form-encoded arguments.
pub fn parse_url(url: &str, args: &[(&str, &str)]) -> Result<(String, String), Error> {
    let (authority, path, query) = split_url(url)?;
    let path = match merge_query(query.as_deref(), args) {
        Some(query) => format!("{path}?{query}"),
        None => path,
    };
    Ok((authority, path))
}

/// Splits a `host[:port]` authority, defaulting the port to 80.
///
/// ```rust
/// use barehttp::network::application::http::uri::get_host_port;
///
/// assert_eq!(get_host_port("example.com:8080")?, ("example.com".to_string(), 8080));
/// assert_eq!(get_host_port("example.com")?, ("example.com".to_string(), 80));
/// # Ok::<(), barehttp::network::error::Error>(())
/// ```
pub fn get_host_port(host: &str) -> Result<(String, u16), Error> {
    // [v6]:port
    if let Some(rest) = host.strip_prefix('[') {
        let (addr, tail) = rest
            .split_once(']')
            .ok_or_else(|| Error::InvalidUrl(host.to_string()))?;
        let port = match tail {
            "" => DEFAULT_PORT,
            tail => {
                let port = tail
                    .strip_prefix(':')
                    .ok_or_else(|| Error::InvalidPort(tail.to_string()))?;
                parse_port(port)?
            }
        };
        return Ok((addr.to_string(), port));
    }

    match host.split_once(':') {
        Some((name, port)) => Ok((name.to_string(), parse_port(port)?)),
        None => Ok((host.to_string(), DEFAULT_PORT)),
    }
}

fn parse_port(port: &str) -> Result<u16, Error> {
    port.parse::<u16>()
        .map_err(|_| Error::InvalidPort(port.to_string()))
}

/// Returns `(authority, path, query)` with an empty path replaced by `/` and
/// an empty query dropped.
fn split_url(url: &str) -> Result<(String, String, Option<String>), Error> {
    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| Error::InvalidUrl(format!("{url}: missing host")))?;

    // `Url::port` hides a port equal to the scheme default; keep it if written.
    let port = parsed.port().or_else(|| {
        parsed
            .port_or_known_default()
            .filter(|&default| written_port(url) == Some(default))
    });
    let authority = match port {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };
    let path = match parsed.path() {
        "" => "/".to_string(),
        path => path.to_string(),
    };
    let query = parsed
        .query()
        .filter(|q| !q.is_empty())
        .map(str::to_string);

    Ok((authority, path, query))
}

/// Port spelled out in the authority of `url`, if any.
fn written_port(url: &str) -> Option<u16> {
    let rest = &url[url.find("://")? + 3..];
    let authority = rest.split(['/', '?', '#']).next()?;
    let host_port = authority.rsplit('@').next()?;
    let after_host = match host_port.rfind(']') {
        Some(end) => &host_port[end + 1..],
        None => host_port,
    };
    after_host.rsplit_once(':')?.1.parse().ok()
}

fn merge_query(query: Option<&str>, args: &[(&str, &str)]) -> Option<String> {
    let encoded = encode_form(args);
    match (query, encoded.is_empty()) {
        (None, true) => None,
        (None, false) => Some(encoded),
        (Some(query), true) => Some(query.to_string()),
        (Some(query), false) => Some(format!("{query}&{encoded}")),
    }
}
