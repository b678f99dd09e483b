//! Request message builders.
//!
//! Both builders return the complete request as a `String`. Header order is
//! fixed: `Host`, `Connection`, then `Content-Type` and `Content-Length` for
//! POST, then `User-Agent`. Some servers that only scan for expected lines
//! depend on it.

use url::form_urlencoded;

/// `User-Agent` sent with every request unless [`Options`](super::Options)
/// overrides it.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/110.0.0.0 Safari/537.36";

/// Content type of every POST body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Encodes `args` as `application/x-www-form-urlencoded`.
///
/// Spaces become `+`, everything outside `A-Za-z0-9*-._` is percent-escaped
/// and pairs keep their order.
pub fn encode_form(args: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(args.iter())
        .finish()
}

/// Builds a GET request for `path` on `host`.
pub fn get_request_message(host: &str, path: &str, user_agent: &str) -> String {
    format!(
        "GET {path} HTTP/1.1\r\n\
         Host: {host}\r\n\
         Connection: close\r\n\
         User-Agent: {user_agent}\r\n\
         \r\n"
    )
}

/// Builds a POST request carrying `args` as a form-encoded body.
///
/// `Content-Length` is the byte length of the encoded body, `0` when `args`
/// is empty.
pub fn post_request_message(
    host: &str,
    path: &str,
    args: &[(&str, &str)],
    user_agent: &str,
) -> String {
    let body = encode_form(args);
    format!(
        "POST {path} HTTP/1.1\r\n\
         Host: {host}\r\n\
         Connection: close\r\n\
         Content-Type: {FORM_CONTENT_TYPE}\r\n\
         Content-Length: {len}\r\n\
         User-Agent: {user_agent}\r\n\
         \r\n\
         {body}",
        len = body.len(),
    )
}
