use barehttp::network::application::http::Client;
use barehttp::network::tcp::TcpConnector;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::process::Command;
use std::thread::{self, JoinHandle};

/// Accepts one connection, reads a request (headers plus `Content-Length`
/// bytes of body), answers with `response` and hangs up. The join handle
/// yields the request text.
fn serve_once(response: String) -> (u16, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);

        let mut request = String::new();
        loop {
            let mut line = String::new();
            let n = reader.read_line(&mut line).unwrap();
            request.push_str(&line);
            if n == 0 || line == "\r\n" {
                break;
            }
        }

        let length = request
            .lines()
            .find_map(|line| line.strip_prefix("Content-Length:"))
            .map(|value| value.trim().parse::<usize>().unwrap())
            .unwrap_or(0);
        let mut body = vec![0u8; length];
        reader.read_exact(&mut body).unwrap();
        request.push_str(&String::from_utf8(body).unwrap());

        let mut stream = reader.into_inner();
        stream.write_all(response.as_bytes()).unwrap();
        request
    });

    (port, handle)
}

fn closed_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[test]
fn test_get_over_loopback() {
    let (port, server) =
        serve_once("HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nX-Test: yes\r\n\r\nhello".into());
    let mut client = Client::new(TcpConnector::new());

    let response = client
        .get(&format!("http://127.0.0.1:{port}/greet"), &[("name", "a b")])
        .unwrap();

    assert_eq!(response.code(), 200);
    assert_eq!(response.header("x-test"), Some("yes"));
    assert_eq!(response.body(), "hello");

    let request = server.join().unwrap();
    assert!(request.starts_with(
        "GET /greet?name=a+b HTTP/1.1\r\nHost: 127.0.0.1\r\nConnection: close\r\nUser-Agent: "
    ));
    assert!(request.ends_with("\r\n\r\n"));
}

#[test]
fn test_post_over_loopback() {
    let (port, server) = serve_once("HTTP/1.1 200 OK\r\n\r\nstored".into());
    let mut client = Client::new(TcpConnector::new());

    let response = client
        .post(&format!("http://127.0.0.1:{port}/submit"), &[("a", "1"), ("b", "2 x")])
        .unwrap();
    assert_eq!(response.code(), 200);
    assert_eq!(response.body(), "stored");

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /submit HTTP/1.1\r\n"));
    assert!(request.contains("\r\nContent-Length: 9\r\n"));
    assert!(request.ends_with("\r\n\r\na=1&b=2+x"));
}

#[test]
fn test_large_body_is_drained() {
    let body = "0123456789".repeat(10_000);
    let (port, server) = serve_once(format!("HTTP/1.1 200 OK\r\n\r\n{body}"));
    let mut client = Client::new(TcpConnector::new());

    let response = client
        .get(&format!("http://127.0.0.1:{port}/"), &[])
        .unwrap();
    assert_eq!(response.body().len(), body.len());
    assert_eq!(response.body(), body);
    server.join().unwrap();
}

#[test]
fn test_refused_connection_returns_sentinel() {
    let port = closed_port();
    let mut client = Client::new(TcpConnector::new());

    let response = client
        .get(&format!("http://127.0.0.1:{port}/"), &[])
        .unwrap();
    assert_eq!(response.code(), 404);
    assert_eq!(response.body(), "");
}

#[test]
fn test_unresolvable_host_returns_sentinel() {
    let mut client = Client::new(TcpConnector::new());
    let response = client.get("http://host.invalid/", &[]).unwrap();
    assert_eq!(response.code(), 404);
    assert_eq!(response.body(), "");
}

#[test]
fn test_cli_without_arguments_prints_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_barehttp"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("barehttp [GET/POST] [URL]"));
}

#[test]
fn test_cli_get() {
    let (port, server) = serve_once("HTTP/1.1 200 OK\r\n\r\nhello".into());

    let output = Command::new(env!("CARGO_BIN_EXE_barehttp"))
        .arg(format!("http://127.0.0.1:{port}/"))
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "200\nhello\n");
    server.join().unwrap();
}

#[test]
fn test_cli_post() {
    let (port, server) = serve_once("HTTP/1.1 201 Created\r\n\r\n".into());
    let url = format!("http://127.0.0.1:{port}/items");

    let output = Command::new(env!("CARGO_BIN_EXE_barehttp"))
        .args(["POST", url.as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "201\n\n");
    assert!(server.join().unwrap().starts_with("POST /items HTTP/1.1\r\n"));
}

#[test]
fn test_cli_unreachable() {
    let port = closed_port();
    let output = Command::new(env!("CARGO_BIN_EXE_barehttp"))
        .arg(format!("http://127.0.0.1:{port}/"))
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "404\n\n");
}
