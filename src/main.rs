//! # barehttp
//!
//! Command-line front end for the raw-socket HTTP client.
//!
//! ```text
//! barehttp <URL>             GET the URL
//! barehttp <METHOD> <URL>    GET or POST the URL
//! ```
//!
//! Prints the status code on the first line and the body after it. Set
//! `RUST_LOG=debug` to see connection details on stderr.
use barehttp::network::application::http::Client;
use barehttp::network::tcp::TcpConnector;
use log::error;
use std::env;
use std::process;

fn usage() {
    println!("barehttp [GET/POST] [URL]\n");
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let mut client = Client::new(TcpConnector::new());

    let result = match args.len() {
        0 | 1 => {
            usage();
            process::exit(1);
        }
        3 => client.command(&args[2], &args[1], &[]),
        _ => client.command(&args[1], "GET", &[]),
    };

    match result {
        Ok(response) => println!("{response}"),
        Err(e) => {
            error!("request failed: {e}");
            process::exit(1);
        }
    }
}
