use criterion::{criterion_group, criterion_main};

mod network {
    pub mod application {
        pub mod http {
            pub mod message;
            pub mod response;
        }
    }
}

criterion_group!(
    benches,
    network::application::http::message::bench_get_message,
    network::application::http::message::bench_post_message,
    network::application::http::message::bench_parse_url,
    network::application::http::response::bench_parse_response
);
criterion_main!(benches);
