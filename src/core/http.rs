use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_ENCODING};
use reqwest::Client;

/// Sent when the embedding launcher does not name itself.
pub const DEFAULT_USER_AGENT: &str = concat!("modloader-core/", env!("CARGO_PKG_VERSION"));

/// Client shared by every backend in a registry.
///
/// Bodies are requested uncompressed so streamed jars land on disk byte for
/// byte as the repository serves them.
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("identity"));

    Client::builder()
        .user_agent(user_agent)
        .default_headers(default_headers)
        .build()
}
