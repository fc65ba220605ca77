pub mod openapi;
pub mod remote;

pub use openapi::{load_openapi, parse_openapi};
pub use remote::fetch_openapi;

use crate::error::Result;
use crate::models::openapi::SpecDocument;

/// Whether a spec location should be fetched over HTTP
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Load a spec from an HTTP(S) URL or a local file path
pub async fn load_source(location: &str) -> Result<SpecDocument> {
    if is_remote(location) {
        let text = fetch_openapi(location).await?;
        parse_openapi(&text)
    } else {
        load_openapi(location)
    }
}
