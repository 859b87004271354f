use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected status {status} fetching {url}")]
    Status { status: u16, url: String },

    #[error("Invalid response encoding: {0}")]
    InvalidEncoding(String),
}
