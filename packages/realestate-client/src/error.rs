use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors returned by `RealEstateClient`.
///
/// All variants are terminal for the call — the client never retries.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response (unreachable host,
    /// connection reset, timeout).
    #[error("listings request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("listings endpoint returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body did not match the listing schema.
    #[error("failed to decode listings response: {0}")]
    Decode(#[from] serde_json::Error),
}
