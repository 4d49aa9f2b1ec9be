use thiserror::Error;

/// Everything that can abort the poll loop. There is deliberately no retry
/// path behind any of these: the dashboard fails fast and leaves recovery to
/// the operator.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Transport failure or a non-success status from the status endpoint.
    #[error("request to the status endpoint failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the expected `RoomInfos` schema.
    #[error("malformed upstream response: {0}")]
    MalformedUpstreamResponse(String),

    /// The status endpoint URL could not be parsed.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// A runtime setting failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),
}
