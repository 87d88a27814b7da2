use thiserror::Error;

/// Failures of a single call to the NEIS open-data API.
///
/// These never reach the HTTP layer: the schedule aggregator downgrades a failed
/// call to an empty contribution.
#[derive(Error, Debug)]
pub enum NeisError {
    /// Transport failure, error status or undecodable body.
    #[error("NEIS request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Base URL could not be joined with the resource path.
    #[error("Invalid NEIS URL: {0}")]
    Url(#[from] url::ParseError),
}
