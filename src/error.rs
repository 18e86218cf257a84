//! Error taxonomy for the resolution workflow.
//!
//! Backend failures are kept distinct from "no result" internally so they
//! can be logged, but they never cross the public resolver boundary.

use thiserror::Error;

/// Failure talking to a remote backend (geocoder or map-data service).
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure: connection error, timeout, etc.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A latitude/longitude pair outside the valid WGS84 ranges.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("coordinate out of range: ({latitude}, {longitude})")]
pub struct InvalidCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}
