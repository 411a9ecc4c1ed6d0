//! Error types for the request layer

use thiserror::Error;

/// Main error type for the request layer
///
/// URL construction is infallible; the only failure mode in this crate is
/// body serialization.
#[derive(Error, Debug)]
pub enum UpcloudError {
    #[error("XML serialization error: {0}")]
    Xml(#[from] quick_xml::SeError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UpcloudError>;
