use thiserror::Error;

/// Errors raised while turning a payload into [`Media`](super::Media) records.
#[derive(Debug, Error)]
pub enum Error {
    /// Not JSON, or a field has a type the schema does not allow.
    #[error("failed to decode payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Valid JSON that is missing a structure the decoder needs.
    #[error("malformed payload: {0}")]
    MalformedPayload(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
