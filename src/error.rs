use thiserror::Error;

pub type SeriesResult<T> = Result<T, SeriesError>;

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("malformed region code: `{code}` is not six decimal digits")]
    MalformedCode { code: String },

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("series source failed: {0}")]
    Source(String),
}
