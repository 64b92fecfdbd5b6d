use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown region code: {code}")]
    UnknownRegion { code: String },
    #[error("unknown source format: {value} (expected tsv or json)")]
    UnknownFormat { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
