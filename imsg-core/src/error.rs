use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImsgError {
    /// A date bound was supplied but matched none of the ISO-8601 profiles. Carries the literal as given.
    #[error("Invalid ISO8601 date: {0}")]
    InvalidIsoDate(String),
}

pub type Result<T> = std::result::Result<T, ImsgError>;
