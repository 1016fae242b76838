use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid dimensions {0:?}: expected WIDTHxHEIGHT, e.g. 1654x2339")]
    InvalidDimensions(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
