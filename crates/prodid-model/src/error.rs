use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid product id '{0}': expected a letter followed by a letter or digit")]
    InvalidProductId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
