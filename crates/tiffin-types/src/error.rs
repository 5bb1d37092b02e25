use thiserror::Error;

/// Errors produced by type-level validation.
#[derive(Debug, Error, PartialEq)]
pub enum TypeError {
    #[error("owner id must not be blank")]
    BlankOwnerId,

    #[error("mobile number too long: {actual} characters, maximum {max}")]
    MobileTooLong { max: usize, actual: usize },

    #[error("price must be non-negative, got {0}")]
    NegativePrice(f64),

    #[error("price must be a finite number")]
    NonFinitePrice,

    #[error("invalid id: {0}")]
    InvalidId(String),
}
