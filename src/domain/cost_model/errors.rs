//! Cost model error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by cost calculations and module table construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostModelError {
    #[error("Store count must be greater than zero, got {0}")]
    InvalidStoreCount(i64),

    #[error("Unrecognized discount tier: '{0}'")]
    UnknownDiscountTier(String),

    #[error("Duplicate cost module: '{0}'")]
    DuplicateModule(String),

    #[error("Invalid cost module: {0}")]
    InvalidModule(#[from] ValidationError),
}

impl CostModelError {
    /// Every cost model failure is a caller-supplied bad argument.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidArgument
    }
}

impl From<CostModelError> for DomainError {
    fn from(err: CostModelError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_store_count_is_invalid_argument() {
        let err = CostModelError::InvalidStoreCount(-5);
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
        assert_eq!(err.to_string(), "Store count must be greater than zero, got -5");
    }

    #[test]
    fn converts_into_domain_error() {
        let err: DomainError = CostModelError::UnknownDiscountTier("65%".to_string()).into();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert!(err.message.contains("65%"));
    }
}
