use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, StoreError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: StoreError = io.into();
        assert!(matches!(err, StoreError::Io(_)));
        assert_eq!(err.to_string(), "IO error: nope");
    }

    #[test]
    fn test_kind_helpers() {
        assert!(StoreError::NotFound("users/zoro".into()).is_not_found());
        assert!(!StoreError::NotFound("users/zoro".into()).is_invalid_argument());
        assert!(StoreError::InvalidArgument("empty".into()).is_invalid_argument());
    }
}
