pub mod guest;
pub mod money;
pub mod property;
pub mod repository;
pub mod stay;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Malformed property data: {0}")]
    PropertyDataError(String),
    #[error("Internal engine error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
