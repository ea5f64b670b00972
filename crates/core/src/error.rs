#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid hardware specification: {0}")]
    InvalidSpecification(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
