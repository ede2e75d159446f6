use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForceError {
    #[error("force configuration error: {0}")]
    Config(String),

    #[error("force failed: {0}")]
    Failed(String),
}

pub type ForceResult<T> = Result<T, ForceError>;
