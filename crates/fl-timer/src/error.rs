use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimerError {
    #[error("failed to spawn timer thread: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type TimerResult<T> = Result<T, TimerError>;
