use fl_core::CoreError;
use fl_force::ForceError;
use fl_timer::TimerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("unknown event type {0:?}")]
    UnknownEvent(String),

    #[error("force {name:?} failed: {source}")]
    Force {
        name:   String,
        #[source]
        source: ForceError,
    },

    #[error("timer error: {0}")]
    Timer(#[from] TimerError),
}

pub type SimResult<T> = Result<T, SimError>;
