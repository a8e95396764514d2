use mg_belief::BeliefError;
use mg_core::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("belief update failed: {0}")]
    Belief(#[from] BeliefError),
}

pub type SessionResult<T> = Result<T, SessionError>;
