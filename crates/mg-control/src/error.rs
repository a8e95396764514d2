use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("command parse error: {0}")]
    Parse(String),
}

pub type ControlResult<T> = Result<T, ControlError>;
