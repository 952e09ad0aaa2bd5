use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Schedule model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Invalid model response: {0}")]
    ModelResponse(String),

    #[error("Internal error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
