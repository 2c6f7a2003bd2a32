use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("ticket {0} not found")]
    TicketNotFound(String),
    #[error("classification error: {0}")]
    Classification(String),
    #[error("ticket store error: {0}")]
    TicketStore(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
