use crate::charts::ChartError;
use crate::data::{InputError, ValidationError};
use thiserror::Error;

/// Every way a run can fail. None of them are retried.
#[derive(Error, Debug)]
pub enum GrowthError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GrowthError>;
