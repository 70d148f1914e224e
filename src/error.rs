use thiserror::Error;

pub type NavResult<T> = Result<T, NavError>;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("chart surface has no chart area configured")]
    MissingChartArea,

    #[error("invalid data: {0}")]
    InvalidData(String),
}
