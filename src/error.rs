use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("degenerate scale domain: start={start}, end={end}")]
    DegenerateDomain { start: f64, end: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
