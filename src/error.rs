use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("transport failure: {0}")]
    Transport(String),
}

#[cfg(feature = "http-source")]
impl From<reqwest::Error> for ChartError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string())
    }
}
