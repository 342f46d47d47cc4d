use thiserror::Error;

pub type OscilloResult<T> = Result<T, OscilloError>;

#[derive(Debug, Error)]
pub enum OscilloError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown channel `{0}`")]
    UnknownChannel(String),

    #[error("channel set must contain at least one channel")]
    EmptyChannelSet,
}
