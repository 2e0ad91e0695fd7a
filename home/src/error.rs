use thiserror::Error;

#[derive(Debug, Error)]
pub enum HomeError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

pub type Result<T, E = HomeError> = std::result::Result<T, E>;
