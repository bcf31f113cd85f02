use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotmapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch hotspot data: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    #[error("Malformed hotspot data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate hotspot id: {0}")]
    DuplicateId(String),

    #[error("Invalid zoom levels: {0}")]
    InvalidZoom(String),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

/// The two ways loading the hotspot collection can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFailure {
    /// Network error, missing file or non-success response.
    Load,
    /// Response body is not a valid hotspot collection.
    Parse,
}

impl HotmapError {
    /// Classify a data-source error. `None` for errors unrelated to loading data.
    pub fn data_failure(&self) -> Option<DataFailure> {
        match self {
            Self::Io(_) | Self::Fetch(_) | Self::HttpStatus { .. } => Some(DataFailure::Load),
            Self::Parse(_) | Self::DuplicateId(_) => Some(DataFailure::Parse),
            Self::InvalidZoom(_) | Self::Config(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HotmapError>;
