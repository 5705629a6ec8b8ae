use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid signature pattern: {0}")]
    InvalidPattern(String),

    #[error("Level block at offset {offset:#x} is truncated: need {needed} bytes, {available} available")]
    TruncatedBlock {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Game type not supported yet: {0}")]
    UnsupportedGameType(String),

    #[error("No level signature found in card data")]
    SignatureNotFound,

    #[error("Level {0} not found in card data")]
    LevelNotFound(u8),

    #[error("Cell ({row}, {col}) is outside the level grid")]
    OutOfBounds { row: usize, col: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
