use thiserror::Error;

#[derive(Error, Debug)]
pub enum DifficultyError {
    #[error("Player not registered: {0}")]
    PlayerNotFound(crate::core::types::PlayerId),

    #[error("Unknown creature category: {0}")]
    UnknownCategory(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),

    #[error("TOML encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, DifficultyError>;
