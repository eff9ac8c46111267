use thiserror::Error;

use crate::session::GamePhase;

#[derive(Error, Debug)]
pub enum ClashError {
    #[error("Unknown fighter: {0}")]
    UnknownFighter(String),

    #[error("Unknown stage: {0}")]
    UnknownStage(String),

    #[error("Operation not allowed during {0:?}")]
    WrongPhase(GamePhase),

    #[error("Action queue is already full ({0} actions)")]
    QueueFull(usize),

    #[error("Action queue incomplete: {queued} of {required} actions")]
    QueueIncomplete { queued: usize, required: usize },

    #[error("Not enough energy: {required} required, {available} available")]
    InsufficientEnergy { required: i32, available: i32 },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Renderer error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ClashError>;
