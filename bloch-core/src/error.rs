//! Tipos de erro para bloch-core

use thiserror::Error;

/// Resultado customizado para operações do visualizador
pub type BlochResult<T> = Result<T, BlochError>;

/// Erros que podem ocorrer na fronteira do modelo (parsing e configuração)
#[derive(Debug, Error)]
pub enum BlochError {
    #[error("Unknown gate: '{0}'")]
    UnknownGate(String),

    #[error("Invalid action: '{0}'")]
    InvalidAction(String),

    #[error("Slider {slider} out of range: {value} (expected 0..={max})")]
    SliderOutOfRange {
        slider: &'static str,
        value: i64,
        max: i64,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
