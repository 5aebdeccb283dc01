use thiserror::Error;

use crate::core::types::{Point, UnitId};

#[derive(Error, Debug)]
pub enum SkirmishError {
    #[error("Unknown cell '{symbol}' at ({x},{y})")]
    InvalidInput { symbol: char, x: usize, y: usize },

    #[error("Line {line} has length {found}, expected {expected}")]
    RaggedInput {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Battlefield input is empty")]
    EmptyInput,

    #[error("Grid access out of bounds: {0}")]
    OutOfBounds(Point),

    #[error("Unit not found: {0}")]
    UnknownUnit(UnitId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Stalemate after {rounds} rounds: no unit can move or attack")]
    Stalemate { rounds: u32 },

    #[error("Combat exceeded the round limit of {limit}")]
    RoundLimit { limit: u32 },

    #[error("No flawless Elf victory with attack power up to {max_attack}")]
    NoFlawlessVictory { max_attack: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkirmishError>;
